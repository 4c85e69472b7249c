pub mod plan_lookup;
pub mod webhook_ingest;

pub use plan_lookup::{get_plan, PlanLookup};
pub use webhook_ingest::{ingest, IngestEvent, IngestOutcome};
