// PulseCheck triage core: response normalization, enrichment fan-out,
// seed guard, digest aggregation, and the trait boundaries to the model
// and the store.

pub mod analysis;
pub mod digest;
pub mod enrich;
pub mod error;
pub mod fixtures;
pub mod seed;
pub mod store;
pub mod testing;
pub mod traits;

pub use enrich::Enricher;
pub use error::{Result, TriageError};
pub use seed::{SeedOutcome, Seeder};
pub use store::PgFeedbackStore;
pub use traits::{FeedbackStore, InferenceClient};
