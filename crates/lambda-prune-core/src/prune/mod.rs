pub mod errors;
pub mod handler;
pub mod types;

// Public API exports
pub use errors::PruneError;
pub use handler::{prune_function, prune_functions};
pub use types::{
    DeletionOptions, DeletionOutcome, FunctionReport, KeptVersion, PruneEvent, PruneRequest,
    PruneSummary,
};
