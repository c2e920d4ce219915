pub mod types;

pub use types::{Alias, FunctionSummary, FunctionVersion, KeepReason, LATEST_VERSION};
