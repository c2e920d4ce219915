//! lambda-prune-core: Core library for pruning old Lambda function versions
//!
//! Keeps `$LATEST`, every aliased version and a window of the most recent
//! versions of each matching function, and deletes the rest.
//!
//! # Main Entry Points
//!
//! - [`prune`] - Orchestrate a prune run over all functions matching a prefix
//! - [`retention`] - Decide which versions survive
//! - [`listing`] - Follow continuation markers across listing pages
//! - [`deletion`] - Bounded-concurrency version deletion
//! - [`api`] - Management API trait and AWS SDK client
//! - [`config`] - Environment and file configuration

pub mod api;
pub mod config;
pub mod deletion;
pub mod errors;
pub mod events;
pub mod functions;
pub mod listing;
pub mod logging;
pub mod prune;
pub mod retention;

// Re-export commonly used types at crate root for convenience
pub use api::{ApiError, AwsLambdaClient, LambdaApi, Page};
pub use config::{AwsSettings, PruneConfig, RetentionConfig};
pub use errors::{ConfigError, PruneToolError};
pub use functions::{Alias, FunctionSummary, FunctionVersion, KeepReason, LATEST_VERSION};
pub use prune::{PruneError, PruneEvent, PruneRequest, PruneSummary};
pub use retention::RetentionPolicy;

// Re-export handler module as the primary API
pub use prune::handler as prune_ops;

// Re-export logging initialization
pub use logging::init_logging;
