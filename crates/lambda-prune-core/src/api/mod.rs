//! Remote function-management API: the trait the pruner is written
//! against and its AWS SDK implementation.

pub mod aws;
pub mod errors;
#[cfg(test)]
pub mod mock;
pub mod traits;

pub use aws::AwsLambdaClient;
pub use errors::ApiError;
pub use traits::{LambdaApi, Page};
