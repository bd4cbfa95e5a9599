use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;
use crate::record::OrderRecord;

#[cfg(feature = "aws")]
mod dynamodb;
#[cfg(feature = "aws")]
mod s3;

#[cfg(feature = "aws")]
pub use dynamodb::DynamoDbOrderTable;
#[cfg(feature = "aws")]
pub use s3::S3ReportBucket;

/// Read side of the order log.
#[async_trait]
pub trait OrderTable: Send + Sync {
    /// Every record currently in `table`, from a single scan page.
    async fn scan_orders(&self, table: &str) -> Result<Vec<OrderRecord>>;
}

/// Destination for rendered reports.
#[async_trait]
pub trait ReportBucket: Send + Sync {
    /// Write `body` under `key`, replacing any existing object.
    async fn put_report(&self, bucket: &str, key: &str, body: String) -> Result<()>;
}

pub type DynOrderTable = Arc<dyn OrderTable>;
pub type DynReportBucket = Arc<dyn ReportBucket>;
