//! AWS wiring: one shared SDK config, one client per service.

use std::sync::Arc;

use aws_config::{BehaviorVersion, SdkConfig};

use crate::job::DailyReportJob;
use crate::mail::SesReportMailer;
use crate::store::{DynamoDbOrderTable, S3ReportBucket};

/// Load region and credentials from the default provider chain.
pub async fn load_sdk_config() -> SdkConfig {
    aws_config::load_defaults(BehaviorVersion::latest()).await
}

/// Build the job backed by DynamoDB, S3 and SES v2.
pub fn job_from_sdk_config(aws_config: &SdkConfig) -> DailyReportJob {
    DailyReportJob::new(
        Arc::new(DynamoDbOrderTable::new(aws_config)),
        Arc::new(S3ReportBucket::new(aws_config)),
        Arc::new(SesReportMailer::new(aws_config)),
    )
}
