use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_s3::{Client, primitives::ByteStream};

use super::ReportBucket;
use crate::error::{ReportError, Result};

const REPORT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

pub struct S3ReportBucket {
    client: Client,
}

impl S3ReportBucket {
    pub fn new(aws_config: &SdkConfig) -> Self {
        Self {
            client: Client::new(aws_config),
        }
    }
}

#[async_trait]
impl ReportBucket for S3ReportBucket {
    async fn put_report(&self, bucket: &str, key: &str, body: String) -> Result<()> {
        self.client
            .put_object()
            .bucket(bucket)
            .key(key)
            .content_type(REPORT_CONTENT_TYPE)
            .body(ByteStream::from(body.into_bytes()))
            .send()
            .await
            .map_err(|e| ReportError::Storage(format!("Put of s3://{bucket}/{key} failed: {e}")))?;

        Ok(())
    }
}
