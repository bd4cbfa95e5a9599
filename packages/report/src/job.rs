use std::env;

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::config::ReportConfig;
use crate::error::Result;
use crate::mail::{DynReportMailer, ReportEmail};
use crate::report::DailyReport;
use crate::store::{DynOrderTable, DynReportBucket};

pub const SUCCESS_MESSAGE: &str = "Report generated and email sent!";

/// Value handed back to the scheduler on success.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    pub status_code: u16,
    pub body: String,
}

impl JobResponse {
    pub fn success() -> Self {
        Self {
            status_code: 200,
            body: SUCCESS_MESSAGE.to_string(),
        }
    }
}

/// Fetch, aggregate, persist, notify. Each step awaits the previous one and
/// any failure ends the run.
#[derive(Clone)]
pub struct DailyReportJob {
    table: DynOrderTable,
    bucket: DynReportBucket,
    mailer: DynReportMailer,
}

impl DailyReportJob {
    pub fn new(table: DynOrderTable, bucket: DynReportBucket, mailer: DynReportMailer) -> Self {
        Self {
            table,
            bucket,
            mailer,
        }
    }

    /// One scheduled invocation: configuration comes from the environment and
    /// the report date is today in UTC.
    pub async fn run(&self) -> Result<JobResponse> {
        self.run_with(|key| env::var(key).ok(), Utc::now().date_naive())
            .await
    }

    /// Resolve configuration through `lookup`, then run for `date`. A
    /// configuration error returns before the table is touched.
    pub async fn run_with<F>(&self, lookup: F, date: NaiveDate) -> Result<JobResponse>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = ReportConfig::from_lookup(lookup)?;
        self.execute(&config, date).await
    }

    /// The date is resolved once by the caller and shared by the object key,
    /// the report body and the mail subject.
    #[instrument(skip(self, config), fields(table = %config.table_name, bucket = %config.bucket_name))]
    pub async fn execute(&self, config: &ReportConfig, date: NaiveDate) -> Result<JobResponse> {
        let records = self.table.scan_orders(&config.table_name).await?;
        tracing::info!(records = records.len(), "Fetched order records");

        let report = DailyReport::aggregate(date, &records)?;
        let report_text = report.render();
        tracing::info!(
            order_count = report.order_count,
            total_revenue = report.total_revenue,
            "Aggregated orders"
        );

        let key = report.object_key();
        self.bucket
            .put_report(&config.bucket_name, &key, report_text.clone())
            .await?;
        tracing::info!(%key, "Stored report");

        self.mailer
            .send(ReportEmail {
                from: config.admin_email.clone(),
                to: vec![config.admin_email.clone()],
                subject: report.email_subject(),
                body_text: report_text,
            })
            .await?;
        tracing::info!(recipient = %config.admin_email, "Sent report email");

        Ok(JobResponse::success())
    }
}
