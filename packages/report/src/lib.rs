//! Daily order report job.
//!
//! Scans the order table, totals the `amount` of every record, writes a
//! plain-text report to the reports bucket and mails it to the administrator.
//!
//! ## Configuration
//!
//! ```bash
//! DYNAMODB_TABLE=orders            # required
//! REPORTS_BUCKET=order-reports     # required
//! ADMIN_EMAIL=ops@example.com      # optional, defaults to admin@example.com
//! ```
//!
//! The collaborators (table, bucket, mailer) are traits so the hosting
//! runtime builds the AWS clients once and tests can inject fakes.

pub mod config;
pub mod error;
pub mod job;
pub mod mail;
pub mod record;
pub mod report;
pub mod store;

#[cfg(feature = "aws")]
pub mod aws;

pub use config::ReportConfig;
pub use error::{ReportError, Result};
pub use job::{DailyReportJob, JobResponse};
pub use mail::{DynReportMailer, ReportEmail, ReportMailer};
pub use record::{OrderRecord, RawAmount};
pub use report::DailyReport;
pub use store::{DynOrderTable, DynReportBucket, OrderTable, ReportBucket};
