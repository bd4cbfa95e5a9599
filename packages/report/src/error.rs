use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReportError>;

/// Every failure is fatal to the invocation; nothing here is retried.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Configuration error: {0}")]
    Configuration(String),
    #[error("Invalid amount in record {index}: {reason}")]
    Data { index: usize, reason: String },
    #[error("Order table error: {0}")]
    Table(String),
    #[error("Report storage error: {0}")]
    Storage(String),
    #[error("Notification error: {0}")]
    Notification(String),
}
