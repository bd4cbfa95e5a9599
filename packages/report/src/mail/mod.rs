use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

#[cfg(feature = "aws")]
mod ses;

#[cfg(feature = "aws")]
pub use ses::SesReportMailer;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub body_text: String,
}

#[async_trait]
pub trait ReportMailer: Send + Sync {
    async fn send(&self, message: ReportEmail) -> Result<()>;
}

pub type DynReportMailer = Arc<dyn ReportMailer>;
