use std::env;

use crate::error::{ReportError, Result};

pub const TABLE_ENV: &str = "DYNAMODB_TABLE";
pub const BUCKET_ENV: &str = "REPORTS_BUCKET";
pub const ADMIN_EMAIL_ENV: &str = "ADMIN_EMAIL";

/// Settings for one report run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportConfig {
    /// Order table to scan.
    pub table_name: String,
    /// Bucket the rendered report is written to.
    pub bucket_name: String,
    /// Sender and sole recipient of the report mail.
    pub admin_email: String,
}

impl ReportConfig {
    /// Placeholder used when `ADMIN_EMAIL` is not set. Deployments are
    /// expected to override it.
    pub const DEFAULT_ADMIN_EMAIL: &'static str = "admin@example.com";

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolve the settings through `lookup`. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let table_name =
            get(TABLE_ENV).ok_or_else(|| ReportError::Configuration(format!("{TABLE_ENV} not set")))?;
        let bucket_name = get(BUCKET_ENV)
            .ok_or_else(|| ReportError::Configuration(format!("{BUCKET_ENV} not set")))?;
        let admin_email =
            get(ADMIN_EMAIL_ENV).unwrap_or_else(|| Self::DEFAULT_ADMIN_EMAIL.to_string());

        Ok(Self {
            table_name,
            bucket_name,
            admin_email,
        })
    }
}
