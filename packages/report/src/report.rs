use chrono::NaiveDate;

use crate::error::{ReportError, Result};
use crate::record::OrderRecord;

/// Totals over one scan of the order table.
#[derive(Clone, Debug, PartialEq)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub order_count: usize,
    pub total_revenue: f64,
}

impl DailyReport {
    /// Count every record and sum their amounts. The first malformed amount
    /// aborts the aggregation.
    pub fn aggregate(date: NaiveDate, records: &[OrderRecord]) -> Result<Self> {
        let mut total_revenue = 0.0;
        for (index, record) in records.iter().enumerate() {
            total_revenue += record
                .amount()
                .map_err(|reason| ReportError::Data { index, reason })?;
        }

        Ok(Self {
            date,
            order_count: records.len(),
            total_revenue,
        })
    }

    pub fn render(&self) -> String {
        format!(
            "Daily Report - {}\nTotal Orders: {}\nTotal Revenue: ${:.2}",
            self.date, self.order_count, self.total_revenue
        )
    }

    /// Kept as `.json` for existing consumers, the body is plain text.
    pub fn object_key(&self) -> String {
        format!("report_{}.json", self.date)
    }

    pub fn email_subject(&self) -> String {
        format!("E-Commerce Daily Report: {}", self.date)
    }
}
