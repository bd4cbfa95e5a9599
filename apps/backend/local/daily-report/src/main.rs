use chrono::{NaiveDate, Utc};
use dotenv::dotenv;
use order_report::ReportConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Optional `YYYY-MM-DD` override, e.g. to regenerate a missed day's object.
const REPORT_DATE_ENV: &str = "REPORT_DATE";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = ReportConfig::from_env()?;
    let date = report_date(std::env::var(REPORT_DATE_ENV).ok().as_deref())?;
    tracing::info!(
        "Running daily report: table={}, bucket={}, date={}",
        config.table_name,
        config.bucket_name,
        date
    );

    let aws_config = order_report::aws::load_sdk_config().await;
    let job = order_report::aws::job_from_sdk_config(&aws_config);
    let response = job.execute(&config, date).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn report_date(raw: Option<&str>) -> Result<NaiveDate, String> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(Utc::now().date_naive()),
        Some(value) => NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map_err(|e| format!("Invalid {REPORT_DATE_ENV} {value:?}: {e}")),
    }
}
