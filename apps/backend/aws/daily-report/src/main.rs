#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use chrono::Utc;
use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use order_report::{DailyReportJob, JobResponse};
use serde_json::Value;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let sentry_endpoint = std::env::var("SENTRY_ENDPOINT").unwrap_or_default();

    // Warn by default to keep CloudWatch quiet, RUST_LOG overrides
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _sentry_guard = if sentry_endpoint.is_empty() {
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_filter(env_filter))
            .init();
        None
    } else {
        let guard = sentry::init((
            sentry_endpoint,
            sentry::ClientOptions {
                release: sentry::release_name!(),
                ..Default::default()
            },
        ));
        tracing_subscriber::registry()
            .with(tracing_subscriber::fmt::layer().with_filter(env_filter))
            .with(sentry_tracing::layer())
            .init();
        Some(guard)
    };

    // Clients are built on cold start and reused by warm invocations
    let aws_config = order_report::aws::load_sdk_config().await;
    let job = order_report::aws::job_from_sdk_config(&aws_config);
    let job = &job;

    run(service_fn(move |event: LambdaEvent<Value>| async move {
        scheduled_handler(job, event, |key| std::env::var(key).ok()).await
    }))
    .await
}

/// The trigger payload is only logged; any JSON, including `{}`, starts a run.
async fn scheduled_handler<F>(
    job: &DailyReportJob,
    event: LambdaEvent<Value>,
    lookup: F,
) -> Result<JobResponse, Error>
where
    F: Fn(&str) -> Option<String>,
{
    tracing::info!(
        request_id = %event.context.request_id,
        detail_type = event.payload.get("detail-type").and_then(serde_json::Value::as_str).unwrap_or_default(),
        "Daily report triggered"
    );

    job.run_with(lookup, Utc::now().date_naive())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Daily report failed");
            Error::from(e)
        })
}
