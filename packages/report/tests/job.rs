use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use order_report::{
    DailyReportJob, JobResponse, OrderRecord, OrderTable, ReportBucket, ReportConfig, ReportEmail,
    ReportError, ReportMailer, Result,
};

#[derive(Default)]
struct FakeTable {
    records: Vec<OrderRecord>,
    fail: bool,
    scanned: Mutex<Vec<String>>,
}

#[async_trait]
impl OrderTable for FakeTable {
    async fn scan_orders(&self, table: &str) -> Result<Vec<OrderRecord>> {
        self.scanned.lock().unwrap().push(table.to_string());
        if self.fail {
            return Err(ReportError::Table("table unavailable".into()));
        }
        Ok(self.records.clone())
    }
}

#[derive(Default)]
struct RecordingBucket {
    fail: bool,
    puts: Mutex<Vec<(String, String)>>,
    objects: Mutex<HashMap<(String, String), String>>,
}

#[async_trait]
impl ReportBucket for RecordingBucket {
    async fn put_report(&self, bucket: &str, key: &str, body: String) -> Result<()> {
        if self.fail {
            return Err(ReportError::Storage("access denied".into()));
        }
        self.puts
            .lock()
            .unwrap()
            .push((bucket.to_string(), key.to_string()));
        self.objects
            .lock()
            .unwrap()
            .insert((bucket.to_string(), key.to_string()), body);
        Ok(())
    }
}

#[derive(Default)]
struct RecordingMailer {
    fail: bool,
    attempts: Mutex<usize>,
    sent: Mutex<Vec<ReportEmail>>,
}

#[async_trait]
impl ReportMailer for RecordingMailer {
    async fn send(&self, message: ReportEmail) -> Result<()> {
        *self.attempts.lock().unwrap() += 1;
        if self.fail {
            return Err(ReportError::Notification("address not verified".into()));
        }
        self.sent.lock().unwrap().push(message);
        Ok(())
    }
}

struct Harness {
    table: Arc<FakeTable>,
    bucket: Arc<RecordingBucket>,
    mailer: Arc<RecordingMailer>,
    job: DailyReportJob,
}

impl Harness {
    fn new(table: FakeTable, bucket: RecordingBucket, mailer: RecordingMailer) -> Self {
        let table = Arc::new(table);
        let bucket = Arc::new(bucket);
        let mailer = Arc::new(mailer);
        let job = DailyReportJob::new(table.clone(), bucket.clone(), mailer.clone());
        Self {
            table,
            bucket,
            mailer,
            job,
        }
    }

    fn with_records(records: Vec<OrderRecord>) -> Self {
        Self::new(
            FakeTable {
                records,
                ..Default::default()
            },
            RecordingBucket::default(),
            RecordingMailer::default(),
        )
    }

    fn put_count(&self) -> usize {
        self.bucket.puts.lock().unwrap().len()
    }

    fn mail_attempts(&self) -> usize {
        *self.mailer.attempts.lock().unwrap()
    }
}

fn config(admin_email: Option<&str>) -> ReportConfig {
    ReportConfig::from_lookup(|key| match key {
        "DYNAMODB_TABLE" => Some("orders".to_string()),
        "REPORTS_BUCKET" => Some("order-reports".to_string()),
        "ADMIN_EMAIL" => admin_email.map(str::to_string),
        _ => None,
    })
    .unwrap()
}

fn report_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
}

#[tokio::test]
async fn generates_stores_and_mails_the_report() {
    let harness = Harness::with_records(vec![
        OrderRecord::with_text("10.50"),
        OrderRecord::with_text("5.00"),
        OrderRecord::default(),
    ]);

    let response = harness
        .job
        .execute(&config(Some("ops@shop.test")), report_date())
        .await
        .unwrap();

    assert_eq!(response, JobResponse::success());
    assert_eq!(response.status_code, 200);
    assert_eq!(*harness.table.scanned.lock().unwrap(), vec!["orders"]);

    let expected = "Daily Report - 2025-01-31\nTotal Orders: 3\nTotal Revenue: $15.50";
    let objects = harness.bucket.objects.lock().unwrap();
    let stored = objects
        .get(&("order-reports".to_string(), "report_2025-01-31.json".to_string()))
        .expect("report object");
    assert_eq!(stored, expected);

    let sent = harness.mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].from, "ops@shop.test");
    assert_eq!(sent[0].to, vec!["ops@shop.test".to_string()]);
    assert_eq!(sent[0].subject, "E-Commerce Daily Report: 2025-01-31");
    assert_eq!(sent[0].body_text, expected);
}

#[tokio::test]
async fn empty_table_produces_zero_report() {
    let harness = Harness::with_records(Vec::new());

    harness
        .job
        .execute(&config(None), report_date())
        .await
        .unwrap();

    let sent = harness.mailer.sent.lock().unwrap();
    assert!(sent[0].body_text.contains("Total Orders: 0"));
    assert!(sent[0].body_text.contains("Total Revenue: $0.00"));
}

#[tokio::test]
async fn default_admin_email_is_sender_and_recipient() {
    let harness = Harness::with_records(vec![OrderRecord::with_number("1")]);

    harness
        .job
        .execute(&config(None), report_date())
        .await
        .unwrap();

    let sent = harness.mailer.sent.lock().unwrap();
    assert_eq!(sent[0].from, ReportConfig::DEFAULT_ADMIN_EMAIL);
    assert_eq!(sent[0].to, vec![ReportConfig::DEFAULT_ADMIN_EMAIL.to_string()]);
}

#[tokio::test]
async fn malformed_amount_stops_before_any_side_effect() {
    let harness = Harness::with_records(vec![
        OrderRecord::with_number("3"),
        OrderRecord::with_text("three"),
    ]);

    let err = harness
        .job
        .execute(&config(None), report_date())
        .await
        .unwrap_err();

    assert!(matches!(err, ReportError::Data { index: 1, .. }));
    assert_eq!(harness.put_count(), 0);
    assert_eq!(harness.mail_attempts(), 0);
}

#[tokio::test]
async fn table_failure_stops_before_any_side_effect() {
    let harness = Harness::new(
        FakeTable {
            fail: true,
            ..Default::default()
        },
        RecordingBucket::default(),
        RecordingMailer::default(),
    );

    let err = harness
        .job
        .execute(&config(None), report_date())
        .await
        .unwrap_err();

    assert!(matches!(err, ReportError::Table(_)));
    assert_eq!(harness.put_count(), 0);
    assert_eq!(harness.mail_attempts(), 0);
}

#[tokio::test]
async fn storage_failure_never_attempts_email() {
    let harness = Harness::new(
        FakeTable {
            records: vec![OrderRecord::with_number("9.99")],
            ..Default::default()
        },
        RecordingBucket {
            fail: true,
            ..Default::default()
        },
        RecordingMailer::default(),
    );

    let err = harness
        .job
        .execute(&config(None), report_date())
        .await
        .unwrap_err();

    assert!(matches!(err, ReportError::Storage(_)));
    assert_eq!(harness.mail_attempts(), 0);
}

#[tokio::test]
async fn email_failure_leaves_stored_report_in_place() {
    let harness = Harness::new(
        FakeTable {
            records: vec![OrderRecord::with_number("9.99")],
            ..Default::default()
        },
        RecordingBucket::default(),
        RecordingMailer {
            fail: true,
            ..Default::default()
        },
    );

    let err = harness
        .job
        .execute(&config(None), report_date())
        .await
        .unwrap_err();

    assert!(matches!(err, ReportError::Notification(_)));
    assert_eq!(harness.put_count(), 1);
    assert_eq!(harness.mail_attempts(), 1);
    assert!(harness.mailer.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn same_day_rerun_overwrites_object_and_mails_again() {
    let harness = Harness::with_records(vec![OrderRecord::with_number("20")]);
    let config = config(None);

    harness.job.execute(&config, report_date()).await.unwrap();
    harness.job.execute(&config, report_date()).await.unwrap();

    assert_eq!(harness.put_count(), 2);
    assert_eq!(harness.bucket.objects.lock().unwrap().len(), 1);
    assert_eq!(harness.mailer.sent.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn missing_table_or_bucket_aborts_before_scanning() {
    for missing in ["DYNAMODB_TABLE", "REPORTS_BUCKET"] {
        let harness = Harness::with_records(vec![OrderRecord::with_number("12")]);

        let err = harness
            .job
            .run_with(
                |key| match key {
                    "DYNAMODB_TABLE" | "REPORTS_BUCKET" if key != missing => {
                        Some("configured".to_string())
                    }
                    _ => None,
                },
                report_date(),
            )
            .await
            .unwrap_err();

        assert!(
            matches!(&err, ReportError::Configuration(msg) if msg.contains(missing)),
            "unexpected error for {missing}: {err}"
        );
        assert!(harness.table.scanned.lock().unwrap().is_empty());
        assert_eq!(harness.put_count(), 0);
        assert_eq!(harness.mail_attempts(), 0);
    }
}

#[tokio::test]
async fn run_with_resolves_configuration_from_lookup() {
    let harness = Harness::with_records(vec![OrderRecord::with_number("7.25")]);

    let response = harness
        .job
        .run_with(
            |key| match key {
                "DYNAMODB_TABLE" => Some("orders-prod".to_string()),
                "REPORTS_BUCKET" => Some("reports-prod".to_string()),
                _ => None,
            },
            report_date(),
        )
        .await
        .unwrap();

    assert_eq!(response, JobResponse::success());
    assert_eq!(*harness.table.scanned.lock().unwrap(), vec!["orders-prod"]);
    assert_eq!(
        *harness.bucket.puts.lock().unwrap(),
        vec![("reports-prod".to_string(), "report_2025-01-31.json".to_string())]
    );
    assert_eq!(
        harness.mailer.sent.lock().unwrap()[0].to,
        vec![ReportConfig::DEFAULT_ADMIN_EMAIL.to_string()]
    );
}
