use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_sesv2::{
    Client,
    types::{Body, Content, Destination, EmailContent, Message},
};

use super::{ReportEmail, ReportMailer};
use crate::error::{ReportError, Result};

pub struct SesReportMailer {
    client: Client,
}

impl SesReportMailer {
    pub fn new(aws_config: &SdkConfig) -> Self {
        Self {
            client: Client::new(aws_config),
        }
    }
}

fn utf8_content(data: &str) -> Result<Content> {
    Content::builder()
        .data(data)
        .charset("UTF-8")
        .build()
        .map_err(|e| ReportError::Notification(format!("Invalid email content: {e}")))
}

#[async_trait]
impl ReportMailer for SesReportMailer {
    async fn send(&self, message: ReportEmail) -> Result<()> {
        let body = Body::builder()
            .text(utf8_content(&message.body_text)?)
            .build();

        let email_content = EmailContent::builder()
            .simple(
                Message::builder()
                    .subject(utf8_content(&message.subject)?)
                    .body(body)
                    .build(),
            )
            .build();

        let destination = Destination::builder()
            .set_to_addresses(Some(message.to.clone()))
            .build();

        self.client
            .send_email()
            .from_email_address(&message.from)
            .destination(destination)
            .content(email_content)
            .send()
            .await
            .map_err(|e| ReportError::Notification(format!("Failed to send email via SES: {e}")))?;

        Ok(())
    }
}
