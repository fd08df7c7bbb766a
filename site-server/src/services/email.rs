//! Inquiry email notifications
//!
//! Sends a plain-text note to the mall office when a new inquiry
//! arrives. Fire-and-forget: intake never waits on, or fails with,
//! the mail provider.

use aws_sdk_sesv2::types::{Body, Content, Destination, EmailContent, Message};
use aws_sdk_sesv2::Client as SesClient;

use shared::models::{Inquiry, InquiryKind};

use crate::core::Config;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// SES-backed notification sender
#[derive(Clone)]
pub struct EmailService {
    ses: SesClient,
    from: String,
    to: String,
}

impl EmailService {
    /// Build from configuration; `None` when notifications are not
    /// configured (both addresses are required).
    pub async fn from_config(config: &Config) -> Option<Self> {
        let to = config.inquiry_notify_to.clone()?;
        let from = config.inquiry_notify_from.clone()?;

        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let ses = SesClient::new(&aws_config);

        Some(Self { ses, from, to })
    }

    /// Spawn the notification send in the background and return
    /// immediately. Errors are logged, never surfaced to the visitor.
    pub fn notify_inquiry(&self, inquiry: Inquiry) {
        let service = self.clone();
        tokio::spawn(async move {
            if let Err(e) = service.send_inquiry_notification(&inquiry).await {
                tracing::warn!(error = %e, inquiry_id = inquiry.id, "Inquiry notification failed");
            }
        });
    }

    async fn send_inquiry_notification(&self, inquiry: &Inquiry) -> Result<(), BoxError> {
        let kind_label = match inquiry.kind {
            InquiryKind::Contact => "İletişim formu / Contact form",
            InquiryKind::Leasing => "Kiralama talebi / Leasing inquiry",
        };

        let subject = Content::builder()
            .data(format!("Yeni başvuru: {} - {}", kind_label, inquiry.name))
            .build()?;

        let details_pretty = serde_json::to_string_pretty(&inquiry.details)
            .unwrap_or_else(|_| inquiry.details.to_string());
        let body_text = format!(
            "{kind_label}\n\n\
             Ad / Name: {}\n\
             E-posta / Email: {}\n\
             Telefon / Phone: {}\n\n\
             Detaylar / Details:\n{}\n",
            inquiry.name,
            inquiry.email,
            inquiry.phone.as_deref().unwrap_or("-"),
            details_pretty,
        );

        let body = Body::builder()
            .text(Content::builder().data(body_text).build()?)
            .build();

        let message = Message::builder().subject(subject).body(body).build();

        self.ses
            .send_email()
            .from_email_address(&self.from)
            .destination(Destination::builder().to_addresses(&self.to).build())
            .content(EmailContent::builder().simple(message).build())
            .send()
            .await?;

        tracing::info!(to = %self.to, inquiry_id = inquiry.id, "Inquiry notification sent");
        Ok(())
    }
}
