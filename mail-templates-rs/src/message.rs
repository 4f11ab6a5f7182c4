//! Outbound message assembly
//!
//! Wraps rendered template bodies in a complete email: fixed sender identity,
//! reply-to, per-template subject line, and an RFC 5322 MIME string built
//! with `mail-builder`. Transport is left to the mailing pipeline.

use chrono::{DateTime, Utc};
use mail_builder::MessageBuilder;
use serde::Deserialize;
use tracing::debug;

use crate::error::Result;
use crate::templates::{RenderContext, TemplateId, TemplateRenderer};

/// Timestamp format used on receipts, e.g. `01 Jan 2024, 09:30`
const RECEIPT_TIME_FORMAT: &str = "%d %b %Y, %H:%M";

/// Sender identity applied to every outbound message
#[derive(Debug, Clone, Deserialize)]
pub struct SenderConfig {
    pub from_name: String,
    pub from_address: String,
    pub reply_to_address: String,
}

/// A recorded marketplace purchase, as supplied by the caller
#[derive(Debug, Clone, Deserialize)]
pub struct Receipt {
    /// Display name of the purchased resource
    pub resource_name: String,
    /// Lowercase slug, used to address the resource icon
    pub resource_slug: String,
    pub amount: String,
    pub currency: String,
    pub marketplace: String,
    pub transaction_reference: String,
    pub timestamp: DateTime<Utc>,
}

/// A fully assembled email, ready to hand to the transport layer
#[derive(Debug)]
pub struct ComposedEmail {
    pub subject: String,
    /// Rendered HTML body
    pub html: String,
    /// Complete MIME message including headers
    pub mime: String,
}

/// Builds complete outbound emails from the built-in templates
#[derive(Debug, Clone)]
pub struct MessageComposer {
    sender: SenderConfig,
}

impl MessageComposer {
    pub fn new(sender: SenderConfig) -> Self {
        Self { sender }
    }

    /// Compose the email-verification message for a user
    pub fn verification(
        &self,
        username: &str,
        to_address: &str,
        verify_url: &str,
        code: &str,
    ) -> Result<ComposedEmail> {
        let ctx = RenderContext::new()
            .with("USERNAME", username)
            .with("VERIFY_URL", verify_url)
            .with("VERIFY_CODE", code);
        let subject = format!("📩 Verify your email address - {}", self.sender.from_name);

        self.compose(TemplateId::VerifyEmail, &ctx, subject, (username, to_address))
    }

    /// Compose the purchase receipt message for a transaction
    pub fn purchase_receipt(&self, to_address: &str, receipt: &Receipt) -> Result<ComposedEmail> {
        let ctx = RenderContext::new()
            .with("RESOURCE_NAME", &receipt.resource_name)
            .with("RESOURCE_NAME_LOWER", &receipt.resource_slug)
            .with(
                "RESOURCE_PURCHASE_PRICE",
                format!("{} {}", receipt.amount, receipt.currency),
            )
            .with("RESOURCE_MARKETPLACE", &receipt.marketplace)
            .with("RESOURCE_TRANSACTION_ID", &receipt.transaction_reference)
            .with(
                "RESOURCE_TRANSACTION_TIME",
                receipt
                    .timestamp
                    .format(RECEIPT_TIME_FORMAT)
                    .to_string(),
            );
        let subject = format!(
            "📦 Your {} purchase receipt - {}",
            receipt.resource_name, self.sender.from_name
        );

        self.compose(
            TemplateId::PurchaseReceipt,
            &ctx,
            subject,
            ("", to_address),
        )
    }

    fn compose(
        &self,
        id: TemplateId,
        ctx: &RenderContext,
        subject: String,
        (to_name, to_address): (&str, &str),
    ) -> Result<ComposedEmail> {
        let html = TemplateRenderer::render(id, ctx)?;

        let mut builder = MessageBuilder::new()
            .from((self.sender.from_name.as_str(), self.sender.from_address.as_str()))
            .reply_to((
                self.sender.from_name.as_str(),
                self.sender.reply_to_address.as_str(),
            ))
            .subject(subject.as_str())
            .html_body(html.as_str());
        builder = if to_name.is_empty() {
            builder.to(to_address)
        } else {
            builder.to((to_name, to_address))
        };
        let mime = builder.write_to_string()?;

        debug!(template = %id, to = to_address, "composed outbound email");
        Ok(ComposedEmail {
            subject,
            html,
            mime,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn composer() -> MessageComposer {
        MessageComposer::new(SenderConfig {
            from_name: "William278.net".to_string(),
            from_address: "noreply@william278.net".to_string(),
            reply_to_address: "contact@william278.net".to_string(),
        })
    }

    #[test]
    fn test_verification_message() {
        let email = composer()
            .verification("alice", "alice@example.com", "https://x/y", "482913")
            .unwrap();

        assert_eq!(
            email.subject,
            "📩 Verify your email address - William278.net"
        );
        assert!(email.html.contains("@alice"));
        assert!(email.html.contains("482913"));
        assert!(email.mime.contains("alice@example.com"));
        assert!(email.mime.contains("Reply-To"));
    }

    #[test]
    fn test_purchase_receipt_message() {
        let receipt = Receipt {
            resource_name: "SuperPlugin".to_string(),
            resource_slug: "superplugin".to_string(),
            amount: "9.99".to_string(),
            currency: "GBP".to_string(),
            marketplace: "Polymart".to_string(),
            transaction_reference: "TX123".to_string(),
            timestamp: Utc.with_ymd_and_hms(2024, 1, 1, 9, 30, 0).unwrap(),
        };
        let email = composer()
            .purchase_receipt("buyer@example.com", &receipt)
            .unwrap();

        assert_eq!(
            email.subject,
            "📦 Your SuperPlugin purchase receipt - William278.net"
        );
        assert!(email.html.contains("Price: 9.99 GBP"));
        assert!(email.html.contains("Time: 01 Jan 2024, 09:30"));
        assert!(email.html.contains("superplugin_icon.png"));
        assert!(email.mime.contains("buyer@example.com"));
    }
}
