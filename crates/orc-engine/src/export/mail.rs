use base64::Engine;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use tracing::{info, warn};

use super::report::AttachmentKind;
use crate::config::MailConfig;

pub const MESSAGE_BODY: &str = "Thank you for using the ORC Calculator.\n\n\
Please find attached your ORC calculation results. The report contains the \
detailed breakdown of your Owner Reimbursement Costs calculation.";

const PDF_ENGINE: base64::engine::GeneralPurpose = base64::engine::general_purpose::STANDARD;

/// Plain local part or quoted string, then a dotted host name or an IPv4
/// literal in brackets.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^(([^<>()\[\]\\.,;:\s@"]+(\.[^<>()\[\]\\.,;:\s@"]+)*)|(".+"))@((\[[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{2,}))$"#,
    )
    .expect("email regex is valid")
});

/// Report content as submitted by a caller, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportContent {
    Csv(String),
    /// Rendered PDF, base64 encoded.
    PdfBase64(String),
}

/// Validated report content carried by an [`EmailRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Attachment {
    Csv(String),
    Pdf(Vec<u8>),
}

impl Attachment {
    pub fn kind(&self) -> AttachmentKind {
        match self {
            Self::Csv(_) => AttachmentKind::Csv,
            Self::Pdf(_) => AttachmentKind::Pdf,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Csv(content) => content.len(),
            Self::Pdf(bytes) => bytes.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TryFrom<ReportContent> for Attachment {
    type Error = MailError;

    fn try_from(content: ReportContent) -> Result<Self, Self::Error> {
        let attachment = match content {
            ReportContent::Csv(content) if content.trim().is_empty() => {
                return Err(MailError::MissingContent)
            }
            ReportContent::Csv(content) => Self::Csv(content),
            ReportContent::PdfBase64(encoded) => {
                let compact: String = encoded
                    .chars()
                    .filter(|c| !c.is_ascii_whitespace())
                    .collect();
                if compact.is_empty() {
                    return Err(MailError::MissingContent);
                }
                let bytes = PDF_ENGINE
                    .decode(compact)
                    .map_err(|err| MailError::InvalidAttachment(err.to_string()))?;
                Self::Pdf(bytes)
            }
        };

        if attachment.is_empty() {
            return Err(MailError::MissingContent);
        }
        Ok(attachment)
    }
}

/// Validated request handed to a [`MailDispatcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailRequest {
    pub from: String,
    pub recipient: String,
    pub subject: String,
    pub body: String,
    pub attachment: Attachment,
}

impl EmailRequest {
    /// Reject malformed recipients and empty or undecodable reports. A blank
    /// subject falls back to the configured default.
    pub fn new(
        recipient: &str,
        subject: Option<&str>,
        content: ReportContent,
        config: &MailConfig,
    ) -> Result<Self, MailError> {
        let recipient = recipient.trim();
        if !is_valid_email(recipient) {
            return Err(MailError::InvalidRecipient(recipient.to_string()));
        }
        let attachment = Attachment::try_from(content)?;

        let subject = subject
            .map(str::trim)
            .filter(|subject| !subject.is_empty())
            .unwrap_or(&config.default_subject)
            .to_string();

        Ok(Self {
            from: config.from.clone(),
            recipient: recipient.to_string(),
            subject,
            body: MESSAGE_BODY.to_string(),
            attachment,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchReceipt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
}

/// Outbound mail transport. Implementations live in the hosting service.
pub trait MailDispatcher: Send + Sync {
    fn dispatch(&self, request: &EmailRequest) -> Result<DispatchReceipt, MailError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("invalid email address '{0}'")]
    InvalidRecipient(String),
    #[error("email and report content are required")]
    MissingContent,
    #[error("PDF attachment is not valid base64: {0}")]
    InvalidAttachment(String),
    #[error("no mail transport is configured")]
    NotConfigured,
    #[error("mail server authentication failed: {0}")]
    Authentication(String),
    #[error("failed to connect to mail server: {0}")]
    Connection(String),
    #[error("mail transport failed: {0}")]
    Transport(String),
}

impl MailError {
    /// Whether the caller supplied a bad request rather than the transport failing.
    pub fn is_rejected_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidRecipient(_) | Self::MissingContent | Self::InvalidAttachment(_)
        )
    }

    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::InvalidRecipient(_) => "Check the email address and try again.",
            Self::MissingContent | Self::InvalidAttachment(_) => {
                "Generate the report again before sending it."
            }
            Self::NotConfigured
            | Self::Authentication(_)
            | Self::Connection(_)
            | Self::Transport(_) => {
                "Please try downloading the report instead or contact support."
            }
        }
    }
}

/// Send a request through the dispatcher, logging the outcome.
pub fn send(
    dispatcher: &dyn MailDispatcher,
    request: &EmailRequest,
) -> Result<DispatchReceipt, MailError> {
    let kind = request.attachment.kind();
    match dispatcher.dispatch(request) {
        Ok(receipt) => {
            info!(
                recipient = %request.recipient,
                attachment = kind.extension(),
                bytes = request.attachment.len(),
                message_id = receipt.message_id.as_deref().unwrap_or("-"),
                "report emailed"
            );
            Ok(receipt)
        }
        Err(err) => {
            warn!(recipient = %request.recipient, error = %err, "report email failed");
            Err(err)
        }
    }
}

pub fn is_valid_email(raw: &str) -> bool {
    EMAIL_PATTERN.is_match(raw)
}
