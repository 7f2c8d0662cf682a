use metrics_exporter_prometheus::PrometheusHandle;
use orc_engine::config::MailConfig;
use orc_engine::export::{DispatchReceipt, EmailRequest, MailDispatcher, MailError};
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) mail: Arc<MailConfig>,
    pub(crate) mailer: Arc<dyn MailDispatcher>,
}

/// Dispatcher used when no mail transport is configured. Holds nothing and
/// reports every request as undeliverable so callers fall back to download.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct UnconfiguredMailer;

impl MailDispatcher for UnconfiguredMailer {
    fn dispatch(&self, request: &EmailRequest) -> Result<DispatchReceipt, MailError> {
        warn!(
            recipient = %request.recipient,
            attachment = request.attachment.kind().extension(),
            bytes = request.attachment.len(),
            "report email dropped, no mail transport configured"
        );
        Err(MailError::NotConfigured)
    }
}

#[cfg(test)]
pub(crate) use outbox::{InMemoryMailOutbox, OutboxMessage};

#[cfg(test)]
mod outbox {
    use chrono::Utc;
    use orc_engine::export::{
        attachment_file_name, DispatchReceipt, EmailRequest, MailDispatcher, MailError,
    };
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::{Arc, Mutex};

    /// Message captured by [`InMemoryMailOutbox`] instead of being delivered.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub(crate) struct OutboxMessage {
        pub(crate) message_id: String,
        pub(crate) file_name: String,
        pub(crate) request: EmailRequest,
    }

    #[derive(Default, Clone)]
    pub(crate) struct InMemoryMailOutbox {
        sent: Arc<Mutex<Vec<OutboxMessage>>>,
        sequence: Arc<AtomicU64>,
    }

    impl MailDispatcher for InMemoryMailOutbox {
        fn dispatch(&self, request: &EmailRequest) -> Result<DispatchReceipt, MailError> {
            let now = Utc::now();
            let sequence = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
            let message_id = format!("<{}.{}@orc-outbox.local>", now.timestamp_millis(), sequence);

            let mut guard = self.sent.lock().expect("outbox mutex poisoned");
            guard.push(OutboxMessage {
                message_id: message_id.clone(),
                file_name: attachment_file_name(now.date_naive(), request.attachment.kind()),
                request: request.clone(),
            });

            Ok(DispatchReceipt {
                message_id: Some(message_id),
            })
        }
    }

    impl InMemoryMailOutbox {
        pub(crate) fn sent(&self) -> Vec<OutboxMessage> {
            self.sent.lock().expect("outbox mutex poisoned").clone()
        }
    }
}
