use crate::shared::core::primitives::new_id;
use crate::shared::infrastructure::notifier::{
    DeliveryReceipt, Notifier, NotifierError, OutboundMessage,
};

/// Used when no relay endpoint is configured: the message is logged, not sent.
#[derive(Debug, Default, Clone)]
pub struct LogOnlyNotifier;

#[async_trait::async_trait]
impl Notifier for LogOnlyNotifier {
    async fn send(&self, message: OutboundMessage) -> Result<DeliveryReceipt, NotifierError> {
        tracing::info!(
            to = %message.to,
            subject = %message.subject,
            "notification relay not configured, message logged only"
        );
        Ok(DeliveryReceipt {
            message_id: format!("log-only-{}", new_id()),
        })
    }
}

#[cfg(test)]
mod log_only_notifier_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn it_should_accept_every_message() {
        let receipt = LogOnlyNotifier
            .send(OutboundMessage {
                from_name: "MICE Attendance System".into(),
                to: "ada@example.com".into(),
                subject: "subject".into(),
                text: "text".into(),
                html: "html".into(),
            })
            .await
            .expect("send failed");
        assert!(receipt.message_id.starts_with("log-only-"));
    }
}
