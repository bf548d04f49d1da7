use crate::shared::infrastructure::notifier::{
    DeliveryReceipt, Notifier, NotifierError, OutboundMessage,
};
use tokio::sync::Mutex;

#[derive(Default)]
pub struct InMemoryNotifier {
    pub sent: Mutex<Vec<OutboundMessage>>,
    is_offline: bool,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl Notifier for InMemoryNotifier {
    async fn send(&self, message: OutboundMessage) -> Result<DeliveryReceipt, NotifierError> {
        if self.is_offline {
            return Err(NotifierError::Transport("Notifier offline".into()));
        }
        let mut sent = self.sent.lock().await;
        sent.push(message);
        Ok(DeliveryReceipt {
            message_id: format!("inmem-{}", sent.len()),
        })
    }
}
