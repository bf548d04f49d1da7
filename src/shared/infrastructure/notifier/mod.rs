// Outbound notification port.
//
// The core composes messages; adapters only deliver them. Delivery is a
// single attempt: callers decide whether a failure matters.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod http;
pub mod in_memory;
pub mod log_only;

#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("invalid attendance data for email notification")]
    InvalidAttendanceData,

    #[error("notification transport failed: {0}")]
    Transport(String),

    #[error("notification rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundMessage {
    pub from_name: String,
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReceipt {
    #[serde(alias = "messageId")]
    pub message_id: String,
}

#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: OutboundMessage) -> Result<DeliveryReceipt, NotifierError>;
}
