use crate::modules::attendance::core::confirmation::{Recipient, compose_confirmation};
use crate::shared::core::primitives::EpochMillis;
use crate::shared::infrastructure::notifier::{DeliveryReceipt, Notifier, NotifierError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SendConfirmationError {
    #[error("missing required fields")]
    MissingFields,

    #[error(transparent)]
    Notifier(#[from] NotifierError),
}

#[derive(Debug, Clone, Default)]
pub struct SendConfirmation {
    pub recipient: Option<Recipient>,
    pub event_title: Option<String>,
    pub time_in: Option<EpochMillis>,
    pub time_out: Option<EpochMillis>,
}

/// Composes and sends a confirmation outside of the scan flow.
pub async fn handle(
    notifier: &dyn Notifier,
    command: SendConfirmation,
) -> Result<DeliveryReceipt, SendConfirmationError> {
    let (Some(recipient), Some(event_title)) = (
        command.recipient,
        command.event_title.filter(|t| !t.trim().is_empty()),
    ) else {
        return Err(SendConfirmationError::MissingFields);
    };

    let message = compose_confirmation(
        &recipient,
        &event_title,
        command.time_in,
        command.time_out,
    )?;
    let receipt = notifier.send(message).await.inspect_err(|e| {
        tracing::warn!(to = %recipient.email, error = %e, "confirmation delivery failed");
    })?;
    Ok(receipt)
}
