use crate::shared::infrastructure::notifier::{
    DeliveryReceipt, Notifier, NotifierError, OutboundMessage,
};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

/// Posts messages as JSON to a mail relay endpoint.
#[derive(Debug, Clone)]
pub struct HttpNotifier {
    client: Client,
    endpoint: String,
    sender: String,
}

#[derive(Serialize)]
struct RelayRequest<'a> {
    from: String,
    to: &'a str,
    subject: &'a str,
    text: &'a str,
    html: &'a str,
}

impl HttpNotifier {
    pub fn new(
        endpoint: impl Into<String>,
        sender: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, NotifierError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NotifierError::Transport(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            sender: sender.into(),
        })
    }
}

#[async_trait]
impl Notifier for HttpNotifier {
    async fn send(&self, message: OutboundMessage) -> Result<DeliveryReceipt, NotifierError> {
        let body = RelayRequest {
            from: format!("\"{}\" <{}>", message.from_name, self.sender),
            to: &message.to,
            subject: &message.subject,
            text: &message.text,
            html: &message.html,
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(|e| NotifierError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifierError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<DeliveryReceipt>()
            .await
            .map_err(|e| NotifierError::Transport(e.to_string()))
    }
}
