use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::info;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    /// Creates a new EventSender
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event asynchronously
    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }
}

// The various events the quotation workflows can emit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    QuotationCreated(Uuid),
    QuotationUpdated(Uuid),
    QuotationCopied {
        source_id: Uuid,
        new_id: Uuid,
        quotation_number: String,
    },
    CustomerQuotationSynced {
        quotation_number: String,
    },
}

/// Drains the event channel. Runs for the lifetime of the process; at
/// the moment consumers are log-only, downstream integrations hook in
/// here.
pub async fn process_events(mut rx: mpsc::Receiver<Event>) {
    info!("Starting event processing loop");

    while let Some(event) = rx.recv().await {
        match &event {
            Event::QuotationCreated(id) => {
                info!(quotation_id = %id, "quotation created");
            }
            Event::QuotationUpdated(id) => {
                info!(quotation_id = %id, "quotation updated");
            }
            Event::QuotationCopied {
                source_id,
                new_id,
                quotation_number,
            } => {
                info!(
                    source_id = %source_id,
                    new_id = %new_id,
                    quotation_number = %quotation_number,
                    "quotation copied"
                );
            }
            Event::CustomerQuotationSynced { quotation_number } => {
                info!(quotation_number = %quotation_number, "customer quotation synced");
            }
        }
    }

    info!("Event channel closed; stopping event processing");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_delivers_event() {
        let (tx, mut rx) = mpsc::channel(4);
        let sender = EventSender::new(tx);

        sender
            .send(Event::QuotationCreated(Uuid::new_v4()))
            .await
            .expect("send should succeed");

        match rx.recv().await {
            Some(Event::QuotationCreated(_)) => {}
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn send_fails_when_receiver_dropped() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let sender = EventSender::new(tx);

        let result = sender.send(Event::QuotationUpdated(Uuid::new_v4())).await;
        assert!(result.is_err());
    }
}
