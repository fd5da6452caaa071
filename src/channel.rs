use log::debug;
use tokio::sync::broadcast;

use crate::models::notification_payload::NotificationPayload;

/// In-process event channel the relay publishes on and the presenter
/// subscribes to. Created by the application shell and handed to both ends,
/// never stored globally.
#[derive(Clone)]
pub struct EventChannel {
    name: String,
    tx: broadcast::Sender<NotificationPayload>,
}

impl EventChannel {
    pub fn new(name: &str, capacity: usize) -> EventChannel {
        let (tx, _) = broadcast::channel(capacity);

        EventChannel {
            name: name.to_string(),
            tx,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fire-and-forget publish. Returns how many subscribers saw the value.
    pub fn publish(&self, payload: NotificationPayload) -> usize {
        match self.tx.send(payload) {
            Ok(receivers) => receivers,
            Err(_) => {
                debug!("No subscriber on {}, payload dropped", self.name);
                0
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<NotificationPayload> {
        self.tx.subscribe()
    }
}
