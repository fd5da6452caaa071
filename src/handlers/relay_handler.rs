use log::{debug, error};
use thiserror::Error;

use crate::channel::EventChannel;
use crate::models::notification_payload::NotificationPayload;
use crate::models::remote_message::RemoteMessage;

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Inbound message carries no notification block")]
    MissingNotification,
}

/// Pulls the four payload fields out of an inbound message. A message
/// without a notification block is malformed, a missing data entry is not.
pub fn extract_payload(message: &RemoteMessage) -> Result<NotificationPayload, RelayError> {
    let notification = message
        .notification
        .as_ref()
        .ok_or(RelayError::MissingNotification)?;

    Ok(NotificationPayload {
        title: notification.title.clone(),
        body: notification.body.clone(),
        longitude: message.data.get("longitude").cloned(),
        latitude: message.data.get("latitude").cloned(),
    })
}

/// Republishes one inbound message on the local channel. Malformed messages
/// are logged and dropped here, they never reach a subscriber or the caller.
pub fn relay_message(channel: &EventChannel, message: RemoteMessage) {
    match extract_payload(&message) {
        Ok(payload) => {
            let receivers = channel.publish(payload);
            debug!(
                "Relayed message on {} to {} subscriber(s)",
                channel.name(),
                receivers
            );
        }
        Err(err) => error!("Dropping inbound message: {}", err),
    }
}
