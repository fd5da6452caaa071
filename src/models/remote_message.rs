use std::collections::HashMap;

use serde_derive::{Deserialize, Serialize};

/// Inbound push message as handed over by the transport.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct RemoteMessage {
    pub notification: Option<NotificationBlock>,
    #[serde(default)]
    pub data: HashMap<String, String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NotificationBlock {
    pub title: Option<String>,
    pub body: Option<String>,
}
