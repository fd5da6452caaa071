use serde_derive::{Deserialize, Serialize};

use crate::models::coordinate::Coordinate;

/// The four fields relayed from one push message. Discarded once the
/// presenter has consumed it, nothing stores these.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct NotificationPayload {
    pub title: Option<String>,
    pub body: Option<String>,
    pub longitude: Option<String>,
    pub latitude: Option<String>,
}

impl NotificationPayload {
    /// Both coordinate fields must be present and parse as decimals,
    /// anything else means the map stays where it is.
    pub fn coordinate(&self) -> Option<Coordinate> {
        Coordinate::from_fields(self.longitude.as_deref(), self.latitude.as_deref())
    }

    pub fn has_coordinate_fields(&self) -> bool {
        self.longitude.is_some() || self.latitude.is_some()
    }
}
