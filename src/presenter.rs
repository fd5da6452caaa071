use log::{debug, warn};
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::broadcast::Receiver;
use tokio::sync::oneshot;

use crate::channel::EventChannel;
use crate::map::{MapSurface, MarkerIcon, NOTIFICATION_ZOOM};
use crate::models::coordinate::Coordinate;
use crate::models::notification_payload::NotificationPayload;

/// Listens on the event channel and drives the map surface. Holds no
/// surface until the map-ready callback fires, payloads arriving before
/// that are dropped.
pub struct MapPresenter<S: MapSurface> {
    surface: Option<S>,
    subscription: Option<Receiver<NotificationPayload>>,
}

impl<S: MapSurface> MapPresenter<S> {
    pub fn new() -> MapPresenter<S> {
        MapPresenter {
            surface: None,
            subscription: None,
        }
    }

    /// Subscribes to the channel. Calling this again while a subscription
    /// is live is a no-op, so a lifecycle that re-attaches on every resume
    /// never ends up with duplicate handlers.
    pub fn attach(&mut self, channel: &EventChannel) {
        if self.subscription.is_none() {
            self.subscription = Some(channel.subscribe());
        }
    }

    pub fn detach(&mut self) {
        self.subscription = None;
    }

    pub fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }

    /// The map surface finished initializing. Places the default marker at
    /// the origin, then applies the cold-start payload if the process was
    /// launched from a notification tap.
    pub fn on_map_ready(&mut self, mut surface: S, launch_payload: Option<&NotificationPayload>) {
        surface.add_marker(Coordinate::ORIGIN, "", MarkerIcon::Red);
        self.surface = Some(surface);

        if let Some(payload) = launch_payload {
            self.apply_payload(payload);
        }
    }

    /// One recenter pass: with both coordinates present and parseable,
    /// clear the map, drop a marker titled with the body text and move the
    /// camera. Anything else leaves the map untouched.
    pub fn apply_payload(&mut self, payload: &NotificationPayload) {
        let surface = match self.surface.as_mut() {
            Some(surface) => surface,
            None => {
                debug!("Payload arrived before the map was ready, dropped");
                return;
            }
        };

        match payload.coordinate() {
            Some(position) => {
                surface.clear_markers();
                surface.add_marker(position, payload.body.as_deref().unwrap_or(""), MarkerIcon::Red);
                surface.animate_to(position, NOTIFICATION_ZOOM);
            }
            None if payload.has_coordinate_fields() => {
                debug!("Payload coordinates did not parse, map left in place");
            }
            None => {
                debug!("Payload without coordinates, map left in place");
            }
        }
    }

    /// Event loop for the visible lifetime: applies payloads from the
    /// subscription until the channel closes or shutdown fires.
    pub async fn run(mut self, mut shutdown: oneshot::Receiver<()>) {
        let mut subscription = match self.subscription.take() {
            Some(subscription) => subscription,
            None => {
                warn!("Presenter started without a channel subscription");
                return;
            }
        };

        loop {
            tokio::select! {
                received = subscription.recv() => match received {
                    Ok(payload) => self.apply_payload(&payload),
                    Err(RecvError::Lagged(missed)) => {
                        warn!("Presenter lagged, {} payload(s) skipped", missed);
                    }
                    Err(RecvError::Closed) => break,
                },
                _ = &mut shutdown => break,
            }
        }
    }
}
