use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::oneshot;
use tokio::time::sleep;

use crate::channel::EventChannel;
use crate::handlers::relay_handler;
use crate::map::{MapSurface, MarkerIcon};
use crate::models::coordinate::Coordinate;
use crate::models::remote_message::{NotificationBlock, RemoteMessage};
use crate::presenter::MapPresenter;

#[derive(Clone, Debug, PartialEq)]
enum SurfaceOp {
    Clear,
    Marker(f64, f64, String),
    Animate(f64, f64, f32),
}

#[derive(Clone)]
struct RecordingSurface {
    ops: Arc<Mutex<Vec<SurfaceOp>>>,
}

impl MapSurface for RecordingSurface {
    fn clear_markers(&mut self) {
        self.ops.lock().expect("ops").push(SurfaceOp::Clear);
    }

    fn add_marker(&mut self, position: Coordinate, title: &str, _icon: MarkerIcon) {
        self.ops.lock().expect("ops").push(SurfaceOp::Marker(
            position.latitude,
            position.longitude,
            title.to_string(),
        ));
    }

    fn animate_to(&mut self, position: Coordinate, zoom: f32) {
        self.ops.lock().expect("ops").push(SurfaceOp::Animate(
            position.latitude,
            position.longitude,
            zoom,
        ));
    }
}

fn inbound_message(longitude: &str, latitude: &str) -> RemoteMessage {
    RemoteMessage {
        notification: Some(NotificationBlock {
            title: Some("T".to_string()),
            body: Some("B".to_string()),
        }),
        data: [
            ("longitude".to_string(), longitude.to_string()),
            ("latitude".to_string(), latitude.to_string()),
        ]
        .into_iter()
        .collect(),
    }
}

#[tokio::test]
async fn inbound_message_moves_the_marker() {
    let channel = EventChannel::new("MAP_ACTIVITY_BROADCAST_CHANNEL", 16);
    let ops = Arc::new(Mutex::new(Vec::new()));

    let mut presenter = MapPresenter::new();
    presenter.attach(&channel);
    presenter.on_map_ready(RecordingSurface { ops: ops.clone() }, None);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let presenter_handle = tokio::spawn(presenter.run(shutdown_rx));

    relay_handler::relay_message(&channel, inbound_message("3.14", "-1.0"));

    sleep(Duration::from_millis(50)).await;
    shutdown_tx.send(()).expect("shutdown");
    presenter_handle.await.expect("presenter task");

    assert_eq!(
        *ops.lock().expect("ops"),
        vec![
            SurfaceOp::Marker(0.0, 0.0, String::new()),
            SurfaceOp::Clear,
            SurfaceOp::Marker(-1.0, 3.14, "B".to_string()),
            SurfaceOp::Animate(-1.0, 3.14, 10.0),
        ]
    );
}

#[tokio::test]
async fn malformed_inbound_message_leaves_the_presenter_running() {
    let channel = EventChannel::new("MAP_ACTIVITY_BROADCAST_CHANNEL", 16);
    let ops = Arc::new(Mutex::new(Vec::new()));

    let mut presenter = MapPresenter::new();
    presenter.attach(&channel);
    presenter.on_map_ready(RecordingSurface { ops: ops.clone() }, None);

    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let presenter_handle = tokio::spawn(presenter.run(shutdown_rx));

    let mut malformed = inbound_message("3.14", "-1.0");
    malformed.notification = None;
    relay_handler::relay_message(&channel, malformed);

    // A well-formed follow-up still goes through
    relay_handler::relay_message(&channel, inbound_message("8.0", "50.0"));

    sleep(Duration::from_millis(50)).await;
    shutdown_tx.send(()).expect("shutdown");
    presenter_handle.await.expect("presenter task");

    assert_eq!(
        *ops.lock().expect("ops"),
        vec![
            SurfaceOp::Marker(0.0, 0.0, String::new()),
            SurfaceOp::Clear,
            SurfaceOp::Marker(50.0, 8.0, "B".to_string()),
            SurfaceOp::Animate(50.0, 8.0, 10.0),
        ]
    );
}
