use log::info;
use tokio::sync::oneshot;

use crate::api;
use crate::channel::EventChannel;
use crate::config::Config;
use crate::handlers::token_handler::{self, LocalTokenProvider};
use crate::map::console::ConsoleMapSurface;
use crate::models::notification_payload::NotificationPayload;
use crate::presenter::MapPresenter;

pub fn launch(conf: &Config, launch_payload: Option<NotificationPayload>) {
    // Print welcome message
    info!("Starting App in {}", conf.app.environment);

    let channel = EventChannel::new(&conf.channel.name, conf.channel.capacity);
    let (shutdown_tx, shutdown_rx) = oneshot::channel();

    // Build a multi-threaded Tokio runtime
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .thread_name("geopush-worker-thread")
        .enable_all()
        .build()
        .expect("Failed to create Tokio runtime");

    runtime.block_on(async {
        // Token is only ever reported, nothing waits on it
        tokio::spawn(token_handler::report_registration_token(LocalTokenProvider));

        let mut presenter = MapPresenter::new();
        presenter.attach(&channel);
        presenter.on_map_ready(ConsoleMapSurface::new(), launch_payload.as_ref());

        let presenter_handle = tokio::spawn(presenter.run(shutdown_rx));

        let server_conf = conf.server.clone();
        let ingress_channel = channel.clone();
        tokio::spawn(async move {
            api::init(&server_conf, ingress_channel).await;
        });

        // Wait for CTRL+C
        tokio::signal::ctrl_c().await.expect("Failed to listen for CTRL+C");

        // Send shutdown signal
        let _ = shutdown_tx.send(());

        // Wait for the presenter loop to wind down
        let _ = presenter_handle.await;
    })
}
