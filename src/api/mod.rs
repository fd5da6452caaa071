use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use log::info;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::channel::EventChannel;
use crate::config::ServerConf;

mod info;
mod messages;

pub struct AppState {
    pub channel: EventChannel,
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(info::get_info))
        .route("/message", post(messages::post_message))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn init(server_conf: &ServerConf, channel: EventChannel) {
    let address = format!("{}:{}", server_conf.address, server_conf.port);

    let app = build_router(Arc::new(AppState { channel }));

    let try_socket = TcpListener::bind(&address).await;

    let listener = try_socket.expect("Failed to bind");
    info!("Listening on: {}", address);

    axum::serve(listener, app).await.unwrap();
}
