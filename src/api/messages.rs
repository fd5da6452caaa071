use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use http::StatusCode;

use crate::api::AppState;
use crate::handlers::relay_handler;
use crate::models::remote_message::RemoteMessage;

/// Ingress for the push transport. Always answers 202: delivery onto the
/// local channel is fire-and-forget and malformed messages are dropped at
/// the relay, not bounced back to the transport.
pub async fn post_message(
    State(state): State<Arc<AppState>>,
    Json(message): Json<RemoteMessage>,
) -> StatusCode {
    relay_handler::relay_message(&state.channel, message);

    StatusCode::ACCEPTED
}
