use axum::Json;
use serde_derive::Serialize;

#[derive(Serialize)]
pub struct InfoResponse {
    health: String,
    version: String,
    app_name: String,
    app_description: String,
}

const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");
const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

pub async fn get_info() -> Json<InfoResponse> {
    Json(InfoResponse {
        version: VERSION.to_string(),
        health: "healthy".to_string(),
        app_description: DESCRIPTION.to_string(),
        app_name: NAME.to_string(),
    })
}
