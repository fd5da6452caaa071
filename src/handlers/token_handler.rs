use async_trait::async_trait;
use log::{error, info};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum TokenError {
    #[error("Registration token unavailable: {0}")]
    Unavailable(String),
}

/// Async source of the push registration token. The result is only ever
/// formatted into a log line, nothing gates on it.
#[async_trait]
pub trait TokenProvider {
    async fn get_token(&self) -> Result<String, TokenError>;
}

/// Stands in for the transport's registration endpoint with a locally
/// fabricated token.
pub struct LocalTokenProvider;

#[async_trait]
impl TokenProvider for LocalTokenProvider {
    async fn get_token(&self) -> Result<String, TokenError> {
        Ok(Uuid::new_v4().simple().to_string())
    }
}

pub async fn report_registration_token<P: TokenProvider>(provider: P) {
    match provider.get_token().await {
        Ok(token) => info!("Registration token: {}", token),
        Err(err) => error!("Could not fetch registration token: {}", err),
    }
}
