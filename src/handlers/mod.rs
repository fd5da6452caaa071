pub mod relay_handler;
pub mod token_handler;
