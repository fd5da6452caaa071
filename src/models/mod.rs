pub mod coordinate;
pub mod notification_payload;
pub mod remote_message;
