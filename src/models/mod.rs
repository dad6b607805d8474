// Data models
pub mod server;
pub mod status;
