// External HTTP APIs
pub mod game_server;
pub mod public_ip;
