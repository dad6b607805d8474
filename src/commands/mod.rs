// Chat commands
pub mod dispatcher;
pub mod ip;
pub mod players;
pub mod wipe;
