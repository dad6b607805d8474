// Bot features
pub mod guild_resolver;
pub mod status_rotator;
pub mod status_updater;
pub mod wipe_schedule;
