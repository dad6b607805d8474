// Presence models for the rotating bot status

use poise::serenity_prelude as serenity;
use tracing::warn;

use crate::models::server::ServerInfo;

/// Activity category shown in front of the status text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusKind {
    #[default]
    Game,
    Stream,
    Listen,
    Watch,
}

impl StatusKind {
    pub const ALL: [StatusKind; 4] = [
        StatusKind::Game,
        StatusKind::Stream,
        StatusKind::Listen,
        StatusKind::Watch,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StatusKind::Game => "Game",
            StatusKind::Stream => "Stream",
            StatusKind::Listen => "Listen",
            StatusKind::Watch => "Watch",
        }
    }

    /// Parse the configured value, falling back to `Game` with a warning
    pub fn from_config(value: &str) -> Self {
        match value.parse() {
            Ok(kind) => kind,
            Err(e) => {
                warn!("{}", e);
                StatusKind::Game
            }
        }
    }

    /// Build the serenity activity for this kind
    pub fn activity(&self, name: String, stream_url: &str) -> serenity::Result<serenity::ActivityData> {
        Ok(match self {
            StatusKind::Game => serenity::ActivityData::playing(name),
            StatusKind::Stream => serenity::ActivityData::streaming(name, stream_url)?,
            StatusKind::Listen => serenity::ActivityData::listening(name),
            StatusKind::Watch => serenity::ActivityData::watching(name),
        })
    }
}

impl std::str::FromStr for StatusKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusKind::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| format!("Unknown Status Type '{}'", s))
    }
}

/// Guild values read from the serenity cache
#[derive(Debug, Clone, Default)]
pub struct GuildSnapshot {
    pub name: String,
    pub member_count: u64,
    pub channel_count: usize,
}

/// Everything a status template can reference, gathered once per format
#[derive(Debug, Clone, Default)]
pub struct StatusSnapshot {
    /// `None` until the guild is resolved and cached
    pub guild: Option<GuildSnapshot>,
    pub server: ServerInfo,
    /// `None` when no wipe schedule is configured
    pub days_until_wipe: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_kinds() {
        assert_eq!("Game".parse::<StatusKind>(), Ok(StatusKind::Game));
        assert_eq!("Stream".parse::<StatusKind>(), Ok(StatusKind::Stream));
        assert_eq!("Listen".parse::<StatusKind>(), Ok(StatusKind::Listen));
        assert_eq!("Watch".parse::<StatusKind>(), Ok(StatusKind::Watch));
    }

    #[test]
    fn test_unknown_kind_defaults_to_game() {
        assert!("Compete".parse::<StatusKind>().is_err());
        assert_eq!(StatusKind::from_config("Compete"), StatusKind::Game);
        // Matching is exact, like the config file keys
        assert_eq!(StatusKind::from_config("watch"), StatusKind::Game);
    }

    #[test]
    fn test_activity_kind() {
        let activity = StatusKind::Watch.activity("10 Online".into(), "https://twitch.tv/x").unwrap();
        assert_eq!(activity.kind, serenity::ActivityType::Watching);
        assert_eq!(activity.name, "10 Online");
    }
}
