use serde::{Deserialize, Serialize};

/// A player currently connected to the game server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OnlinePlayer {
    #[serde(alias = "displayName")]
    pub name: String,
    #[serde(alias = "userId", alias = "steamid")]
    pub steam_id: String,
}

impl OnlinePlayer {
    pub fn profile_url(&self) -> String {
        format!("https://steamcommunity.com/profiles/{}/", self.steam_id)
    }
}

/// Live game server state as published by the server's status endpoint.
///
/// Every field is optional so partial payloads still render; missing values
/// show up as `{unknown}` in status templates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerInfo {
    pub hostname: Option<String>,
    pub ip: Option<String>,
    pub port: Option<u16>,
    pub max_players: Option<u32>,
    pub players: Vec<OnlinePlayer>,
    pub sleepers: Option<u32>,
    pub queued: Option<u32>,
    pub joining: Option<u32>,
    pub entities: Option<u64>,
    pub world_size: Option<u32>,
    pub seed: Option<u32>,
    pub fps: Option<f32>,
    pub avg_fps: Option<f32>,
    /// Players with a linked Discord account
    pub linked_accounts: Option<u32>,
}

impl ServerInfo {
    pub fn online(&self) -> usize {
        self.players.len()
    }

    /// Online players plus sleepers
    pub fn total(&self) -> Option<u64> {
        self.sleepers.map(|s| self.online() as u64 + s as u64)
    }

    /// Fill in values the endpoint did not report from static settings
    pub fn with_fallbacks(mut self, hostname: Option<&str>, port: u16, max_players: Option<u32>) -> Self {
        if self.hostname.is_none() {
            self.hostname = hostname.map(str::to_string);
        }
        if self.port.is_none() {
            self.port = Some(port);
        }
        if self.max_players.is_none() {
            self.max_players = max_players;
        }
        self
    }
}
