// Bot configuration file
//
// Keys keep the human readable names server owners already have in their
// config files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{error, info};

use crate::features::wipe_schedule::ForcedWipeSchedule;
use crate::models::status::StatusKind;
use crate::utils::lang::Locale;

pub const DEFAULT_CONFIG_PATH: &str = "config/DiscordStatus.json";

/// Discord embed colors
pub mod colors {
    pub const STATS: u32 = 0xe74c3c;
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// What `Configuration::load` had to do to produce a config
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded,
    Created,
    /// The file did not parse and was saved to `backup`
    Repaired { backup: PathBuf },
}

impl LoadOutcome {
    /// Report the outcome once logging is up
    pub fn log(&self, path: &Path) {
        match self {
            LoadOutcome::Loaded => info!("Loaded config from {}", path.display()),
            LoadOutcome::Created => info!("Created default config at {}", path.display()),
            LoadOutcome::Repaired { backup } => error!(
                "The configuration file contains an error and has been replaced with a default config.\n\
                 The error configuration file was saved with the .jsonError extension ({})",
                backup.display()
            ),
        }
    }
}

/// Log verbosity for the Discord client libraries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogLevel {
    Verbose,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Exception,
    Off,
}

impl LogLevel {
    /// Directive level understood by `tracing_subscriber::EnvFilter`
    pub fn as_directive(&self) -> &'static str {
        match self {
            LogLevel::Verbose => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warning => "warn",
            LogLevel::Error | LogLevel::Exception => "error",
            LogLevel::Off => "off",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Configuration {
    #[serde(rename = "Discord Bot Token", default)]
    pub bot_token: String,

    /// 0 when unset
    #[serde(rename = "Discord Server ID (Optional if bot only in 1 guild)", default)]
    pub guild_id: u64,

    #[serde(rename = "Prefix", default = "default_prefix")]
    pub prefix: String,

    #[serde(rename = "Discord Group Id needed for Commands (null to disable)", default)]
    pub group_id: Option<u64>,

    #[serde(rename = "Discord Channel Id needed for Commands (null to disable)", default)]
    pub channel_id: Option<u64>,

    #[serde(rename = "Update Interval (Seconds)", default = "default_update_interval")]
    pub update_interval: u64,

    #[serde(rename = "Randomize Status", default)]
    pub randomize: bool,

    #[serde(rename = "Status Type (Game/Stream/Listen/Watch)", default = "default_status_type")]
    pub status_type: String,

    #[serde(rename = "Status", default = "default_status")]
    pub status: Vec<String>,

    #[serde(rename = "Delete Command Message", default)]
    pub delete: bool,

    #[serde(
        rename = "Discord Extension Log Level (Verbose, Debug, Info, Warning, Error, Exception, Off)",
        default
    )]
    pub log_level: LogLevel,

    #[serde(rename = "Language (en/kr)", default)]
    pub language: Locale,

    #[serde(rename = "Server Status URL", default)]
    pub server_status_url: Option<String>,

    #[serde(rename = "Server Hostname", default)]
    pub server_hostname: Option<String>,

    #[serde(rename = "Server Port", default = "default_port")]
    pub server_port: u16,

    #[serde(rename = "Server Max Players", default)]
    pub server_max_players: Option<u32>,

    #[serde(rename = "Server Header Image", default)]
    pub header_image: Option<String>,

    #[serde(rename = "Stream URL", default = "default_stream_url")]
    pub stream_url: String,

    #[serde(rename = "Wipe Schedule (null to disable)", default)]
    pub wipe_schedule: Option<ForcedWipeSchedule>,

    #[serde(rename = "Status Error Log File", default = "default_log_file")]
    pub status_log_file: PathBuf,
}

fn default_prefix() -> String {
    "!".to_string()
}

fn default_update_interval() -> u64 {
    5
}

fn default_status_type() -> String {
    StatusKind::Game.label().to_string()
}

fn default_status() -> Vec<String> {
    vec![
        "{players.online} / {server.maxplayers} Online!".to_string(),
        "{server.entities} Entities".to_string(),
        "{players.sleepers} Sleepers!".to_string(),
        "{players.authenticated} Linked Account(s)".to_string(),
    ]
}

fn default_port() -> u16 {
    28015
}

fn default_stream_url() -> String {
    "https://www.twitch.tv/discord".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("logs/DiscordStatus.log")
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            guild_id: 0,
            prefix: default_prefix(),
            group_id: None,
            channel_id: None,
            update_interval: default_update_interval(),
            randomize: false,
            status_type: default_status_type(),
            status: default_status(),
            delete: false,
            log_level: LogLevel::default(),
            language: Locale::default(),
            server_status_url: None,
            server_hostname: None,
            server_port: default_port(),
            server_max_players: None,
            header_image: None,
            stream_url: default_stream_url(),
            wipe_schedule: None,
            status_log_file: default_log_file(),
        }
    }
}

impl Configuration {
    /// Load the config file, repairing it when it cannot be parsed.
    ///
    /// A missing file is created with defaults. A broken file is copied next to
    /// itself with the `.jsonError` extension and replaced by defaults. The
    /// loaded config is always written back so new keys show up in the file.
    pub fn load(path: &Path) -> Result<(Self, LoadOutcome), ConfigError> {
        let (config, outcome) = match fs::read_to_string(path) {
            Ok(raw) => match serde_json::from_str::<Option<Configuration>>(&raw) {
                Ok(Some(config)) => (config, LoadOutcome::Loaded),
                _ => {
                    let backup = path.with_extension("jsonError");
                    fs::write(&backup, &raw).map_err(|source| ConfigError::Io {
                        path: backup.clone(),
                        source,
                    })?;
                    (Configuration::default(), LoadOutcome::Repaired { backup })
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                (Configuration::default(), LoadOutcome::Created)
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        config.save(path)?;
        Ok((config, outcome))
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn status_kind(&self) -> StatusKind {
        StatusKind::from_config(&self.status_type)
    }

    /// First character of the configured prefix
    pub fn prefix_char(&self) -> char {
        self.prefix.chars().next().unwrap_or('!')
    }

    pub fn update_interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.update_interval.max(1))
    }

    pub fn guild_id(&self) -> Option<u64> {
        (self.guild_id != 0).then_some(self.guild_id)
    }
}
