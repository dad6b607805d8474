// DiscordStatus - Rust Edition
// Shows game server information as a Discord bot status

mod api;
mod commands;
mod features;
mod models;
mod utils;

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;
use poise::serenity_prelude as serenity;
use tracing::{error, info};

use crate::features::guild_resolver::resolve_ready;
use crate::features::status_updater;
use crate::features::wipe_schedule::WipeInfo;
use crate::models::status::StatusKind;
use crate::utils::config::{Configuration, DEFAULT_CONFIG_PATH};

/// Bot state shared by the status task and the message handler
#[derive(Clone)]
pub struct Data {
    pub config: Arc<Configuration>,
    pub http_client: reqwest::Client,
    /// Resolved once on the first ready event
    pub guild_id: Option<serenity::GuildId>,
    pub status_kind: StatusKind,
    /// `None` when no wipe tracking is configured
    pub wipe: Option<Arc<dyn WipeInfo>>,
}

// Manual Debug impl since dyn WipeInfo doesn't impl Debug
impl std::fmt::Debug for Data {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Data")
            .field("guild_id", &self.guild_id)
            .field("status_kind", &self.status_kind)
            .field("wipe", &self.wipe.is_some())
            .finish()
    }
}

type Error = Box<dyn std::error::Error + Send + Sync>;

async fn event_handler(
    ctx: &serenity::Context,
    event: &serenity::FullEvent,
    _framework: poise::FrameworkContext<'_, Data, Error>,
    data: &Data,
) -> Result<(), Error> {
    if let serenity::FullEvent::Message { new_message } = event {
        commands::dispatcher::handle_message(ctx, new_message, data).await?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config_path = env::var("DISCORD_STATUS_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
    let (config, outcome) = Configuration::load(&config_path)?;

    // Initialize logging
    let _log_guard = utils::logging::init(config.log_level, &config.status_log_file);
    outcome.log(&config_path);

    let token = if config.bot_token.is_empty() {
        env::var("DISCORD_TOKEN").unwrap_or_default()
    } else {
        config.bot_token.clone()
    };
    if token.is_empty() {
        error!(
            "No bot token configured. Set \"Discord Bot Token\" in {} or DISCORD_TOKEN.",
            config_path.display()
        );
        return Ok(());
    }

    info!("Starting DiscordStatus (Rust Edition)...");

    let http_client = reqwest::Client::builder()
        .user_agent(concat!("DiscordStatus/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to create HTTP client")?;

    let status_kind = config.status_kind();
    let wipe = config
        .wipe_schedule
        .map(|schedule| Arc::new(schedule) as Arc<dyn WipeInfo>);
    let config = Arc::new(config);

    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            event_handler: |ctx, event, framework, data| {
                Box::pin(event_handler(ctx, event, framework, data))
            },
            on_error: |error| {
                Box::pin(async move {
                    error!("Framework error: {:?}", error);
                })
            },
            ..Default::default()
        })
        .setup(move |ctx, ready, _framework| {
            Box::pin(async move {
                info!("Bot is ready as {}", ready.user.name);

                let guild_id = match resolve_ready(ready, config.guild_id()) {
                    Ok(id) => {
                        info!("Reporting on guild {}", id);
                        Some(id)
                    }
                    Err(e) => {
                        error!("{}", e);
                        None
                    }
                };

                let data = Data {
                    config,
                    http_client,
                    guild_id,
                    status_kind,
                    wipe,
                };
                status_updater::spawn(ctx.clone(), data.clone());

                Ok(data)
            })
        })
        .build();

    let intents = serenity::GatewayIntents::GUILDS
        | serenity::GatewayIntents::GUILD_MESSAGES
        | serenity::GatewayIntents::GUILD_MEMBERS
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .await
        .context("Failed to create client")?;

    // Run with graceful shutdown
    let shard_manager = client.shard_manager.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to register Ctrl+C handler: {}", e);
            return;
        }
        info!("Shutting down...");
        shard_manager.shutdown_all().await;
    });

    if let Err(why) = client.start().await {
        error!("Client error: {:?}", why);
    }

    info!("Goodbye!");
    Ok(())
}
