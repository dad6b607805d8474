// Periodic presence update
// Owns the rotation cursor and pushes a freshly formatted status every tick

use chrono::Utc;
use poise::serenity_prelude as serenity;
use tokio::time::MissedTickBehavior;
use tracing::{debug, error, warn};

use crate::api::game_server::fetch_server_info;
use crate::features::guild_resolver::guild_snapshot;
use crate::features::status_rotator::StatusRotator;
use crate::models::server::ServerInfo;
use crate::models::status::StatusSnapshot;
use crate::utils::logging::STATUS_LOG_TARGET;
use crate::utils::template::format_status;
use crate::Data;

/// Current game server state, falling back to static settings when the
/// status endpoint is missing or unreachable
pub async fn server_info(data: &Data) -> ServerInfo {
    let info = match &data.config.server_status_url {
        Some(url) => fetch_server_info(&data.http_client, url)
            .await
            .unwrap_or_else(|e| {
                warn!("Server status unavailable: {:#}", e);
                ServerInfo::default()
            }),
        None => ServerInfo::default(),
    };

    info.with_fallbacks(
        data.config.server_hostname.as_deref(),
        data.config.server_port,
        data.config.server_max_players,
    )
}

/// Gather every value a status template may reference
pub async fn snapshot(ctx: &serenity::Context, data: &Data) -> StatusSnapshot {
    StatusSnapshot {
        guild: data.guild_id.and_then(|id| guild_snapshot(&ctx.cache, id)),
        server: server_info(data).await,
        days_until_wipe: data.wipe.as_ref().and_then(|w| w.days_till_wipe(Utc::now())),
    }
}

/// Show the next status. Returns the index shown, `None` for an empty list.
pub async fn update_status(
    ctx: &serenity::Context,
    data: &Data,
    rotator: &mut StatusRotator,
) -> anyhow::Result<Option<usize>> {
    if data.config.status.is_empty() {
        return Ok(None);
    }

    let snapshot = snapshot(ctx, data).await;
    let shown = rotator.rotate(&data.config.status, &mut rand::rng(), |template| {
        let text = format_status(template, &snapshot);
        let activity = data.status_kind.activity(text, &data.config.stream_url)?;
        ctx.set_presence(Some(activity), serenity::OnlineStatus::Online);
        anyhow::Ok(())
    })?;

    Ok(shown)
}

/// Start the update loop. Ticks run one after another; a slow tick delays the
/// next one instead of piling up.
pub fn spawn(ctx: serenity::Context, data: Data) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut rotator = StatusRotator::new(data.config.randomize);
        let mut interval = tokio::time::interval(data.config.update_interval());
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            match update_status(&ctx, &data, &mut rotator).await {
                Ok(Some(index)) => debug!("Status set to entry {}", index),
                Ok(None) => {}
                Err(e) => error!(target: STATUS_LOG_TARGET, "Status update failed: {:?}", e),
            }
        }
    })
}
