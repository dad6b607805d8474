// Wipe command - current and next wipe dates

use chrono::{DateTime, Utc};

use crate::commands::dispatcher::Reply;
use crate::features::wipe_schedule::{WipeInfo, WIPE_DATE_FORMAT};
use crate::utils::config::Configuration;
use crate::utils::formatters::server_stats_embed;
use crate::utils::lang::{lang, MessageKey};
use crate::Data;

pub const NOT_LOADED: &str = "Not Loaded";

pub fn reply(data: &Data, now: DateTime<Utc>) -> Reply {
    build_reply(&data.config, data.wipe.as_deref(), now)
}

fn build_reply(config: &Configuration, wipe: Option<&dyn WipeInfo>, now: DateTime<Utc>) -> Reply {
    let Some(wipe) = wipe else {
        return Reply::Text(NOT_LOADED.to_string());
    };

    let date = |d: Option<DateTime<Utc>>| {
        d.map_or_else(|| "?".to_string(), |d| d.format(WIPE_DATE_FORMAT).to_string())
    };
    let days = wipe
        .days_till_wipe(now)
        .map_or_else(|| "?".to_string(), |d| d.to_string());
    let content = lang(
        config.language,
        MessageKey::NextWipe,
        &[&date(wipe.next_wipe(now)), &days, &date(wipe.current_wipe(now))],
    );
    let hostname = config.server_hostname.as_deref().unwrap_or_default();

    Reply::Embed(server_stats_embed(config, hostname, &content))
}
