// Players command - list everyone currently connected

use crate::commands::dispatcher::Reply;
use crate::features::status_updater::server_info;
use crate::models::server::ServerInfo;
use crate::utils::config::Configuration;
use crate::utils::formatters::{player_list, server_stats_embed};
use crate::utils::lang::{lang, MessageKey};
use crate::Data;

pub async fn reply(data: &Data) -> Reply {
    build_reply(&data.config, &server_info(data).await)
}

fn build_reply(config: &Configuration, info: &ServerInfo) -> Reply {
    let max_players = info
        .max_players
        .map_or_else(|| "?".to_string(), |n| n.to_string());
    let content = lang(
        config.language,
        MessageKey::Players,
        &[&info.online(), &max_players, &player_list(&info.players)],
    );
    let hostname = info.hostname.as_deref().unwrap_or_default();

    Reply::Embed(server_stats_embed(config, hostname, &content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::server::OnlinePlayer;

    #[test]
    fn test_players_embed() {
        let info = ServerInfo {
            max_players: Some(50),
            players: vec![OnlinePlayer {
                name: "Gonzi".into(),
                steam_id: "1".into(),
            }],
            ..Default::default()
        };
        let Reply::Embed(embed) = build_reply(&Configuration::default(), &info) else {
            panic!("expected an embed");
        };
        let embed = serde_json::to_value(embed).unwrap();
        assert_eq!(
            embed["description"],
            "Online Players [1/50] 🎆\n [Gonzi](https://steamcommunity.com/profiles/1/) \n"
        );
    }

    #[test]
    fn test_unknown_max_players() {
        let Reply::Embed(embed) = build_reply(&Configuration::default(), &ServerInfo::default()) else {
            panic!("expected an embed");
        };
        let embed = serde_json::to_value(embed).unwrap();
        assert_eq!(embed["description"], "Online Players [0/?] 🎆\n ");
    }
}
