// Formatting utilities for command replies

use poise::serenity_prelude as serenity;

use crate::models::server::OnlinePlayer;
use crate::utils::config::{colors, Configuration};
use crate::utils::lang::{lang, MessageKey};

/// Discord rejects embed descriptions longer than this
pub const EMBED_DESCRIPTION_LIMIT: usize = 4096;

/// Markdown links to each player's Steam profile, one per line
pub fn player_list(players: &[OnlinePlayer]) -> String {
    players
        .iter()
        .map(|p| format!("[{}]({}) \n", p.name, p.profile_url()))
        .collect()
}

/// Truncate string to max characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Embed used by the `players` and `wipe` replies
pub fn server_stats_embed(config: &Configuration, hostname: &str, content: &str) -> serenity::CreateEmbed {
    let mut embed = serenity::CreateEmbed::new()
        .title(lang(config.language, MessageKey::Title, &[&hostname]))
        .description(truncate(content, EMBED_DESCRIPTION_LIMIT))
        .footer(serenity::CreateEmbedFooter::new(format!(
            "DiscordStatus V{}",
            env!("CARGO_PKG_VERSION")
        )))
        .color(colors::STATS);

    if let Some(image) = &config.header_image {
        embed = embed.thumbnail(image);
    }

    embed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_list() {
        let players = vec![
            OnlinePlayer {
                name: "Gonzi".into(),
                steam_id: "76561198000000001".into(),
            },
            OnlinePlayer {
                name: "Nexsal".into(),
                steam_id: "76561198000000002".into(),
            },
        ];
        assert_eq!(
            player_list(&players),
            "[Gonzi](https://steamcommunity.com/profiles/76561198000000001/) \n\
             [Nexsal](https://steamcommunity.com/profiles/76561198000000002/) \n"
        );
        assert_eq!(player_list(&[]), "");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("플레이어 목록", 5), "플레...");
    }

    #[test]
    fn test_server_stats_embed() {
        let config = Configuration {
            header_image: Some("https://example.com/header.png".into()),
            ..Default::default()
        };
        let embed = serde_json::to_value(server_stats_embed(&config, "EU Main", "body")).unwrap();
        assert_eq!(embed["title"], "Players List");
        assert_eq!(embed["description"], "body");
        assert_eq!(embed["color"], 0xe74c3c);
        assert_eq!(embed["thumbnail"]["url"], "https://example.com/header.png");
        assert_eq!(embed["footer"]["text"], format!("DiscordStatus V{}", env!("CARGO_PKG_VERSION")));
    }
}
