// Prefix command dispatch for guild messages
//
// Malformed or unknown commands are ignored without a reply.

use poise::serenity_prelude as serenity;
use tracing::{debug, error};

use crate::commands::{ip, players, wipe};
use crate::utils::config::Configuration;
use crate::{Data, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Players,
    Ip,
    Wipe,
}

impl Command {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "players" => Some(Command::Players),
            "ip" => Some(Command::Ip),
            "wipe" => Some(Command::Wipe),
            _ => None,
        }
    }
}

/// Reply sent back to the command's channel
#[derive(Debug, Clone)]
pub enum Reply {
    Text(String),
    Embed(serenity::CreateEmbed),
}

impl Reply {
    pub fn into_message(self) -> serenity::CreateMessage {
        match self {
            Reply::Text(content) => serenity::CreateMessage::new().content(content),
            Reply::Embed(embed) => serenity::CreateMessage::new().embed(embed),
        }
    }
}

/// Lowercased command name of a prefixed message, `None` when the message
/// does not start with `prefix`.
///
/// The name is the first word without the prefix. A message whose first word
/// is blank is treated as a command as a whole.
pub fn extract_command(content: &str, prefix: char) -> Option<String> {
    if !content.starts_with(prefix) {
        return None;
    }

    let first = content.split(char::is_whitespace).next().unwrap_or_default();
    let raw = if first.trim().is_empty() { content.trim() } else { first };
    let name = raw.strip_prefix(prefix).unwrap_or(raw);
    Some(name.trim().to_lowercase())
}

/// Role and channel restrictions from the config
pub fn passes_gates(
    config: &Configuration,
    roles: &[serenity::RoleId],
    channel_id: serenity::ChannelId,
) -> bool {
    if let Some(group) = config.group_id {
        if !roles.contains(&serenity::RoleId::new(group)) {
            return false;
        }
    }

    if let Some(channel) = config.channel_id {
        if channel_id != serenity::ChannelId::new(channel) {
            return false;
        }
    }

    true
}

/// Build the reply for a recognized command
pub async fn respond(data: &Data, command: Command) -> anyhow::Result<Reply> {
    match command {
        Command::Players => Ok(players::reply(data).await),
        Command::Ip => ip::reply(data).await,
        Command::Wipe => Ok(wipe::reply(data, chrono::Utc::now())),
    }
}

/// What to do with a message: the command to answer and whether to delete
/// the triggering message afterwards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub command: Command,
    pub delete: bool,
}

/// Decide whether a message is a command this bot answers.
///
/// Bot authors, unprefixed text, gated senders and unknown commands all yield
/// `None`: no reply and no deletion.
pub fn plan(
    author_is_bot: bool,
    content: &str,
    roles: &[serenity::RoleId],
    channel_id: serenity::ChannelId,
    config: &Configuration,
) -> Option<Plan> {
    if author_is_bot {
        return None;
    }

    let name = extract_command(content, config.prefix_char())?;
    if !passes_gates(config, roles, channel_id) {
        return None;
    }

    Command::from_name(&name).map(|command| Plan {
        command,
        delete: config.delete,
    })
}

/// Entry point for every created message
pub async fn handle_message(
    ctx: &serenity::Context,
    msg: &serenity::Message,
    data: &Data,
) -> Result<(), Error> {
    let roles = msg.member.as_ref().map(|m| m.roles.as_slice()).unwrap_or(&[]);
    let Some(plan) = plan(msg.author.bot, &msg.content, roles, msg.channel_id, &data.config) else {
        return Ok(());
    };
    let command = plan.command;
    debug!("{} used {:?} in {}", msg.author.name, command, msg.channel_id);

    match respond(data, command).await {
        Ok(reply) => {
            if let Err(e) = msg.channel_id.send_message(&ctx.http, reply.into_message()).await {
                error!("Failed to send {:?} reply: {:?}", command, e);
            }
        }
        Err(e) => error!("Failed to answer {:?}: {:#}", command, e),
    }

    if plan.delete {
        if let Err(e) = msg.delete(&ctx.http).await {
            debug!("Could not delete command message: {:?}", e);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_command() {
        assert_eq!(extract_command("!players", '!').as_deref(), Some("players"));
        assert_eq!(extract_command("!WIPE", '!').as_deref(), Some("wipe"));
        assert_eq!(extract_command("!ip please", '!').as_deref(), Some("ip"));
        assert_eq!(extract_command("!Players\nnow", '!').as_deref(), Some("players"));
    }

    #[test]
    fn test_non_commands() {
        assert_eq!(extract_command("", '!'), None);
        assert_eq!(extract_command("players", '!'), None);
        assert_eq!(extract_command(" !players", '!'), None);
        assert_eq!(extract_command("?players", '!'), None);
    }

    #[test]
    fn test_prefix_only_matches_nothing() {
        let name = extract_command("!", '!').unwrap();
        assert_eq!(name, "");
        assert_eq!(Command::from_name(&name), None);

        let name = extract_command("! players", '!').unwrap();
        assert_eq!(name, "");
        assert_eq!(Command::from_name(&name), None);
    }

    #[test]
    fn test_command_names() {
        assert_eq!(Command::from_name("players"), Some(Command::Players));
        assert_eq!(Command::from_name("ip"), Some(Command::Ip));
        assert_eq!(Command::from_name("wipe"), Some(Command::Wipe));
        assert_eq!(Command::from_name("help"), None);
        assert_eq!(Command::from_name("WIPE"), None);
    }

    #[test]
    fn test_role_gate() {
        let config = Configuration {
            group_id: Some(42),
            ..Default::default()
        };
        let channel = serenity::ChannelId::new(7);
        assert!(!passes_gates(&config, &[], channel));
        assert!(!passes_gates(&config, &[serenity::RoleId::new(41)], channel));
        assert!(passes_gates(
            &config,
            &[serenity::RoleId::new(1), serenity::RoleId::new(42)],
            channel
        ));
    }

    #[test]
    fn test_channel_gate() {
        let config = Configuration {
            channel_id: Some(7),
            ..Default::default()
        };
        assert!(passes_gates(&config, &[], serenity::ChannelId::new(7)));
        assert!(!passes_gates(&config, &[], serenity::ChannelId::new(8)));
    }

    #[test]
    fn test_no_gates() {
        let config = Configuration::default();
        assert!(passes_gates(&config, &[], serenity::ChannelId::new(99)));
    }

    fn gated_config(delete: bool) -> Configuration {
        Configuration {
            group_id: Some(42),
            channel_id: Some(7),
            delete,
            ..Default::default()
        }
    }

    #[test]
    fn test_plan_for_allowed_sender() {
        let roles = [serenity::RoleId::new(42)];
        let channel = serenity::ChannelId::new(7);

        assert_eq!(
            plan(false, "!players", &roles, channel, &gated_config(true)),
            Some(Plan {
                command: Command::Players,
                delete: true
            })
        );
        assert_eq!(
            plan(false, "!WIPE", &roles, channel, &gated_config(false)),
            Some(Plan {
                command: Command::Wipe,
                delete: false
            })
        );
    }

    #[test]
    fn test_plan_skips_reply_and_delete() {
        let config = gated_config(true);
        let roles = [serenity::RoleId::new(42)];
        let channel = serenity::ChannelId::new(7);

        // sender without the role
        assert_eq!(plan(false, "!players", &[serenity::RoleId::new(1)], channel, &config), None);
        // wrong channel
        assert_eq!(plan(false, "!players", &roles, serenity::ChannelId::new(8), &config), None);
        // bot author
        assert_eq!(plan(true, "!players", &roles, channel, &config), None);
        // unknown command and prefix only
        assert_eq!(plan(false, "!help", &roles, channel, &config), None);
        assert_eq!(plan(false, "!", &roles, channel, &config), None);
        // not a command at all
        assert_eq!(plan(false, "players", &roles, channel, &config), None);
    }
}
