// Guild resolution on gateway ready

use poise::serenity_prelude as serenity;
use thiserror::Error;

use crate::models::status::GuildSnapshot;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuildResolveError {
    #[error("Your bot was not found in any discord servers. Please invite it to a server and restart the bot.")]
    NoGuilds,
    #[error(
        "Failed to find a matching guild for the Discord Server Id. \
         Please make sure your guild Id is correct and the bot is in the discord server."
    )]
    NoMatchingGuild,
    #[error(
        "You need to enable \"Server Members Intent\" for {0} @ https://discord.com/developers/applications\n\
         The bot will not function correctly until that is fixed. Once updated please restart the bot."
    )]
    MembersIntentDisabled(String),
}

/// Pick the guild the bot reports on.
///
/// A bot in exactly one guild needs no configured id. Otherwise the configured
/// id must be one of the bot's guilds.
pub fn resolve_guild(
    guilds: &[serenity::GuildId],
    configured: Option<serenity::GuildId>,
) -> Result<serenity::GuildId, GuildResolveError> {
    match (guilds, configured) {
        ([], _) => Err(GuildResolveError::NoGuilds),
        ([only], None) => Ok(*only),
        (_, Some(id)) if guilds.contains(&id) => Ok(id),
        _ => Err(GuildResolveError::NoMatchingGuild),
    }
}

/// The member count and member list need the privileged members intent
pub fn members_intent_enabled(flags: serenity::ApplicationFlags) -> bool {
    flags.intersects(
        serenity::ApplicationFlags::GATEWAY_GUILD_MEMBERS
            | serenity::ApplicationFlags::GATEWAY_GUILD_MEMBERS_LIMITED,
    )
}

/// Resolve the guild from the ready payload
pub fn resolve_ready(
    ready: &serenity::Ready,
    configured: Option<u64>,
) -> Result<serenity::GuildId, GuildResolveError> {
    let guilds: Vec<_> = ready.guilds.iter().map(|g| g.id).collect();
    let guild_id = resolve_guild(&guilds, configured.map(serenity::GuildId::new))?;

    if !members_intent_enabled(ready.application.flags) {
        return Err(GuildResolveError::MembersIntentDisabled(ready.user.name.clone()));
    }

    Ok(guild_id)
}

/// Read the guild's current values from the cache
pub fn guild_snapshot(cache: &serenity::Cache, guild_id: serenity::GuildId) -> Option<GuildSnapshot> {
    cache.guild(guild_id).map(|guild| GuildSnapshot {
        name: guild.name.clone(),
        member_count: guild.member_count,
        channel_count: guild.channels.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u64]) -> Vec<serenity::GuildId> {
        raw.iter().copied().map(serenity::GuildId::new).collect()
    }

    #[test]
    fn test_no_guilds() {
        assert_eq!(resolve_guild(&[], None), Err(GuildResolveError::NoGuilds));
        assert_eq!(
            resolve_guild(&[], Some(serenity::GuildId::new(1))),
            Err(GuildResolveError::NoGuilds)
        );
    }

    #[test]
    fn test_single_guild_without_configured_id() {
        assert_eq!(resolve_guild(&ids(&[10]), None), Ok(serenity::GuildId::new(10)));
    }

    #[test]
    fn test_configured_id_must_match() {
        let guilds = ids(&[10, 20]);
        assert_eq!(
            resolve_guild(&guilds, Some(serenity::GuildId::new(20))),
            Ok(serenity::GuildId::new(20))
        );
        assert_eq!(
            resolve_guild(&guilds, Some(serenity::GuildId::new(30))),
            Err(GuildResolveError::NoMatchingGuild)
        );
        assert_eq!(
            resolve_guild(&ids(&[10]), Some(serenity::GuildId::new(30))),
            Err(GuildResolveError::NoMatchingGuild)
        );
    }

    #[test]
    fn test_multiple_guilds_need_configured_id() {
        assert_eq!(resolve_guild(&ids(&[10, 20]), None), Err(GuildResolveError::NoMatchingGuild));
    }

    #[test]
    fn test_members_intent_flags() {
        assert!(members_intent_enabled(serenity::ApplicationFlags::GATEWAY_GUILD_MEMBERS_LIMITED));
        assert!(members_intent_enabled(serenity::ApplicationFlags::GATEWAY_GUILD_MEMBERS));
        assert!(!members_intent_enabled(serenity::ApplicationFlags::empty()));
        assert!(!members_intent_enabled(serenity::ApplicationFlags::GATEWAY_PRESENCE));
    }
}
