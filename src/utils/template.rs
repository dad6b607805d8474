// Status template substitution
//
// Templates are rendered in one left-to-right pass over brace delimited tokens.

use crate::models::status::StatusSnapshot;

/// Rendered in place of values that are not available yet
pub const UNKNOWN: &str = "{unknown}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    GuildName,
    MembersTotal,
    ChannelsTotal,
    ServerHostname,
    ServerMaxPlayers,
    PlayersOnline,
    PlayersAuthenticated,
    DaysUntilWipe,
    ServerIp,
    ServerPort,
    ServerEntities,
    ServerWorldSize,
    ServerSeed,
    ServerFps,
    ServerAvgFps,
    PlayersQueued,
    PlayersJoining,
    PlayersSleepers,
    PlayersTotal,
}

impl Token {
    pub const ALL: [Token; 19] = [
        Token::GuildName,
        Token::MembersTotal,
        Token::ChannelsTotal,
        Token::ServerHostname,
        Token::ServerMaxPlayers,
        Token::PlayersOnline,
        Token::PlayersAuthenticated,
        Token::DaysUntilWipe,
        Token::ServerIp,
        Token::ServerPort,
        Token::ServerEntities,
        Token::ServerWorldSize,
        Token::ServerSeed,
        Token::ServerFps,
        Token::ServerAvgFps,
        Token::PlayersQueued,
        Token::PlayersJoining,
        Token::PlayersSleepers,
        Token::PlayersTotal,
    ];

    pub fn from_pattern(pattern: &str) -> Option<Self> {
        Token::ALL.into_iter().find(|t| t.pattern() == pattern)
    }

    pub fn pattern(&self) -> &'static str {
        match self {
            Token::GuildName => "{guild.name}",
            Token::MembersTotal => "{members.total}",
            Token::ChannelsTotal => "{channels.total}",
            Token::ServerHostname => "{server.hostname}",
            Token::ServerMaxPlayers => "{server.maxplayers}",
            Token::PlayersOnline => "{players.online}",
            Token::PlayersAuthenticated => "{players.authenticated}",
            Token::DaysUntilWipe => "{days.untilwipe}",
            Token::ServerIp => "{server.ip}",
            Token::ServerPort => "{server.port}",
            Token::ServerEntities => "{server.entities}",
            Token::ServerWorldSize => "{server.worldsize}",
            Token::ServerSeed => "{server.seed}",
            Token::ServerFps => "{server.fps}",
            Token::ServerAvgFps => "{server.avgfps}",
            Token::PlayersQueued => "{players.queued}",
            Token::PlayersJoining => "{players.joining}",
            Token::PlayersSleepers => "{players.sleepers}",
            Token::PlayersTotal => "{players.total}",
        }
    }

    /// Current value of the token, `None` when unavailable
    pub fn value(&self, snapshot: &StatusSnapshot) -> Option<String> {
        let guild = snapshot.guild.as_ref();
        let server = &snapshot.server;
        match self {
            Token::GuildName => guild.map(|g| g.name.clone()),
            Token::MembersTotal => guild.map(|g| g.member_count.to_string()),
            Token::ChannelsTotal => guild.map(|g| g.channel_count.to_string()),
            Token::ServerHostname => server.hostname.clone(),
            Token::ServerMaxPlayers => server.max_players.map(|n| n.to_string()),
            Token::PlayersOnline => Some(server.online().to_string()),
            Token::PlayersAuthenticated => server.linked_accounts.map(|n| n.to_string()),
            Token::DaysUntilWipe => snapshot.days_until_wipe.map(|n| n.to_string()),
            Token::ServerIp => server.ip.clone(),
            Token::ServerPort => server.port.map(|n| n.to_string()),
            Token::ServerEntities => server.entities.map(|n| n.to_string()),
            Token::ServerWorldSize => server.world_size.map(|n| n.to_string()),
            Token::ServerSeed => server.seed.map(|n| n.to_string()),
            Token::ServerFps => server.fps.map(|n| format!("{:.0}", n)),
            Token::ServerAvgFps => server.avg_fps.map(|n| (n.round() as i64).to_string()),
            Token::PlayersQueued => server.queued.map(|n| n.to_string()),
            Token::PlayersJoining => server.joining.map(|n| n.to_string()),
            Token::PlayersSleepers => server.sleepers.map(|n| n.to_string()),
            Token::PlayersTotal => server.total().map(|n| n.to_string()),
        }
    }
}

/// Replace every known token in `template` with its current value.
///
/// Substituted values are never scanned again, so a value that happens to
/// contain a token pattern is rendered as is.
pub fn format_status(template: &str, snapshot: &StatusSnapshot) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];
        let token = candidate
            .find('}')
            .and_then(|end| Token::from_pattern(&candidate[..=end]).map(|t| (t, end)));

        match token {
            Some((token, end)) => {
                match token.value(snapshot) {
                    Some(value) => out.push_str(&value),
                    None => out.push_str(UNKNOWN),
                }
                rest = &candidate[end + 1..];
            }
            None => {
                out.push('{');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}
