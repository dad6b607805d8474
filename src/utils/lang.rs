// Localized reply messages

use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "kr")]
    Kr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    Title,
    /// {0} online, {1} max players, {2} player list
    Players,
    /// {0} ip, {1} port
    IpAddress,
    /// {0} next wipe, {1} days until wipe, {2} current wipe
    NextWipe,
}

fn template(locale: Locale, key: MessageKey) -> &'static str {
    match (locale, key) {
        (Locale::En, MessageKey::Title) => "Players List",
        (Locale::En, MessageKey::Players) => "Online Players [{0}/{1}] 🎆\n {2}",
        (Locale::En, MessageKey::NextWipe) => {
            "**Current Wipe:** {2}\n**Next Wipe:** {0} \n**Days Until Wipe:** {1}"
        }
        (Locale::Kr, MessageKey::Title) => "플레이어 목록",
        (Locale::Kr, MessageKey::Players) => "접속중인 플레이어 [{0}/{1}] 🎆\n {2}",
        (Locale::Kr, MessageKey::NextWipe) => {
            "**현재 와이프:** {2}\n**다음 와이프:** {0} \n**와이프까지 남은 일수:** {1}"
        }
        (_, MessageKey::IpAddress) => "steam://connect/{0}:{1}",
    }
}

/// Look up `key` for `locale` and fill positional `{n}` placeholders.
///
/// Arguments are inserted in one pass and never scanned for placeholders
/// themselves. Placeholders without a matching argument stay verbatim.
pub fn lang(locale: Locale, key: MessageKey, args: &[&dyn Display]) -> String {
    let mut out = String::new();
    let mut rest = template(locale, key);

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let candidate = &rest[start..];
        let arg = candidate.find('}').and_then(|end| {
            let index: usize = candidate[1..end].parse().ok()?;
            args.get(index).map(|arg| (arg, end))
        });

        match arg {
            Some((arg, end)) => {
                out.push_str(&arg.to_string());
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
