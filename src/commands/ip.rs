// IP command - steam connect link for the server

use crate::api::public_ip::fetch_public_ip;
use crate::commands::dispatcher::Reply;
use crate::features::status_updater::server_info;
use crate::models::server::ServerInfo;
use crate::utils::lang::{lang, Locale, MessageKey};
use crate::Data;

pub async fn reply(data: &Data) -> anyhow::Result<Reply> {
    let ip = fetch_public_ip(&data.http_client).await?;
    let info = server_info(data).await;
    let port = connect_port(&info, data.config.server_port);
    Ok(build_reply(data.config.language, &ip, port))
}

/// Port reported by the server, the configured one when it reports none
fn connect_port(info: &ServerInfo, configured: u16) -> u16 {
    info.port.unwrap_or(configured)
}

fn build_reply(locale: Locale, ip: &str, port: u16) -> Reply {
    Reply::Text(lang(locale, MessageKey::IpAddress, &[&ip, &port]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_string() {
        let Reply::Text(text) = build_reply(Locale::Kr, "203.0.113.7", 28015) else {
            panic!("expected text");
        };
        assert_eq!(text, "steam://connect/203.0.113.7:28015");
    }

    #[test]
    fn test_reported_port_wins() {
        let info = ServerInfo {
            port: Some(28016),
            ..Default::default()
        };
        assert_eq!(connect_port(&info, 28015), 28016);
        assert_eq!(connect_port(&ServerInfo::default(), 28015), 28015);

        let Reply::Text(text) = build_reply(Locale::En, "203.0.113.7", connect_port(&info, 28015)) else {
            panic!("expected text");
        };
        assert_eq!(text, "steam://connect/203.0.113.7:28016");
    }
}
