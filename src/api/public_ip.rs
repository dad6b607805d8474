// Public IP lookup for the `ip` command

use anyhow::{bail, Result};

pub const IP_ECHO_URL: &str = "http://icanhazip.com";

pub async fn fetch_public_ip(client: &reqwest::Client) -> Result<String> {
    let response = client.get(IP_ECHO_URL).send().await?.error_for_status()?;
    let ip = parse_ip_response(&response.text().await?);
    if ip.is_empty() {
        bail!("empty response from {}", IP_ECHO_URL);
    }
    Ok(ip)
}

fn parse_ip_response(body: &str) -> String {
    body.trim().to_string()
}
