// Game server status endpoint
// The server publishes its live state as JSON, see `ServerInfo` for the fields

use anyhow::{Context as _, Result};
use tracing::debug;

use crate::models::server::ServerInfo;

pub async fn fetch_server_info(client: &reqwest::Client, url: &str) -> Result<ServerInfo> {
    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("failed to reach server status endpoint {}", url))?
        .error_for_status()?;

    let info: ServerInfo = response.json().await?;
    debug!("Server status: {} online", info.online());
    Ok(info)
}
