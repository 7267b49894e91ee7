pub mod auth;
pub mod config;
pub mod events;
pub mod summary;
pub mod tag;

use tagtally_core::{AuthSession, Config, EventSourceClient, Granularity, ViewWindow};

/// Build the backend client from the configured base URL.
pub fn client() -> Result<EventSourceClient, Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let base_url = url::Url::parse(&config.backend.base_url)?;
    Ok(EventSourceClient::new(base_url))
}

/// Load the cached session, if any.
pub fn load_session() -> Result<Option<AuthSession>, Box<dyn std::error::Error>> {
    let path = Config::session_path()?;
    if !path.exists() {
        return Ok(None);
    }
    let text = std::fs::read_to_string(path)?;
    Ok(Some(serde_json::from_str(&text)?))
}

/// Load the cached session or fail with a login hint.
pub fn require_session() -> Result<AuthSession, Box<dyn std::error::Error>> {
    load_session()?.ok_or_else(|| "not logged in; run `tagtally-cli auth login` first".into())
}

/// Cache the session next to the config file.
pub fn save_session(session: &AuthSession) -> Result<(), Box<dyn std::error::Error>> {
    let path = Config::session_path()?;
    std::fs::write(path, serde_json::to_string_pretty(session)?)?;
    Ok(())
}

/// Drop the cached session.
pub fn clear_session() -> Result<(), Box<dyn std::error::Error>> {
    let path = Config::session_path()?;
    if path.exists() {
        std::fs::remove_file(path)?;
    }
    Ok(())
}

/// Parse `--start/--end/--granularity` arguments into a window.
pub fn parse_window(
    start: &str,
    end: &str,
    granularity: &str,
) -> Result<ViewWindow, Box<dyn std::error::Error>> {
    let start = tagtally_core::parse_timestamp(start)
        .ok_or_else(|| format!("unparseable --start: {start}"))?;
    let end =
        tagtally_core::parse_timestamp(end).ok_or_else(|| format!("unparseable --end: {end}"))?;
    let granularity: Granularity = granularity.parse()?;
    Ok(ViewWindow::new(start, end, granularity)?)
}

/// Single-threaded runtime for the network commands.
pub fn runtime() -> Result<tokio::runtime::Runtime, Box<dyn std::error::Error>> {
    Ok(tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?)
}
