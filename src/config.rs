//! Client configuration
//!
//! Everything external lives in three environment variables, each with a
//! sensible default so `paws_cli browse` works against a local backend with
//! zero setup:
//!
//! - `PAWS_API_URL`: base URL of the adoption API (default
//!   `http://localhost:8000`)
//! - `PAWS_HTTP_TIMEOUT_SECS`: per-request deadline (default 30)
//! - `PAWS_SESSION_FILE`: where the signed-in session is persisted
//!   (default `$HOME/.config/paws/session.json`)

use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Validated base URL, no trailing slash.
    pub base_url: String,
    pub timeout: Duration,
    /// Where [`crate::session::SessionStore`] keeps the token + profile.
    pub session_path: PathBuf,
}

impl ClientConfig {
    /// Read configuration from the environment, falling back to defaults
    /// for anything unset.
    pub fn from_env() -> Result<Self> {
        let raw_url =
            std::env::var("PAWS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let base_url = normalize_base_url(&raw_url)?;

        let timeout_secs = match std::env::var("PAWS_HTTP_TIMEOUT_SECS") {
            Ok(raw) => raw
                .parse::<u64>()
                .with_context(|| format!("PAWS_HTTP_TIMEOUT_SECS is not a number: {raw}"))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let session_path = match std::env::var_os("PAWS_SESSION_FILE") {
            Some(path) => PathBuf::from(path),
            None => default_session_path()?,
        };

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
            session_path,
        })
    }
}

/// Validate the base URL and strip any trailing slash so path joins stay
/// single-slashed.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let parsed = Url::parse(raw).with_context(|| format!("invalid PAWS_API_URL: {raw}"))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(anyhow!(
            "PAWS_API_URL must be http or https, got {}",
            parsed.scheme()
        ));
    }
    Ok(raw.trim_end_matches('/').to_string())
}

fn default_session_path() -> Result<PathBuf> {
    let home = std::env::var_os("HOME")
        .map(PathBuf::from)
        .context("HOME not set; set PAWS_SESSION_FILE explicitly")?;
    Ok(home.join(".config").join("paws").join("session.json"))
}
