//! Configuration management for the daylist service.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Values are read once at startup into a [`Config`]
//! which is then handed to the server, so request handlers never touch the
//! process environment.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the current working directory
//! 4. Application defaults (where applicable)

use std::{env, path::PathBuf};

pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8080";
pub const DEFAULT_REDIRECT_URI: &str = "http://localhost:8080/callback";
pub const DEFAULT_SCOPE: &str = "playlist-read-private playlist-modify-private user-read-private";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Loads environment variables from `.env` files.
///
/// Creates the `daylist` directory in the platform-specific local data
/// directory if it doesn't exist, then loads `daylist/.env` from there and
/// finally a `.env` in the current working directory. Variables that are
/// already set in the environment are never overwritten, and a missing file
/// is not an error.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/daylist/.env`
/// - macOS: `~/Library/Application Support/daylist/.env`
/// - Windows: `%LOCALAPPDATA%/daylist/.env`
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("daylist/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(&path).ok();
    dotenv::dotenv().ok();
    Ok(())
}

/// Runtime configuration for the service.
///
/// Every Spotify endpoint is configurable so the service can be pointed at a
/// stand-in API during tests.
#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    pub client_id: String,
    pub client_secret: Option<String>,
    pub redirect_uri: String,
    pub scope: String,
    pub auth_url: String,
    pub token_url: String,
    pub api_url: String,
}

impl Config {
    /// Builds a [`Config`] from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SPOTIFY_API_AUTH_CLIENT_ID` is not set or empty.
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            server_addr: server_addr(),
            client_id: spotify_client_id()?,
            client_secret: spotify_client_secret(),
            redirect_uri: spotify_redirect_uri(),
            scope: spotify_scope(),
            auth_url: spotify_apiauth_url(),
            token_url: spotify_apitoken_url(),
            api_url: spotify_apiurl(),
        })
    }

    /// Creates a configuration with default endpoints for the given client id.
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            server_addr: DEFAULT_SERVER_ADDRESS.to_string(),
            client_id: client_id.into(),
            client_secret: None,
            redirect_uri: DEFAULT_REDIRECT_URI.to_string(),
            scope: DEFAULT_SCOPE.to_string(),
            auth_url: DEFAULT_AUTH_URL.to_string(),
            token_url: DEFAULT_TOKEN_URL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

fn var_or(key: &str, default: &str) -> String {
    match env::var(key) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}

/// Returns the address the HTTP server binds to (`SERVER_ADDRESS`).
pub fn server_addr() -> String {
    var_or("SERVER_ADDRESS", DEFAULT_SERVER_ADDRESS)
}

/// Returns the Spotify application client ID (`SPOTIFY_API_AUTH_CLIENT_ID`).
///
/// # Errors
///
/// Returns an error if the variable is not set, since no login can work
/// without it.
pub fn spotify_client_id() -> Result<String, String> {
    match env::var("SPOTIFY_API_AUTH_CLIENT_ID") {
        Ok(id) if !id.trim().is_empty() => Ok(id),
        _ => Err("SPOTIFY_API_AUTH_CLIENT_ID must be set".to_string()),
    }
}

/// Returns the Spotify application client secret, if one is configured.
///
/// When present the secret is sent with HTTP Basic auth during the code
/// exchange. Without it the service relies on PKCE alone.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
pub fn spotify_client_secret() -> Option<String> {
    env::var("SPOTIFY_API_AUTH_CLIENT_SECRET")
        .ok()
        .filter(|s| !s.trim().is_empty())
}

/// Returns the OAuth redirect URI. Must match the one registered with Spotify.
pub fn spotify_redirect_uri() -> String {
    var_or("SPOTIFY_API_REDIRECT_URI", DEFAULT_REDIRECT_URI)
}

/// Returns the space separated scope requested during login.
pub fn spotify_scope() -> String {
    var_or("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE)
}

pub fn spotify_apiauth_url() -> String {
    var_or("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL)
}

pub fn spotify_apitoken_url() -> String {
    var_or("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}

pub fn spotify_apiurl() -> String {
    var_or("SPOTIFY_API_URL", DEFAULT_API_URL)
}
