//! # Spotify Integration Module
//!
//! This module is the integration layer between the daylist service and the
//! Spotify Web API. It covers the OAuth 2.0 authorization code flow and the
//! three read-only calls the service needs.
//!
//! ## Architecture
//!
//! ```text
//! HTTP handlers (api)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (authorization code + PKCE)
//!     ├── Playlist lookup (daylist locator)
//!     └── Track extraction (flattening playlist items)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - Builds the authorization URL and exchanges the callback code
//!   for an access token. Every login gets its own random `state` and PKCE
//!   verifier.
//! - [`playlist`] - Fetches one page (50) of the user's playlists and finds
//!   the daylist by name.
//! - [`tracks`] - Fetches the items of a playlist and flattens them into
//!   title and artist names.
//!
//! ## API Coverage
//!
//! - `GET /me` - Current user, used for the welcome message
//! - `GET /me/playlists` - User's playlists, single page
//! - `GET /playlists/{playlist_id}/tracks` - Playlist items, single page
//! - `POST /api/token` - Authorization code exchange
//!
//! ## Limitations
//!
//! Nothing here retries, paginates or refreshes tokens. An expired token
//! surfaces as an upstream error until the user logs in again.

pub mod auth;
pub mod playlist;
pub mod tracks;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    error::SpotifyError,
    types::{Token, User},
};

/// An authenticated handle to the Spotify Web API.
///
/// Cheap to clone: the underlying `reqwest::Client` is reference counted.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    token: Token,
}

impl SpotifyClient {
    pub fn new(http: Client, api_url: impl Into<String>, token: Token) -> Self {
        Self {
            http,
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token,
        }
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Issues an authenticated GET against `path` (relative to the API base)
    /// and decodes the JSON body.
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, SpotifyError> {
        let api_url = format!("{uri}{path}", uri = self.api_url);

        let response = self
            .http
            .get(&api_url)
            .bearer_auth(&self.token.access_token)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<T>().await?)
    }

    /// Returns the profile of the user the token belongs to.
    pub async fn current_user(&self) -> Result<User, SpotifyError> {
        self.get::<User>("/me").await
    }
}
