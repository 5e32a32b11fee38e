use thiserror::Error;

/// Errors raised while talking to Spotify.
///
/// A missing daylist is not an error: the locator reports it as `None`.
#[derive(Debug, Error)]
pub enum SpotifyError {
    /// The token endpoint rejected the authorization code or answered with
    /// something that is not a token.
    #[error("token exchange failed: {0}")]
    Auth(String),

    /// Network failure or a non-success status from the Web API.
    #[error("request to Spotify failed: {0}")]
    Http(#[from] reqwest::Error),
}
