use reqwest::{Client, Url};

use crate::{
    config::Config, error::SpotifyError, management::SessionManager, types::Token, utils,
};

/// Builds the Spotify authorization URL for one login attempt.
///
/// The URL carries the anti-forgery `state` and the S256 PKCE challenge. All
/// query values are URL-encoded, so scopes may contain spaces.
///
/// # Errors
///
/// Returns an error if the configured authorization URL is not a valid URL.
pub fn authorize_url(config: &Config, state: &str, code_challenge: &str) -> Result<String, String> {
    let url = Url::parse_with_params(
        &config.auth_url,
        &[
            ("client_id", config.client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", config.redirect_uri.as_str()),
            ("code_challenge", code_challenge),
            ("code_challenge_method", "S256"),
            ("scope", config.scope.as_str()),
            ("state", state),
        ],
    )
    .map_err(|e| format!("invalid authorization url '{}': {}", config.auth_url, e))?;

    Ok(url.to_string())
}

/// Starts a login: registers a fresh state and PKCE verifier with the
/// session and returns the URL the user has to visit.
pub async fn begin_login(config: &Config, session: &SessionManager) -> Result<String, String> {
    let state = utils::generate_state();
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    let url = authorize_url(config, &state, &code_challenge)?;
    session.register_login(state, code_verifier).await;
    Ok(url)
}

/// Exchanges an authorization code for an access token.
///
/// Sends the PKCE verifier that belongs to the login the code was issued
/// for. When a client secret is configured it is sent as HTTP Basic auth as
/// well, which lets the service work with both public and confidential
/// Spotify applications.
///
/// # Errors
///
/// - [`SpotifyError::Http`] if the token endpoint cannot be reached
/// - [`SpotifyError::Auth`] if Spotify rejects the code or the response is
///   not a token
pub async fn exchange_code_pkce(
    http: &Client,
    config: &Config,
    code: &str,
    verifier: &str,
) -> Result<Token, SpotifyError> {
    let mut request = http.post(&config.token_url).form(&[
        ("grant_type", "authorization_code"),
        ("client_id", config.client_id.as_str()),
        ("code", code),
        ("code_verifier", verifier),
        ("redirect_uri", config.redirect_uri.as_str()),
    ]);

    if let Some(secret) = &config.client_secret {
        request = request.basic_auth(&config.client_id, Some(secret));
    }

    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SpotifyError::Auth(format!("{}: {}", status, body)));
    }

    response
        .json::<Token>()
        .await
        .map_err(|e| SpotifyError::Auth(e.to_string()))
}
