use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use serde_json::{Value, json};

use crate::{
    api,
    server::AppState,
    spotify::{self, SpotifyClient},
    success, warning,
};

#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
}

fn forbidden() -> (StatusCode, Json<Value>) {
    (
        StatusCode::FORBIDDEN,
        Json(json!({ "error": "Couldn't get token" })),
    )
}

pub async fn callback(
    State(state): State<AppState>,
    Query(params): Query<CallbackParams>,
) -> (StatusCode, Json<Value>) {
    // The state is claimed before anything else so it can't be replayed,
    // even when the provider reports an error.
    let login = match params.state.as_deref() {
        Some(s) => state.session.take_login(s).await,
        None => None,
    };
    let Some(login) = login else {
        warning!("Callback with unknown or expired state.");
        return forbidden();
    };

    if let Some(err) = params.error {
        warning!("Authorization was not granted: {}", err);
        return forbidden();
    }

    let Some(code) = params.code else {
        warning!("Callback without authorization code.");
        return forbidden();
    };

    let token = match spotify::auth::exchange_code_pkce(
        &state.http,
        &state.config,
        &code,
        &login.code_verifier,
    )
    .await
    {
        Ok(token) => token,
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            return forbidden();
        }
    };

    let client = SpotifyClient::new(state.http.clone(), &state.config.api_url, token);
    state.session.set_client(client.clone()).await;

    match client.current_user().await {
        Ok(user) => {
            let name = user
                .display_name
                .filter(|n| !n.is_empty())
                .unwrap_or(user.id);
            success!("Logged in as {}", name);
            (
                StatusCode::OK,
                Json(json!({ "message": format!("Welcome {}", name) })),
            )
        }
        Err(e) => {
            warning!("Failed to fetch current user: {}", e);
            api::internal_error()
        }
    }
}
