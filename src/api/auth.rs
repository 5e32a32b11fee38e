use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::{api, server::AppState, spotify, warning};

/// Gate for protected routes.
///
/// Without a session the request is answered with a `307 Temporary Redirect`
/// to the Spotify consent screen and never reaches the handler. With a
/// session the authenticated [`spotify::SpotifyClient`] is handed to the
/// handler through the request extensions.
pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    if let Some(client) = state.session.client().await {
        request.extensions_mut().insert(client);
        return next.run(request).await;
    }

    match spotify::auth::begin_login(&state.config, &state.session).await {
        Ok(url) => Redirect::temporary(&url).into_response(),
        Err(e) => {
            warning!("Cannot build authorization url: {}", e);
            api::internal_error().into_response()
        }
    }
}
