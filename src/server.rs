use axum::{Router, middleware, routing::get};
use reqwest::Client;
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{Res, api, config::Config, info, management::SessionManager, spotify, warning};

/// State shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub session: Arc<SessionManager>,
    pub http: Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            session: Arc::new(SessionManager::new()),
            http: Client::new(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let gate = middleware::from_fn_with_state(state.clone(), api::require_session);

    Router::new()
        .route("/", get(api::index))
        .route("/callback", get(api::callback))
        .route("/daylist", get(api::daylist).layer(gate))
        .with_state(state)
}

/// Binds the configured address, announces the login URL and serves until
/// the process is stopped.
pub async fn start_api_server(config: Config, open_browser: bool) -> Res<()> {
    let state = AppState::new(config);

    let addr = SocketAddr::from_str(&state.config.server_addr)
        .map_err(|e| format!("Failed to parse server address: {}", e))?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    let auth_url = spotify::auth::begin_login(&state.config, &state.session).await?;
    info!(
        "Please log in to Spotify by visiting the following page in your browser:\n\n{}\n",
        auth_url
    );

    if open_browser && webbrowser::open(&auth_url).is_err() {
        warning!("Failed to open browser. Please navigate to the URL above manually.");
    }

    info!("Listening on http://{}", addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
