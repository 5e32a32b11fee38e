use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use tokio::sync::{Mutex, RwLock};

use crate::{spotify::SpotifyClient, types::PendingLogin};

pub const PENDING_LOGIN_TTL: Duration = Duration::from_secs(600);
pub const MAX_PENDING_LOGINS: usize = 64;

/// Owns the authenticated client and the logins waiting for their callback.
///
/// One instance lives in the router state for the lifetime of the server.
/// The client is written only by the callback and read by every protected
/// request; once set it is never cleared.
#[derive(Default)]
pub struct SessionManager {
    client: RwLock<Option<SpotifyClient>>,
    pending: Mutex<HashMap<String, PendingLogin>>,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn client(&self) -> Option<SpotifyClient> {
        self.client.read().await.clone()
    }

    pub async fn set_client(&self, client: SpotifyClient) {
        let mut lock = self.client.write().await;
        *lock = Some(client);
    }

    pub async fn is_authenticated(&self) -> bool {
        self.client.read().await.is_some()
    }

    /// Remembers the PKCE verifier for `state` until the callback claims it.
    pub async fn register_login(&self, state: String, code_verifier: String) {
        let mut pending = self.pending.lock().await;
        let now = Instant::now();
        pending.retain(|_, login| now.duration_since(login.created_at) < PENDING_LOGIN_TTL);

        if pending.len() >= MAX_PENDING_LOGINS {
            if let Some(oldest) = pending
                .iter()
                .min_by_key(|(_, login)| login.created_at)
                .map(|(state, _)| state.clone())
            {
                pending.remove(&oldest);
            }
        }

        pending.insert(
            state,
            PendingLogin {
                code_verifier,
                created_at: now,
            },
        );
    }

    /// Removes and returns the login for `state`. A state can be claimed once.
    pub async fn take_login(&self, state: &str) -> Option<PendingLogin> {
        let mut pending = self.pending.lock().await;
        pending
            .remove(state)
            .filter(|login| login.created_at.elapsed() < PENDING_LOGIN_TTL)
    }

    pub async fn pending_logins(&self) -> usize {
        self.pending.lock().await.len()
    }
}
