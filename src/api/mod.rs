//! # API Module
//!
//! HTTP endpoints of the daylist service.
//!
//! ## Endpoints
//!
//! - [`index`] - `GET /`, static greeting.
//! - [`callback`] - `GET /callback`, the OAuth redirect target. Claims the
//!   login that matches the `state` parameter, exchanges the authorization
//!   code for a token and stores the authenticated client in the session.
//! - [`daylist`] - `GET /daylist`, protected by [`require_session`]. Returns
//!   the flattened tracks of the user's daylist.
//!
//! ## Responses
//!
//! Every endpoint answers with a JSON object. Upstream failures are logged
//! and reported with a generic `{"message": "Internal Server Error"}`; a
//! rejected code exchange is reported as `403 {"error": "Couldn't get token"}`.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use axum::{Router, middleware, routing::get};
//! use daylist::api;
//!
//! let app = Router::new()
//!     .route("/", get(api::index))
//!     .route("/callback", get(api::callback))
//!     .route(
//!         "/daylist",
//!         get(api::daylist).layer(middleware::from_fn_with_state(state.clone(), api::require_session)),
//!     )
//!     .with_state(state);
//! ```

mod auth;
mod callback;
mod daylist;
mod index;

use axum::{http::StatusCode, response::Json};
use serde_json::{Value, json};

pub use auth::require_session;
pub use callback::callback;
pub use daylist::NOT_FOUND_MESSAGE;
pub use daylist::daylist;
pub use index::index;

pub(crate) fn internal_error() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": "Internal Server Error" })),
    )
}
