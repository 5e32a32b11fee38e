use axum::{Extension, http::StatusCode, response::Json};
use serde_json::{Value, json};

use crate::{
    api,
    spotify::{SpotifyClient, playlist, tracks},
    warning,
};

pub const NOT_FOUND_MESSAGE: &str = "Sorry, We couldn't find a daylist playlist";

/// Returns the tracks of the user's daylist.
///
/// A missing daylist is answered with `200` and an explanatory message rather
/// than an error status.
pub async fn daylist(Extension(client): Extension<SpotifyClient>) -> (StatusCode, Json<Value>) {
    let Some(playlist_id) = playlist::locate_daylist(&client).await else {
        return (StatusCode::OK, Json(json!({ "message": NOT_FOUND_MESSAGE })));
    };

    match tracks::fetch_daylist(&client, &playlist_id).await {
        Ok(playlist) => (
            StatusCode::OK,
            Json(json!({
                "message": "success",
                "data": playlist,
            })),
        ),
        Err(e) => {
            warning!("Failed to fetch daylist {}: {}", playlist_id, e);
            api::internal_error()
        }
    }
}
