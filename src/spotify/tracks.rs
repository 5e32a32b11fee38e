use crate::{
    error::SpotifyError,
    spotify::SpotifyClient,
    types::{GetPlaylistItemsResponse, Playlist, PlaylistItem, Track},
};

/// Retrieves the items of a playlist in a single, unpaginated request.
pub async fn get_playlist_items(
    client: &SpotifyClient,
    playlist_id: &str,
) -> Result<Vec<PlaylistItem>, SpotifyError> {
    let path = format!("/playlists/{id}/tracks", id = playlist_id);
    let res = client.get::<GetPlaylistItemsResponse>(&path).await?;
    Ok(res.items)
}

/// Flattens playlist items into title and artist names, keeping their order.
///
/// Items without a track (removed or unavailable content) are skipped; every
/// other item yields exactly one [`Track`].
pub fn flatten_items(items: Vec<PlaylistItem>) -> Playlist {
    let tracks = items
        .into_iter()
        .filter_map(|item| item.track)
        .map(|track| Track {
            title: track.name,
            artists: track.artists.into_iter().map(|a| a.name).collect(),
        })
        .collect();

    Playlist { tracks }
}

pub async fn fetch_daylist(
    client: &SpotifyClient,
    playlist_id: &str,
) -> Result<Playlist, SpotifyError> {
    let items = get_playlist_items(client, playlist_id).await?;
    Ok(flatten_items(items))
}
