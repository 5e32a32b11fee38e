use crate::{
    error::SpotifyError,
    spotify::SpotifyClient,
    types::{GetUserPlaylistsResponse, SimplifiedPlaylist},
    warning,
};

/// Number of playlists fetched when looking for the daylist. Only one page is
/// ever requested.
pub const PLAYLIST_PAGE_LIMIT: u32 = 50;

const DAYLIST_PREFIX: &str = "daylist";

/// Checks whether a playlist name looks like a Spotify daylist.
///
/// A daylist name starts with the lowercase word `daylist`, then optional
/// whitespace, a separator that is not a word character, more optional
/// whitespace and then anything, e.g. `daylist • chill monday morning`.
///
/// Whitespace is itself a non-word character, so the rule reduces to: the
/// name starts with `daylist` and the character right after it is neither
/// an ASCII letter, an ASCII digit nor `_`. Any non-ASCII character counts
/// as a separator, so `daylisté mix` is a daylist name.
///
/// # Example
///
/// ```
/// assert!(is_daylist_name("daylist - mix"));
/// assert!(!is_daylist_name("daylist"));
/// assert!(!is_daylist_name("Daylist - mix"));
/// ```
pub fn is_daylist_name(name: &str) -> bool {
    let Some(rest) = name.strip_prefix(DAYLIST_PREFIX) else {
        return false;
    };

    rest.chars().next().is_some_and(|c| !is_word_char(c))
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Returns the id of the first playlist whose name is a daylist name, in the
/// order Spotify returned them.
pub fn find_daylist(playlists: &[SimplifiedPlaylist]) -> Option<String> {
    playlists
        .iter()
        .find(|p| is_daylist_name(&p.name))
        .map(|p| p.id.clone())
}

/// Retrieves one page of the current user's playlists.
pub async fn get_user_playlists(
    client: &SpotifyClient,
    limit: u32,
) -> Result<Vec<SimplifiedPlaylist>, SpotifyError> {
    let path = format!("/me/playlists?limit={limit}", limit = limit);
    let res = client.get::<GetUserPlaylistsResponse>(&path).await?;
    Ok(res.items)
}

/// Looks up the id of the user's daylist.
///
/// A failed playlist fetch is logged and reported the same way as a missing
/// daylist: `None`.
pub async fn locate_daylist(client: &SpotifyClient) -> Option<String> {
    match get_user_playlists(client, PLAYLIST_PAGE_LIMIT).await {
        Ok(playlists) => find_daylist(&playlists),
        Err(e) => {
            warning!("Failed to fetch playlists: {}", e);
            None
        }
    }
}
