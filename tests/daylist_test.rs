use daylist::spotify::playlist::{find_daylist, is_daylist_name};
use daylist::spotify::tracks::flatten_items;
use daylist::types::{ArtistRef, Playlist, PlaylistItem, PlaylistTrack, SimplifiedPlaylist, Track};

// Helper function to create a test playlist
fn create_test_playlist(id: &str, name: &str) -> SimplifiedPlaylist {
    SimplifiedPlaylist {
        id: id.to_string(),
        name: name.to_string(),
    }
}

// Helper function to create a test playlist item
fn create_test_item(name: &str, artists: &[&str]) -> PlaylistItem {
    PlaylistItem {
        track: Some(PlaylistTrack {
            name: name.to_string(),
            artists: artists
                .iter()
                .map(|a| ArtistRef {
                    name: a.to_string(),
                })
                .collect(),
        }),
    }
}

#[test]
fn test_is_daylist_name_accepts() {
    assert!(is_daylist_name("daylist - mix"));
    assert!(is_daylist_name("daylist: anything"));
    assert!(is_daylist_name("daylist   ~   x"));
    assert!(is_daylist_name("daylist • chill monday morning"));
    assert!(is_daylist_name("daylist-mix"));
    // whitespace alone counts as the separator
    assert!(is_daylist_name("daylist "));
    // only ASCII letters, digits and `_` are word characters
    assert!(is_daylist_name("daylisté mix"));
    assert!(is_daylist_name("daylist日本"));
}

#[test]
fn test_is_daylist_name_rejects() {
    assert!(!is_daylist_name("mydaylist"));
    assert!(!is_daylist_name("daylist"));
    assert!(!is_daylist_name("Daylist - mix"));
    assert!(!is_daylist_name("DAYLIST - mix"));
    assert!(!is_daylist_name("daylists - mix"));
    assert!(!is_daylist_name("daylist_mix"));
    assert!(!is_daylist_name("daylist9 - mix"));
    assert!(!is_daylist_name(" daylist - mix"));
    assert!(!is_daylist_name(""));
}

#[test]
fn test_find_daylist_empty() {
    assert_eq!(find_daylist(&[]), None);
}

#[test]
fn test_find_daylist_no_match() {
    let playlists = vec![
        create_test_playlist("p1", "Discover Weekly"),
        create_test_playlist("p2", "mydaylist"),
        create_test_playlist("p3", "Daylist - mix"),
    ];
    assert_eq!(find_daylist(&playlists), None);
}

#[test]
fn test_find_daylist_any_position() {
    for position in 0..5 {
        let mut playlists: Vec<SimplifiedPlaylist> = (0..4)
            .map(|i| create_test_playlist(&format!("other{}", i), &format!("Playlist {}", i)))
            .collect();
        playlists.insert(
            position,
            create_test_playlist("daylist-id", "daylist • late night"),
        );

        assert_eq!(
            find_daylist(&playlists).as_deref(),
            Some("daylist-id"),
            "daylist at position {} not found",
            position
        );
    }
}

#[test]
fn test_find_daylist_first_match_wins() {
    let playlists = vec![
        create_test_playlist("p1", "Release Radar"),
        create_test_playlist("first", "daylist - morning"),
        create_test_playlist("second", "daylist - evening"),
    ];
    assert_eq!(find_daylist(&playlists).as_deref(), Some("first"));
}

#[test]
fn test_flatten_items_counts() {
    let items = vec![
        create_test_item("Song A", &["Artist 1"]),
        create_test_item("Song B", &["Artist 2", "Artist 3", "Artist 4"]),
        create_test_item("Song C", &[]),
        create_test_item("Song D", &["Artist 5", "Artist 6"]),
    ];
    let expected_artist_counts: Vec<usize> = items
        .iter()
        .map(|i| i.track.as_ref().map(|t| t.artists.len()).unwrap_or(0))
        .collect();

    let playlist = flatten_items(items);

    assert_eq!(playlist.tracks.len(), 4);
    let artist_counts: Vec<usize> = playlist.tracks.iter().map(|t| t.artists.len()).collect();
    assert_eq!(artist_counts, expected_artist_counts);
}

#[test]
fn test_flatten_items_keeps_order_and_names() {
    let items = vec![
        create_test_item("Song A", &["Artist 1", "Artist 2"]),
        create_test_item("Song B", &["Artist 3"]),
    ];

    let playlist = flatten_items(items);

    assert_eq!(
        playlist,
        Playlist {
            tracks: vec![
                Track {
                    title: "Song A".to_string(),
                    artists: vec!["Artist 1".to_string(), "Artist 2".to_string()],
                },
                Track {
                    title: "Song B".to_string(),
                    artists: vec!["Artist 3".to_string()],
                },
            ]
        }
    );
}

#[test]
fn test_flatten_items_skips_missing_tracks() {
    let items = vec![
        create_test_item("Song A", &["Artist 1"]),
        PlaylistItem { track: None },
        create_test_item("Song B", &["Artist 2"]),
    ];

    let playlist = flatten_items(items);

    let titles: Vec<&str> = playlist.tracks.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Song A", "Song B"]);
}

#[test]
fn test_flatten_items_empty() {
    assert_eq!(flatten_items(Vec::new()), Playlist::default());
}

#[test]
fn test_playlist_items_deserialization() {
    let json = r#"{
        "href": "https://api.spotify.com/v1/playlists/abc/tracks",
        "items": [
            {
                "added_at": "2024-01-01T00:00:00Z",
                "track": {
                    "id": "t1",
                    "name": "Song A",
                    "artists": [{ "id": "a1", "name": "Artist 1" }, { "id": "a2", "name": "Artist 2" }]
                }
            },
            { "added_at": "2024-01-01T00:00:00Z", "track": null }
        ],
        "total": 2
    }"#;

    let response: daylist::types::GetPlaylistItemsResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.items.len(), 2);

    let playlist = flatten_items(response.items);
    assert_eq!(playlist.tracks.len(), 1);
    assert_eq!(playlist.tracks[0].artists, vec!["Artist 1", "Artist 2"]);
}

#[test]
fn test_playlist_serialization_shape() {
    let playlist = Playlist {
        tracks: vec![Track {
            title: "Song A".to_string(),
            artists: vec!["Artist 1".to_string()],
        }],
    };

    let value = serde_json::to_value(&playlist).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "Tracks": [{ "Title": "Song A", "Artists": ["Artist 1"] }] })
    );
}
