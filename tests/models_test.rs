mod common;

use std::collections::HashSet;

use myspot::{
    mapping::MappingError,
    models::{Album, Artist, Image, Track},
};
use serde_json::json;

use common::object;

fn full_track() -> serde_json::Value {
    json!({
        "name": "Windowlicker",
        "id": "6Y1CLPwYe7zvI8PJiWVz6T",
        "uri": "spotify:track:6Y1CLPwYe7zvI8PJiWVz6T",
        "duration_ms": 367_000,
        "album": {
            "name": "Windowlicker",
            "id": "alb",
            "uri": "spotify:album:alb",
            "total_tracks": 3,
            "release_date": "1999",
            "artists": [{ "name": "Aphex Twin", "id": "ar", "uri": "spotify:artist:ar" }],
            "images": [
                { "url": "https://i.example/640", "width": 640, "height": 640 },
                { "url": "https://i.example/unknown", "width": null, "height": null }
            ]
        },
        "artists": [
            { "name": "Aphex Twin", "id": "ar", "uri": "spotify:artist:ar",
              "external_urls": { "spotify": "https://open.example/artist/ar" },
              "href": "https://api.example/artists/ar" }
        ],
        "disc_number": 1,
        "explicit": true,
        "external_urls": { "spotify": "https://open.example/track/6Y1" },
        "href": "https://api.example/tracks/6Y1",
        "popularity": 57,
        "preview_url": "https://p.example/6Y1.mp3",
        "track_number": 1,
        "available_markets": ["SE", "GB"]
    })
}

#[test]
fn track_reads_every_field() {
    let track = Track::from_payload(&object(full_track())).unwrap();

    assert_eq!(track.name, "Windowlicker");
    assert_eq!(track.id, "6Y1CLPwYe7zvI8PJiWVz6T");
    assert_eq!(track.uri, "spotify:track:6Y1CLPwYe7zvI8PJiWVz6T");
    assert_eq!(track.duration, 367_000);
    assert_eq!(track.disc_number, 1);
    assert!(track.explicit);
    assert_eq!(track.popularity, 57);
    assert_eq!(track.preview.as_deref(), Some("https://p.example/6Y1.mp3"));
    assert_eq!(track.track_number, 1);
    assert_eq!(track.href, "https://api.example/tracks/6Y1");
    assert_eq!(
        track.urls.get("spotify").map(String::as_str),
        Some("https://open.example/track/6Y1")
    );
    assert_eq!(track.played_at, None);

    assert_eq!(track.artists.len(), 1);
    assert_eq!(track.artists[0].href, "https://api.example/artists/ar");

    assert_eq!(track.album.id, "alb");
    assert_eq!(track.album.track_count, 3);
    assert_eq!(track.album.release_date, "1999");
    assert_eq!(track.album.artists[0].name, "Aphex Twin");
    assert_eq!(
        track.album.images,
        vec![
            Image {
                url: "https://i.example/640".into(),
                width: Some(640),
                height: Some(640),
            },
            Image {
                url: "https://i.example/unknown".into(),
                width: None,
                height: None,
            },
        ]
    );
}

#[test]
fn track_defaults_for_missing_optional_fields() {
    let track = Track::from_payload(&object(json!({
        "name": "Song",
        "id": "x",
        "uri": "u",
        "duration_ms": 1000
    })))
    .unwrap();

    assert!(track.artists.is_empty());
    assert_eq!(track.album.name, "");
    assert_eq!(track.album.id, "");
    assert_eq!(track.album.track_count, 0);
    assert_eq!(track.disc_number, 0);
    assert!(!track.explicit);
    assert!(track.urls.is_empty());
    assert_eq!(track.href, "");
    assert_eq!(track.popularity, 0);
    assert_eq!(track.preview, None);
    assert_eq!(track.track_number, 0);
    assert_eq!(track.played_at, None);
}

#[test]
fn track_requires_identity_fields_and_duration() {
    for field in ["name", "id", "uri", "duration_ms"] {
        let mut payload = object(full_track());
        payload.remove(field);

        let err = Track::from_payload(&payload).unwrap_err();
        assert_eq!(err, MappingError::MissingField(field));
    }
}

#[test]
fn album_and_artist_require_identity_fields() {
    let artist = object(json!({ "name": "A", "uri": "spotify:artist:a" }));
    assert_eq!(
        Artist::from_payload(&artist).unwrap_err(),
        MappingError::MissingField("id")
    );

    let album = object(json!({ "id": "a", "uri": "spotify:album:a" }));
    assert_eq!(
        Album::from_payload(&album).unwrap_err(),
        MappingError::MissingField("name")
    );
}

#[test]
fn empty_nested_album_becomes_default() {
    let track = Track::from_payload(&object(json!({
        "name": "Song", "id": "x", "uri": "u", "duration_ms": 1, "album": {}
    })))
    .unwrap();

    assert_eq!(track.album.name, "");
    assert!(track.album.artists.is_empty());
}

#[test]
fn partially_filled_nested_album_still_fails() {
    let err = Track::from_payload(&object(json!({
        "name": "Song", "id": "x", "uri": "u", "duration_ms": 1,
        "album": { "name": "Only a name" }
    })))
    .unwrap_err();

    assert_eq!(err, MappingError::MissingField("id"));
}

#[test]
fn tracks_with_same_id_are_interchangeable() {
    let t1 = Track::from_payload(&object(full_track())).unwrap();
    let mut other = object(full_track());
    other.insert("name".into(), json!("Windowlicker (Remaster)"));
    other.insert("album".into(), json!({}));
    let t2 = Track::from_payload(&other).unwrap();

    assert_eq!(t1, t2);

    let set: HashSet<Track> = [t1, t2].into_iter().collect();
    assert_eq!(set.len(), 1);
}

#[test]
fn tracks_with_different_ids_differ() {
    let t1 = Track::from_payload(&object(common::track_json("a", "Same"))).unwrap();
    let t2 = Track::from_payload(&object(common::track_json("b", "Same"))).unwrap();
    assert_ne!(t1, t2);
}

#[test]
fn album_equality_compares_ids() {
    let a = Album::from_payload(&object(json!({ "name": "A", "id": "1", "uri": "u" }))).unwrap();
    let b = Album::from_payload(&object(json!({ "name": "B", "id": "1", "uri": "v" }))).unwrap();
    let c = Album::from_payload(&object(json!({ "name": "A", "id": "2", "uri": "u" }))).unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn history_envelope_sets_played_at() {
    let envelope = object(json!({
        "played_at": "T1",
        "track": { "id": "x", "name": "Song", "duration_ms": 1000, "uri": "u" }
    }));

    let track = Track::from_history(&envelope).unwrap();
    assert_eq!(track.id, "x");
    assert_eq!(track.played_at.as_deref(), Some("T1"));
}

#[test]
fn display_forms() {
    let track = Track::from_payload(&object(json!({
        "name": "Roygbiv",
        "id": "r",
        "uri": "u",
        "duration_ms": 1,
        "artists": [
            { "name": "Boards of Canada", "id": "boc", "uri": "a1" },
            { "name": "Guest", "id": "g", "uri": "a2" }
        ],
        "album": {
            "name": "Music Has the Right to Children",
            "id": "m",
            "uri": "al",
            "artists": [{ "name": "Boards of Canada", "id": "boc", "uri": "a1" }]
        }
    })))
    .unwrap();

    assert_eq!(
        track.to_string(),
        "Roygbiv - Boards of Canada, Guest - Music Has the Right to Children"
    );
    assert_eq!(
        track.album.to_string(),
        "Music Has the Right to Children - Boards of Canada"
    );
    assert_eq!(track.artists[0].to_string(), "Boards of Canada");
}

#[test]
fn wrong_types_are_reported() {
    let mut payload = object(full_track());
    payload.insert("duration_ms".into(), json!("long"));

    assert!(matches!(
        Track::from_payload(&payload),
        Err(MappingError::InvalidField {
            field: "duration_ms",
            ..
        })
    ));
}
