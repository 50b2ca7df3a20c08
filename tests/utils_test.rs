mod common;

use myspot::{models::Track, utils::*};
use serde_json::json;

use common::{object, track_json};

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // SHA-256 digest, base64 without padding
    assert_eq!(challenge.len(), 43);

    // Should be deterministic - same input produces same output
    assert_eq!(challenge, generate_code_challenge(verifier));

    // Different input should produce different output
    assert_ne!(challenge, generate_code_challenge("different_verifier"));

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_track_uri() {
    assert_eq!(track_uri("4uLU6hMCjMI75M1A2tKUQC"), "spotify:track:4uLU6hMCjMI75M1A2tKUQC");
    // already a URI, passed through
    assert_eq!(track_uri("spotify:track:abc"), "spotify:track:abc");
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(1_999), "0:01");
    assert_eq!(format_duration(367_000), "6:07");
    assert_eq!(format_duration(3_600_000), "1:00:00");
    assert_eq!(format_duration(3_725_000), "1:02:05");
}

#[test]
fn test_track_rows() {
    let track = Track::from_payload(&object(track_json("a", "Song A"))).unwrap();
    let rows = track_rows(&[track]);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].name, "Song A");
    assert_eq!(rows[0].artists, "Artist One");
    assert_eq!(rows[0].album, "Album One");
    assert_eq!(rows[0].duration, "3:00");
}

#[test]
fn test_history_rows() {
    let played = Track::from_history(&object(json!({
        "played_at": "2024-05-01T10:00:00Z",
        "track": track_json("a", "Song A")
    })))
    .unwrap();
    let unplayed = Track::from_payload(&object(track_json("b", "Song B"))).unwrap();

    let rows = history_rows(&[played, unplayed]);
    assert_eq!(rows[0].played_at, "2024-05-01T10:00:00Z");
    assert_eq!(rows[1].played_at, "");
}
