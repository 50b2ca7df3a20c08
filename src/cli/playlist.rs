use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{error, info, models::Playlist, session::Session, utils, warning};

pub async fn playlist(identifier: String) {
    let session = super::user_session().await;

    let Some(playlist) = load_playlist(&session, &identifier).await else {
        warning!("No playlist named or with id {}", identifier);
        return;
    };

    info!("{} ({} tracks)", playlist, playlist.track_count);
    println!("{}", Table::new(utils::track_rows(&playlist.tracks)));
}

/// Resolves a playlist behind a spinner; loading a long playlist takes a
/// request per hundred tracks.
pub(super) async fn load_playlist(session: &Session, identifier: &str) -> Option<Playlist> {
    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Loading playlist {identifier}..."));
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }

    let result = session.resolve_playlist(identifier).await;
    pb.finish_and_clear();

    match result {
        Ok(playlist) => playlist,
        Err(e) => error!("Failed to load playlist {}: {}", identifier, e),
    }
}
