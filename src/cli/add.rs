use crate::{error, info, success, warning};

pub async fn add(identifier: String, queries: Vec<String>) {
    let session = super::user_session().await;

    let Some(playlist) = super::playlist::load_playlist(&session, &identifier).await else {
        warning!("No playlist named or with id {}", identifier);
        return;
    };

    let mut tracks = Vec::new();
    for query in &queries {
        match session.track_search_default(query).await {
            Ok(Some(track)) => {
                info!("{} -> {}", query, track);
                tracks.push(track);
            }
            Ok(None) => warning!("No results for {}", query),
            Err(e) => error!("Search for {} failed: {}", query, e),
        }
    }

    match playlist.add_tracks(&tracks).await {
        Ok(0) => info!("Nothing new to add to {}", playlist.name),
        Ok(count) => success!("Added {} tracks to {}", count, playlist.name),
        Err(e) => error!("Failed to add tracks to {}: {}", playlist.name, e),
    }
}
