use crate::{error, success, utils, warning};

pub async fn search(query: String, kind: String, limit: u32) {
    let session = super::user_session().await;

    match session.track_search(&query, &kind, limit).await {
        Ok(Some(track)) => success!(
            "{} [{}] {}",
            track,
            utils::format_duration(track.duration),
            track.uri
        ),
        Ok(None) => warning!("No results for {}", query),
        Err(e) => error!("Search failed: {}", e),
    }
}
