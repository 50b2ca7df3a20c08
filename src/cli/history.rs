use tabled::Table;

use crate::{error, utils, warning};

pub async fn history() {
    let session = super::user_session().await;

    match session.get_history().await {
        Ok(tracks) if tracks.is_empty() => warning!("No recently played tracks"),
        Ok(tracks) => println!("{}", Table::new(utils::history_rows(&tracks))),
        Err(e) => error!("Failed to load history: {}", e),
    }
}
