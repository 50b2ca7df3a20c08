use crate::{error, spotify};

pub async fn token() {
    match spotify::auth::get_token_from_env().await {
        Ok(token) => println!("{}", token),
        Err(e) => error!("Failed to get app token: {}", e),
    }
}
