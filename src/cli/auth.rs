use crate::{error, spotify, success};

pub async fn auth() {
    match spotify::auth::get_user_token_from_env().await {
        Ok(_) => success!("Authentication successful!"),
        Err(e) => error!("Authentication failed: {}", e),
    }
}
