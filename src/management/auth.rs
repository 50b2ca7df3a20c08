use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use chrono::Utc;

use crate::{Res, spotify, types::Token};

/// Seconds before the real expiry at which a token is already treated as
/// expired.
const EXPIRY_MARGIN: u64 = 240;

/// A user token together with the cache file it lives in.
pub struct TokenManager {
    path: PathBuf,
    token: Token,
}

impl TokenManager {
    pub fn new(path: PathBuf, token: Token) -> Self {
        TokenManager { path, token }
    }

    pub async fn load(path: &Path) -> Result<Self, String> {
        let content = async_fs::read_to_string(path)
            .await
            .map_err(|e| e.to_string())?;
        let token: Token = serde_json::from_str(&content).map_err(|e| e.to_string())?;
        Ok(Self {
            path: path.to_path_buf(),
            token,
        })
    }

    pub async fn persist(&self) -> Result<(), String> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(&self.token).map_err(|e| e.to_string())?;
        async_fs::write(&self.path, json)
            .await
            .map_err(|e| e.to_string())
    }

    pub fn is_expired(&self) -> bool {
        let now = Utc::now().timestamp() as u64;
        now + EXPIRY_MARGIN >= self.token.obtained_at + self.token.expires_in
    }

    /// Whether the token was granted every scope in the space-separated
    /// `scope` list.
    pub fn covers_scope(&self, scope: &str) -> bool {
        let granted: HashSet<&str> = self.token.scope.split_whitespace().collect();
        scope.split_whitespace().all(|s| granted.contains(s))
    }

    /// Swaps the token for a refreshed one and writes it back to the cache.
    ///
    /// Only the refresh request can fail; a cache write error is logged and
    /// the refreshed token is kept.
    pub async fn refresh(&mut self, client_id: &str, client_secret: &str) -> Res<()> {
        let mut token =
            spotify::auth::refresh_token(&self.token.refresh_token, client_id, client_secret)
                .await?;
        if token.scope.is_empty() {
            token.scope = self.token.scope.clone();
        }
        self.store(token).await;
        Ok(())
    }

    async fn store(&mut self, token: Token) {
        self.token = token;
        if let Err(e) = self.persist().await {
            tracing::warn!(path = %self.path.display(), error = %e, "Cannot write token cache");
        }
    }

    pub fn access_token(&self) -> &str {
        &self.token.access_token
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }
}
