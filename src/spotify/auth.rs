use std::{path::Path, sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::{Client, Url};
use serde_json::Value;
use tokio::sync::Mutex;

use crate::{
    Res, config,
    management::TokenManager,
    server::start_api_server,
    types::{PkceState, Token},
    utils, warning,
};

const CALLBACK_TIMEOUT: Duration = Duration::from_secs(60);

/// Requests an app-only access token with the client-credentials grant.
///
/// The token carries no user context, so it only works for catalog
/// endpoints such as search. Nothing is cached.
pub async fn get_token(client_id: &str, client_secret: &str) -> Res<String> {
    let client = Client::new();
    let res = client
        .post(config::spotify_apitoken_url())
        .basic_auth(client_id, Some(client_secret))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?
        .error_for_status()?;

    let json: Value = res.json().await?;
    let token = token_from_response(&json, "")?;
    Ok(token.access_token)
}

/// [`get_token`] with the credentials taken from the configuration.
pub async fn get_token_from_env() -> Res<String> {
    get_token(&config::spotify_client_id()?, &config::spotify_client_secret()?).await
}

/// Returns a user-scoped access token for `user_id`.
///
/// The token cache at `cache_path` is consulted first. A cached token not
/// granted every scope in [`config::USER_SCOPE`] is ignored. Otherwise:
/// 1. A cached token that has not expired is returned as is.
/// 2. An expired token with a refresh token is refreshed and written back.
/// 3. Otherwise the user is sent through the interactive authorization flow
///    and the new token is written to the cache.
///
/// The requested scopes are always [`config::USER_SCOPE`].
pub async fn get_user_token(
    user_id: &str,
    client_id: &str,
    client_secret: &str,
    cache_path: &Path,
) -> Res<String> {
    if let Ok(mut token_mgr) = TokenManager::load(cache_path).await {
        if !token_mgr.covers_scope(config::USER_SCOPE) {
            tracing::info!(
                user = user_id,
                granted = %token_mgr.current_token().scope,
                "Cached token lacks required scopes"
            );
        } else if !token_mgr.is_expired() {
            tracing::debug!(user = user_id, "Using cached token");
            return Ok(token_mgr.access_token().to_string());
        } else if !token_mgr.current_token().refresh_token.is_empty() {
            match token_mgr.refresh(client_id, client_secret).await {
                Ok(()) => {
                    tracing::debug!(user = user_id, "Refreshed cached token");
                    return Ok(token_mgr.access_token().to_string());
                }
                Err(e) => tracing::warn!(user = user_id, error = %e, "Token refresh failed"),
            }
        }
    }

    tracing::info!(user = user_id, "Starting interactive authorization");
    let token = authorize(client_id).await?;
    let token_mgr = TokenManager::new(cache_path.to_path_buf(), token);
    token_mgr.persist().await?;
    Ok(token_mgr.access_token().to_string())
}

/// [`get_user_token`] for the configured user, credentials and cache path.
pub async fn get_user_token_from_env() -> Res<String> {
    let user_id = config::spotify_user()?;
    get_user_token(
        &user_id,
        &config::spotify_client_id()?,
        &config::spotify_client_secret()?,
        &config::cache_path(&user_id),
    )
    .await
}

/// Runs the interactive authorization-code flow with PKCE.
///
/// Starts the local callback server, opens the authorization URL in the
/// browser (or prints it when no browser can be opened) and waits for the
/// callback to deliver a token.
pub async fn authorize(client_id: &str) -> Res<Token> {
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);
    let redirect_uri = config::spotify_redirect_uri();

    let shared_state: Arc<Mutex<Option<PkceState>>> = Arc::new(Mutex::new(Some(PkceState {
        code_verifier,
        client_id: client_id.to_string(),
        redirect_uri: redirect_uri.clone(),
        token: None,
    })));

    let server_state = Arc::clone(&shared_state);
    let server = tokio::spawn(async move {
        if let Err(e) = start_api_server(server_state).await {
            tracing::error!(error = %e, "Callback server stopped");
        }
    });

    let auth_url = authorize_url(
        &config::spotify_apiauth_url(),
        client_id,
        &redirect_uri,
        &code_challenge,
        config::USER_SCOPE,
    )?;

    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let token = wait_for_token(shared_state, CALLBACK_TIMEOUT).await;
    server.abort();

    token.ok_or_else(|| "Authentication failed or timed out.".into())
}

/// Builds the authorization URL the user is sent to.
pub fn authorize_url(
    auth_url: &str,
    client_id: &str,
    redirect_uri: &str,
    code_challenge: &str,
    scope: &str,
) -> Result<Url, String> {
    Url::parse_with_params(
        auth_url,
        &[
            ("client_id", client_id),
            ("response_type", "code"),
            ("redirect_uri", redirect_uri),
            ("code_challenge_method", "S256"),
            ("code_challenge", code_challenge),
            ("scope", scope),
        ],
    )
    .map_err(|e| e.to_string())
}

/// Polls the shared state until the callback handler stored a token or the
/// timeout elapsed.
async fn wait_for_token(
    shared_state: Arc<Mutex<Option<PkceState>>>,
    max_wait: Duration,
) -> Option<Token> {
    use std::time::Instant;

    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(token) = lock.as_ref().and_then(|state| state.token.as_ref()) {
            return Some(token.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges an authorization code and its PKCE verifier for a token.
pub async fn exchange_code_pkce(
    code: &str,
    verifier: &str,
    client_id: &str,
    redirect_uri: &str,
) -> Res<Token> {
    let client = Client::new();
    let res = client
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", client_id),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", redirect_uri),
        ])
        .send()
        .await?
        .error_for_status()?;

    let json: Value = res.json().await?;
    token_from_response(&json, "")
}

/// Exchanges a refresh token for a fresh access token.
///
/// Spotify may or may not rotate the refresh token; when the response has
/// none, the one passed in is kept.
pub async fn refresh_token(refresh_token: &str, client_id: &str, client_secret: &str) -> Res<Token> {
    let client = Client::new();
    let res = client
        .post(config::spotify_apitoken_url())
        .basic_auth(client_id, Some(client_secret))
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", client_id),
        ])
        .send()
        .await?
        .error_for_status()?;

    let json: Value = res.json().await?;
    token_from_response(&json, refresh_token)
}

/// Reads a token endpoint response.
pub fn token_from_response(json: &Value, fallback_refresh_token: &str) -> Res<Token> {
    let access_token = json["access_token"]
        .as_str()
        .ok_or("Token response has no access_token")?;

    Ok(Token {
        access_token: access_token.to_string(),
        refresh_token: json["refresh_token"]
            .as_str()
            .unwrap_or(fallback_refresh_token)
            .to_string(),
        scope: json["scope"].as_str().unwrap_or_default().to_string(),
        expires_in: json["expires_in"].as_u64().unwrap_or(3600),
        obtained_at: Utc::now().timestamp() as u64,
    })
}
