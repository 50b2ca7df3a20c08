use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{spotify, types::PkceState};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<PkceState>>>>,
) -> Html<&'static str> {
    if let Some(error) = params.get("error") {
        tracing::warn!(%error, "Authorization was denied");
        return Html("<h4>Authorization denied.</h4>");
    }

    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>");
    };

    let mut state = shared_state.lock().await;
    let Some(pkce_state) = state.as_mut() else {
        return Html("<h4>Missing PKCE code verifier.</h4>");
    };

    match spotify::auth::exchange_code_pkce(
        code,
        &pkce_state.code_verifier,
        &pkce_state.client_id,
        &pkce_state.redirect_uri,
    )
    .await
    {
        Ok(token) => {
            pkce_state.token = Some(token);
            Html("<h2>Authentication successful.</h2><p>Close browser window.</p>")
        }
        Err(e) => {
            tracing::warn!(error = %e, "Token exchange failed");
            Html("<h4>Login failed.</h4>")
        }
    }
}
