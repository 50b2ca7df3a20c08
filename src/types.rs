use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tabled::Tabled;

/// A loosely-typed JSON object as returned by the Web API.
pub type Payload = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: String,
    #[serde(default)]
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// State shared between the authorization flow and the callback handler.
#[derive(Debug, Clone)]
pub struct PkceState {
    pub code_verifier: String,
    pub client_id: String,
    pub redirect_uri: String,
    pub token: Option<Token>,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    pub name: String,
    pub artists: String,
    pub album: String,
    pub duration: String,
}

#[derive(Tabled)]
pub struct HistoryTableRow {
    pub played_at: String,
    pub name: String,
    pub artists: String,
}
