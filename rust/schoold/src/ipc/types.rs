use std::path::PathBuf;

use rusqlite::Connection;
use serde::Deserialize;

use crate::detail::Presenter;
use crate::store::Collections;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

pub struct AppState {
    pub workspace: Option<PathBuf>,
    pub db: Option<Connection>,
    pub data: Collections,
    pub detail: Presenter<serde_json::Value>,
}

impl AppState {
    /// In-memory state seeded with demo data; no workspace yet.
    pub fn new() -> Self {
        Self {
            workspace: None,
            db: None,
            data: Collections::seeded(),
            detail: Presenter::default(),
        }
    }
}
