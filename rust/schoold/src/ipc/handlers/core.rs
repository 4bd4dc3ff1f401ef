use crate::db;
use crate::ipc::error::{respond, HandlerErr};
use crate::ipc::helpers::get_required_str;
use crate::ipc::types::{AppState, Request};
use crate::store::Collections;
use anyhow::Context;
use serde_json::json;
use std::path::{Path, PathBuf};

/// Opens (or creates) the workspace database and swaps in its collections.
/// On failure the current state is left untouched.
pub fn select_workspace(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    let conn = db::open_db(path)
        .with_context(|| format!("failed to open workspace {}", path.to_string_lossy()))?;
    let data = Collections::load_or_seed(&conn)?;
    state.workspace = Some(path.to_path_buf());
    state.db = Some(conn);
    state.data = data;
    state.detail.close();
    tracing::info!(workspace = %path.display(), "workspace selected");
    Ok(())
}

fn health(state: &AppState) -> serde_json::Value {
    json!({
        "version": env!("CARGO_PKG_VERSION"),
        "workspacePath": state.workspace.as_ref().map(|p| p.to_string_lossy().to_string()),
        "persistent": state.db.is_some(),
    })
}

fn workspace_select(
    state: &mut AppState,
    params: &serde_json::Value,
) -> Result<serde_json::Value, HandlerErr> {
    let path = PathBuf::from(get_required_str(params, "path")?);
    select_workspace(state, &path)
        .map_err(|e| HandlerErr::new("db_open_failed", format!("{e:#}")))?;
    Ok(json!({ "workspacePath": path.to_string_lossy() }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let result = match req.method.as_str() {
        "health" => Ok(health(state)),
        "workspace.select" => workspace_select(state, &req.params),
        _ => return None,
    };
    Some(respond(&req.id, result))
}
