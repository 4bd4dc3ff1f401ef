use crate::backup;
use crate::ipc::error::{respond, HandlerErr};
use crate::ipc::handlers::core::select_workspace;
use crate::ipc::helpers::get_required_str;
use crate::ipc::types::{AppState, Request};
use serde_json::{json, Value};
use std::path::PathBuf;

fn workspace_path(state: &AppState) -> Result<PathBuf, HandlerErr> {
    state.workspace.clone().ok_or_else(HandlerErr::no_workspace)
}

fn export_bundle(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let out_path = get_required_str(params, "outPath")?;
    let workspace = workspace_path(state)?;

    if let Some(conn) = state.db.as_ref() {
        let _ = conn.execute_batch("PRAGMA wal_checkpoint(FULL)");
    }

    let out = PathBuf::from(&out_path);
    let summary = backup::export_workspace_bundle(&workspace, &out).map_err(|e| {
        HandlerErr::new("io_failed", format!("{e:#}")).with_details(json!({ "path": out_path }))
    })?;
    tracing::info!(path = %out.display(), sha256 = %summary.db_sha256, "workspace bundle exported");

    Ok(json!({
        "ok": true,
        "path": out_path,
        "bundleFormat": summary.bundle_format,
        "entryCount": summary.entry_count,
        "dbSha256": summary.db_sha256,
    }))
}

fn import_bundle(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let in_path = get_required_str(params, "inPath")?;
    let workspace = workspace_path(state)?;

    let src = PathBuf::from(&in_path);
    if !src.is_file() {
        return Err(HandlerErr::not_found("bundle file not found")
            .with_details(json!({ "path": in_path })));
    }

    // Drop open handle before replacing file.
    state.db = None;

    let imported = backup::import_workspace_bundle(&src, &workspace).map_err(|e| {
        HandlerErr::new("io_failed", format!("{e:#}")).with_details(json!({ "path": in_path }))
    });
    // Reopen whatever database is now in place, imported or not.
    let reopened = select_workspace(state, &workspace);
    if let Err(e) = &reopened {
        // No connection is open; later changes stay in memory.
        state.workspace = None;
        tracing::warn!(
            workspace = %workspace.display(),
            error = %format!("{e:#}"),
            "workspace not reopened after import"
        );
    }
    let summary = imported?;
    reopened.map_err(|e| HandlerErr::new("db_open_failed", format!("{e:#}")))?;
    tracing::info!(path = %src.display(), "workspace bundle imported");

    Ok(json!({
        "ok": true,
        "workspacePath": workspace.to_string_lossy(),
        "bundleFormatDetected": summary.bundle_format_detected,
        "dbSha256": summary.db_sha256,
    }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let result = match req.method.as_str() {
        "backup.export" => export_bundle(state, &req.params),
        "backup.import" => import_bundle(state, &req.params),
        _ => return None,
    };
    Some(respond(&req.id, result))
}
