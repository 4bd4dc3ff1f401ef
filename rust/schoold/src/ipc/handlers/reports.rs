use crate::ipc::error::{respond, HandlerErr};
use crate::ipc::helpers::{get_optional_str, now_iso, to_json};
use crate::ipc::types::{AppState, Request};
use crate::reports;
use serde_json::{json, Value};

fn types() -> Value {
    let types: Vec<Value> = reports::report_types()
        .map(|(kind, title)| json!({ "type": kind, "title": title }))
        .collect();
    json!({ "types": types })
}

/// Missing or unknown types preview as `null`; the UI shows its empty state.
fn preview(params: &Value) -> Result<Value, HandlerErr> {
    let kind = get_optional_str(params, "type");
    let preview = match reports::preview(kind.as_deref()) {
        Some(p) => to_json(p)?,
        None => Value::Null,
    };
    Ok(json!({ "preview": preview }))
}

fn generate(params: &Value) -> Result<Value, HandlerErr> {
    let Some(kind) = get_optional_str(params, "type") else {
        return Err(HandlerErr::bad_params("select a report type first"));
    };
    let Some(report) = reports::preview(Some(&kind)) else {
        let known: Vec<&str> = reports::report_types().map(|(k, _)| k).collect();
        return Err(HandlerErr::not_found(format!("unknown report type: {}", kind))
            .with_details(json!({ "known": known })));
    };
    tracing::info!(report = report.kind, "report generated");
    Ok(json!({
        "type": report.kind,
        "title": report.title,
        "generatedAt": now_iso(),
        "preview": to_json(report)?,
    }))
}

pub fn try_handle(_state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let result = match req.method.as_str() {
        "reports.types" => Ok(types()),
        "reports.preview" => preview(&req.params),
        "reports.generate" => generate(&req.params),
        _ => return None,
    };
    Some(respond(&req.id, result))
}
