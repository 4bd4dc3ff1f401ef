use crate::detail::Navigation;
use crate::domain::*;
use crate::ipc::error::{respond, HandlerErr};
use crate::ipc::helpers::{find, get_required_str, to_json};
use crate::ipc::types::{AppState, Request};
use crate::store::Stored;
use serde_json::{json, Value};

const RECORD_TABS: &[&str] = &["profile", "academic", "documents", "courses", "disciplinary"];

fn snapshot<T: Stored>(state: &AppState, id: &str) -> Result<Option<Value>, HandlerErr> {
    find::<T>(state, id).map(to_json).transpose()
}

/// Current copy of `view`/`id`, or `None` when the record no longer exists.
fn lookup(state: &AppState, view: &str, id: &str) -> Result<Option<Value>, HandlerErr> {
    match view {
        "payments" => snapshot::<Payment>(state, id),
        "invoices" => snapshot::<Invoice>(state, id),
        "clearances" => snapshot::<ClearanceRequest>(state, id),
        "announcements" => snapshot::<Announcement>(state, id),
        "resources" => snapshot::<Resource>(state, id),
        "admissions" => snapshot::<StudentAdmission>(state, id),
        "idCards" => snapshot::<StudentIdCard>(state, id),
        "applications" => snapshot::<StudentApplication>(state, id),
        "promotions" => snapshot::<StudentPromotion>(state, id),
        "studentRecords" => snapshot::<StudentRecord>(state, id),
        "exams" => snapshot::<ExamMonitoring>(state, id),
        "participation" => snapshot::<StudentParticipation>(state, id),
        "alerts" => snapshot::<IntegrityAlert>(state, id),
        _ => Err(HandlerErr::bad_params(format!("unknown view: {}", view))),
    }
}

fn navigation_for(view: &str) -> Navigation {
    match view {
        "studentRecords" => Navigation::tabs(RECORD_TABS),
        "admissions" | "applications" => Navigation::pages(2),
        _ => Navigation::None,
    }
}

fn nav_json(nav: &Navigation) -> Value {
    match nav {
        Navigation::None => json!({ "kind": "none" }),
        Navigation::Tabs { keys, .. } => json!({
            "kind": "tabs",
            "tabs": keys,
            "activeTab": nav.active_tab(),
        }),
        Navigation::Pages { .. } => {
            let (page, total) = nav.page().unwrap_or((1, 1));
            json!({
                "kind": "pages",
                "page": page,
                "totalPages": total,
                "canPrev": nav.can_prev(),
                "canNext": nav.can_next(),
            })
        }
    }
}

fn view_json(state: &AppState) -> Value {
    match state.detail.selected() {
        None => json!({ "open": false }),
        Some(sel) => json!({
            "open": true,
            "view": sel.view,
            "id": sel.id,
            "record": sel.record,
            "nav": nav_json(&sel.nav),
        }),
    }
}

fn require_open(state: &mut AppState) -> Result<&mut Navigation, HandlerErr> {
    state
        .detail
        .nav_mut()
        .ok_or_else(|| HandlerErr::bad_params("no record is open"))
}

fn open(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let view = get_required_str(params, "view")?;
    let id = get_required_str(params, "id")?;
    let Some(record) = lookup(state, &view, &id)? else {
        return Err(HandlerErr::not_found(format!("{} record not found", view))
            .with_details(json!({ "id": id })));
    };
    state.detail.open(&view, &id, record, navigation_for(&view));
    tracing::debug!(view = %view, id = %id, "detail opened");
    Ok(view_json(state))
}

fn select_tab(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let tab = get_required_str(params, "tab")?;
    let nav = require_open(state)?;
    if !nav.select_tab(&tab) {
        return Err(HandlerErr::bad_params(format!("unknown tab: {}", tab)));
    }
    Ok(view_json(state))
}

fn step(state: &mut AppState, forward: bool) -> Result<Value, HandlerErr> {
    let nav = require_open(state)?;
    let moved = if forward { nav.next() } else { nav.prev() };
    let mut out = view_json(state);
    out["moved"] = json!(moved);
    Ok(out)
}

/// Re-reads the open record from its collection. A record that has since
/// been deleted closes the view.
fn refresh(state: &mut AppState) -> Result<Value, HandlerErr> {
    let Some(sel) = state.detail.selected() else {
        return Ok(json!({ "open": false, "refreshed": false }));
    };
    let (view, id) = (sel.view.clone(), sel.id.clone());
    match lookup(state, &view, &id)? {
        Some(record) => {
            state.detail.refresh(record);
            let mut out = view_json(state);
            out["refreshed"] = json!(true);
            Ok(out)
        }
        None => {
            state.detail.close();
            Ok(json!({ "open": false, "refreshed": false, "closed": true }))
        }
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let p = &req.params;
    let result = match req.method.as_str() {
        "detail.open" => open(state, p),
        "detail.get" => Ok(view_json(state)),
        "detail.tab" => select_tab(state, p),
        "detail.next" => step(state, true),
        "detail.prev" => step(state, false),
        "detail.refresh" => refresh(state),
        "detail.close" => Ok(json!({ "closed": state.detail.close() })),
        _ => return None,
    };
    Some(respond(&req.id, result))
}
