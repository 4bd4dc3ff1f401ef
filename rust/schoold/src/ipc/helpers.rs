use crate::domain::status_summary;
use crate::filter::{self, Choice, Filterable, ListFilter};
use crate::ipc::error::HandlerErr;
use crate::ipc::types::AppState;
use crate::store::{self, Stored};
use crate::workflow::{self, Illegal, Outcome, Transition};
use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{json, Value};

pub fn get_required_str(params: &Value, key: &str) -> Result<String, HandlerErr> {
    let s = params
        .get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.trim().to_string())
        .ok_or_else(|| HandlerErr::bad_params(format!("missing {}", key)))?;
    if s.is_empty() {
        return Err(HandlerErr::bad_params(format!("{} must not be empty", key)));
    }
    Ok(s)
}

pub fn get_optional_str(params: &Value, key: &str) -> Option<String> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

pub fn get_required_amount(params: &Value, key: &str) -> Result<f64, HandlerErr> {
    let n = params
        .get(key)
        .and_then(|v| v.as_f64())
        .ok_or_else(|| HandlerErr::bad_params(format!("{} must be a number", key)))?;
    if !n.is_finite() || n <= 0.0 {
        return Err(HandlerErr::bad_params(format!("{} must be positive", key)));
    }
    Ok(n)
}

pub fn get_required_bool(params: &Value, key: &str) -> Result<bool, HandlerErr> {
    params
        .get(key)
        .and_then(|v| v.as_bool())
        .ok_or_else(|| HandlerErr::bad_params(format!("{} must be boolean", key)))
}

/// Parses a wire enum value with the given parser.
pub fn get_required_enum<T>(
    params: &Value,
    key: &str,
    parse: fn(&str) -> Option<T>,
) -> Result<T, HandlerErr> {
    let raw = get_required_str(params, key)?;
    parse(&raw).ok_or_else(|| HandlerErr::bad_params(format!("unknown {}: {}", key, raw)))
}

/// Calendar date in `YYYY-MM-DD` form; `None` when the param is absent.
pub fn get_optional_date(params: &Value, key: &str) -> Result<Option<NaiveDate>, HandlerErr> {
    let Some(raw) = get_optional_str(params, key) else {
        return Ok(None);
    };
    match NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
        // chrono accepts unpadded fields; only the canonical spelling is stored.
        Ok(date) if date.format("%Y-%m-%d").to_string() == raw => Ok(Some(date)),
        _ => Err(
            HandlerErr::bad_params(format!("{} must be a YYYY-MM-DD date", key))
                .with_details(json!({ "value": raw })),
        ),
    }
}

pub fn get_required_date(params: &Value, key: &str) -> Result<NaiveDate, HandlerErr> {
    get_optional_date(params, key)?
        .ok_or_else(|| HandlerErr::bad_params(format!("missing {}", key)))
}

pub fn to_json<T: Serialize>(value: &T) -> Result<Value, HandlerErr> {
    serde_json::to_value(value).map_err(|e| HandlerErr::new("serialize_failed", e.to_string()))
}

pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

/// `{ "query": "...", "filters": { "status": "pending", "type": "all" } }`
pub fn parse_list_filter<T: Filterable>(params: &Value) -> Result<ListFilter, HandlerErr> {
    let query = match params.get("query") {
        None | Some(Value::Null) => "",
        Some(v) => v
            .as_str()
            .ok_or_else(|| HandlerErr::bad_params("query must be a string"))?,
    };
    let mut out = ListFilter::new(query);
    match params.get("filters") {
        None | Some(Value::Null) => {}
        Some(Value::Object(map)) => {
            for (key, v) in map {
                if !T::CATEGORY_KEYS.contains(&key.as_str()) {
                    return Err(HandlerErr::bad_params(format!("unknown filter: {}", key))
                        .with_details(json!({ "allowed": T::CATEGORY_KEYS })));
                }
                let raw = match v {
                    Value::String(s) => s.clone(),
                    Value::Bool(b) => b.to_string(),
                    Value::Null => "all".to_string(),
                    _ => {
                        return Err(HandlerErr::bad_params(format!(
                            "filter {} must be a string",
                            key
                        )))
                    }
                };
                out = out.with(key, Choice::parse(&raw));
            }
        }
        Some(_) => return Err(HandlerErr::bad_params("filters must be an object")),
    }
    Ok(out)
}

/// Filtered rows plus stat-card counts over the whole collection.
pub fn list_result<T: Stored>(state: &AppState, params: &Value) -> Result<Value, HandlerErr> {
    let f = parse_list_filter::<T>(params)?;
    let items = T::slot(&state.data);
    let rows = filter::apply(items, &f);
    Ok(json!({
        "rows": to_json(&rows)?,
        "query": f.query(),
        "matched": rows.len(),
        "total": items.len(),
        "summary": status_summary(items),
    }))
}

pub fn find<'a, T: Stored>(state: &'a AppState, id: &str) -> Option<&'a T> {
    T::slot(&state.data).iter().find(|r| r.key() == id)
}

pub fn get_result<T: Stored>(state: &AppState, params: &Value) -> Result<Value, HandlerErr> {
    let id = get_required_str(params, "id")?;
    let Some(record) = find::<T>(state, &id) else {
        return Err(HandlerErr::not_found(format!(
            "{} record not found",
            T::COLLECTION
        )));
    };
    Ok(json!({ "record": to_json(record)? }))
}

/// Stores a replacement collection and writes it through to the workspace.
pub fn commit<T: Stored>(state: &mut AppState, items: Vec<T>) -> Result<(), HandlerErr> {
    *T::slot_mut(&mut state.data) = items;
    if let Some(conn) = state.db.as_ref() {
        store::persist(conn, T::slot(&state.data)).map_err(|e| {
            HandlerErr::new("db_update_failed", format!("{e:#}"))
                .with_details(json!({ "collection": T::COLLECTION }))
        })?;
    }
    Ok(())
}

/// Appends a freshly created record.
pub fn append<T: Stored>(state: &mut AppState, record: T) -> Result<Value, HandlerErr> {
    let mut items = T::slot(&state.data).clone();
    let reply = json!({ "record": to_json(&record)? });
    tracing::info!(collection = T::COLLECTION, id = record.key(), "record created");
    items.push(record);
    commit(state, items)?;
    Ok(reply)
}

pub fn delete_by_id<T: Stored>(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let id = get_required_str(params, "id")?;
    let Some(items) = workflow::remove(T::slot(&state.data), &id) else {
        return Ok(json!({ "deleted": false }));
    };
    commit(state, items)?;
    tracing::info!(collection = T::COLLECTION, id = %id, "record deleted");
    Ok(json!({ "deleted": true }))
}

pub fn transition_by_id<T, F>(
    state: &mut AppState,
    params: &Value,
    step: F,
) -> Result<Value, HandlerErr>
where
    T: Stored,
    F: FnOnce(&T) -> Result<T, Illegal>,
{
    let id = get_required_str(params, "id")?;
    let t = workflow::transition(T::slot(&state.data), &id, step);
    finish_transition(state, &id, t)
}

/// Reply for a status change. Unknown ids and refused actions are reported in
/// `outcome` and leave the collection as it was.
pub fn finish_transition<T: Stored>(
    state: &mut AppState,
    id: &str,
    t: Transition<T>,
) -> Result<Value, HandlerErr> {
    tracing::debug!(
        collection = T::COLLECTION,
        id,
        outcome = t.outcome.as_str(),
        "transition"
    );
    let mut result = json!({
        "applied": t.applied(),
        "outcome": t.outcome.as_str(),
    });
    if let Outcome::Illegal(illegal) = t.outcome {
        result["from"] = json!(illegal.from);
        result["action"] = json!(illegal.action);
    }
    if let Some(record) = t.record() {
        result["record"] = to_json(record)?;
    }
    if t.applied() {
        commit(state, t.items)?;
    }
    Ok(result)
}
