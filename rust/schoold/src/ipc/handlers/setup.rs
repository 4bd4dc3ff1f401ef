use crate::db;
use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use chrono::Datelike;
use serde_json::{json, Map, Value};
use std::path::PathBuf;

#[derive(Clone, Copy)]
enum SetupSection {
    Codes,
    Exports,
}

impl SetupSection {
    const ALL: [SetupSection; 2] = [SetupSection::Codes, SetupSection::Exports];

    fn parse(s: &str) -> Option<Self> {
        match s {
            "codes" => Some(Self::Codes),
            "exports" => Some(Self::Exports),
            _ => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Codes => "codes",
            Self::Exports => "exports",
        }
    }

    fn key(self) -> &'static str {
        match self {
            Self::Codes => "setup.codes",
            Self::Exports => "setup.exports",
        }
    }
}

fn default_section(section: SetupSection) -> Value {
    match section {
        SetupSection::Codes => json!({
            "studentCodePrefix": "STU",
            "cardNumberPrefix": "ID",
            "academicYear": chrono::Local::now().year()
        }),
        SetupSection::Exports => json!({
            "directory": null
        }),
    }
}

fn as_object_mut(value: &mut Value) -> Result<&mut Map<String, Value>, String> {
    value
        .as_object_mut()
        .ok_or_else(|| "internal setup object must be a JSON object".to_string())
}

fn parse_i64_range(v: &Value, key: &str, min: i64, max: i64) -> Result<i64, String> {
    let n = v
        .as_i64()
        .ok_or_else(|| format!("{} must be integer", key))?;
    if !(min..=max).contains(&n) {
        return Err(format!("{} must be in {}..={}", key, min, max));
    }
    Ok(n)
}

fn parse_string_max(v: &Value, key: &str, max_len: usize) -> Result<String, String> {
    let s = v.as_str().ok_or_else(|| format!("{} must be string", key))?;
    let s = s.trim();
    if s.len() > max_len {
        return Err(format!("{} length must be <= {}", key, max_len));
    }
    Ok(s.to_string())
}

fn parse_nullable_string_max(v: &Value, key: &str, max_len: usize) -> Result<Value, String> {
    if v.is_null() {
        return Ok(Value::Null);
    }
    let s = parse_string_max(v, key, max_len)?;
    if s.is_empty() {
        return Ok(Value::Null);
    }
    Ok(Value::String(s))
}

/// Code prefixes end up inside generated codes, so they are kept to plain
/// alphanumerics.
fn parse_prefix(v: &Value, key: &str) -> Result<String, String> {
    let s = parse_string_max(v, key, 8)?.to_ascii_uppercase();
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(format!("{} must be 1-8 letters or digits", key));
    }
    Ok(s)
}

fn merge_section_patch(
    section: SetupSection,
    current: &mut Value,
    patch: &Map<String, Value>,
) -> Result<(), String> {
    let obj = as_object_mut(current)?;
    for (k, v) in patch {
        match section {
            SetupSection::Codes => match k.as_str() {
                "studentCodePrefix" | "cardNumberPrefix" => {
                    obj.insert(k.clone(), Value::String(parse_prefix(v, k)?));
                }
                "academicYear" => {
                    obj.insert(k.clone(), Value::from(parse_i64_range(v, k, 2000, 2100)?));
                }
                _ => return Err(format!("unknown codes field: {}", k)),
            },
            SetupSection::Exports => match k.as_str() {
                "directory" => {
                    obj.insert(k.clone(), parse_nullable_string_max(v, k, 1024)?);
                }
                _ => return Err(format!("unknown exports field: {}", k)),
            },
        }
    }
    Ok(())
}

fn load_section(conn: Option<&rusqlite::Connection>, section: SetupSection) -> anyhow::Result<Value> {
    let mut current = default_section(section);
    let Some(conn) = conn else {
        return Ok(current);
    };
    if let Some(saved) = db::settings_get_json(conn, section.key())? {
        if let Some(saved_obj) = saved.as_object() {
            // Malformed saved values fall back to defaults field by field.
            for (k, v) in saved_obj {
                let mut one = Map::new();
                one.insert(k.clone(), v.clone());
                if let Err(msg) = merge_section_patch(section, &mut current, &one) {
                    tracing::warn!(section = section.name(), %msg, "ignoring saved setup value");
                }
            }
        }
    }
    Ok(current)
}

/// Settings that feed generated student codes and card numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodesConfig {
    pub student_code_prefix: String,
    pub card_number_prefix: String,
    pub academic_year: i32,
}

pub fn codes_config(state: &AppState) -> anyhow::Result<CodesConfig> {
    let v = load_section(state.db.as_ref(), SetupSection::Codes)?;
    let text = |key: &str, fallback: &str| {
        v.get(key)
            .and_then(|x| x.as_str())
            .unwrap_or(fallback)
            .to_string()
    };
    Ok(CodesConfig {
        student_code_prefix: text("studentCodePrefix", "STU"),
        card_number_prefix: text("cardNumberPrefix", "ID"),
        academic_year: v
            .get("academicYear")
            .and_then(|x| x.as_i64())
            .and_then(|y| i32::try_from(y).ok())
            .unwrap_or_else(|| chrono::Local::now().year()),
    })
}

/// Configured export directory, if any.
pub fn exports_directory(state: &AppState) -> anyhow::Result<Option<PathBuf>> {
    let v = load_section(state.db.as_ref(), SetupSection::Exports)?;
    Ok(v.get("directory")
        .and_then(|d| d.as_str())
        .map(PathBuf::from))
}

fn handle_setup_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    let mut out = Map::new();
    for section in SetupSection::ALL {
        match load_section(state.db.as_ref(), section) {
            Ok(v) => {
                out.insert(section.name().to_string(), v);
            }
            Err(e) => return err(&req.id, "db_query_failed", e.to_string(), None),
        }
    }
    ok(&req.id, Value::Object(out))
}

fn handle_setup_update(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(conn) = state.db.as_ref() else {
        return err(&req.id, "no_workspace", "select a workspace first", None);
    };
    let Some(section_raw) = req.params.get("section").and_then(|v| v.as_str()) else {
        return err(&req.id, "bad_params", "missing section", None);
    };
    let Some(section) = SetupSection::parse(section_raw) else {
        return err(
            &req.id,
            "bad_params",
            "unknown section",
            Some(json!({ "section": section_raw })),
        );
    };
    let Some(patch_obj) = req.params.get("patch").and_then(|v| v.as_object()) else {
        return err(&req.id, "bad_params", "patch must be an object", None);
    };

    let mut current = match load_section(Some(conn), section) {
        Ok(v) => v,
        Err(e) => return err(&req.id, "db_query_failed", e.to_string(), None),
    };
    if let Err(msg) = merge_section_patch(section, &mut current, patch_obj) {
        return err(&req.id, "bad_params", msg, None);
    }
    if let Err(e) = db::settings_set_json(conn, section.key(), &current) {
        return err(&req.id, "db_update_failed", e.to_string(), None);
    }
    tracing::info!(section = section.name(), "setup updated");
    let mut result = json!({ "ok": true });
    result[section.name()] = current;
    ok(&req.id, result)
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "setup.get" => Some(handle_setup_get(state, req)),
        "setup.update" => Some(handle_setup_update(state, req)),
        _ => None,
    }
}
