use crate::domain::{ExamMonitoring, ExamStats, IntegrityAlert, Severity, StudentParticipation};
use crate::export::MonitoringReport;
use crate::ipc::error::{respond, HandlerErr};
use crate::ipc::handlers::setup::exports_directory;
use crate::ipc::helpers::{
    append, commit, find, finish_transition, get_optional_str, get_required_bool,
    get_required_enum, get_required_str, get_result, list_result, now_iso, to_json,
    transition_by_id,
};
use crate::ipc::types::{AppState, Request};
use crate::workflow::{self, ExamAction, ParticipationEvent};
use serde_json::{json, Value};
use std::path::PathBuf;

/// Keeps an exam's header counts in line with its participant rows.
fn recount_exam(state: &mut AppState, exam_id: &str) -> Result<(), HandlerErr> {
    let participants = &state.data.participation;
    let exams: Vec<ExamMonitoring> = state
        .data
        .exams
        .iter()
        .map(|e| {
            if e.id == exam_id {
                e.with_counts(participants)
            } else {
                e.clone()
            }
        })
        .collect();
    if exams == state.data.exams {
        return Ok(());
    }
    commit(state, exams)
}

/// `{ id, event: "join" | "disconnect" | "submit" }`
fn participants_update(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let id = get_required_str(params, "id")?;
    let event = get_required_enum(params, "event", ParticipationEvent::parse)?;
    let seen_at = now_iso();
    let t = workflow::transition(&state.data.participation, &id, |r: &StudentParticipation| {
        r.apply(event, &seen_at)
    });
    let exam_id = t.record().map(|r| r.exam_id.clone());
    let reply = finish_transition(state, &id, t)?;
    if let Some(exam_id) = exam_id {
        recount_exam(state, &exam_id)?;
    }
    Ok(reply)
}

fn participants_flag(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let flagged = get_required_bool(params, "flagged")?;
    transition_by_id(state, params, move |r: &StudentParticipation| {
        Ok(r.set_flag(flagged))
    })
}

fn alerts_raise(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let exam_id = get_required_str(params, "examId")?;
    let student_code = get_required_str(params, "studentCode")?;
    let message = get_required_str(params, "message")?;
    let severity = get_required_enum(params, "severity", Severity::parse)?;
    if find::<ExamMonitoring>(state, &exam_id).is_none() {
        return Err(HandlerErr::not_found("exam not found")
            .with_details(json!({ "examId": exam_id })));
    }

    append(
        state,
        IntegrityAlert {
            id: uuid::Uuid::new_v4().to_string(),
            exam_id,
            student_code,
            message,
            severity,
            raised_at: now_iso(),
        },
    )
}

fn stats(state: &AppState) -> Result<Value, HandlerErr> {
    let s = ExamStats::collect(
        &state.data.exams,
        &state.data.participation,
        &state.data.alerts,
    );
    to_json(&s)
}

fn export_dir(state: &AppState, params: &Value) -> Result<PathBuf, HandlerErr> {
    if let Some(dir) = get_optional_str(params, "outDir") {
        return Ok(PathBuf::from(dir));
    }
    let configured = exports_directory(state)
        .map_err(|e| HandlerErr::new("db_query_failed", format!("{e:#}")))?;
    if let Some(dir) = configured {
        return Ok(dir);
    }
    match state.workspace.as_ref() {
        Some(ws) => Ok(ws.join("exports")),
        None => Err(HandlerErr::no_workspace()
            .with_details(json!({ "hint": "pass outDir or select a workspace" }))),
    }
}

fn export(state: &AppState, params: &Value) -> Result<Value, HandlerErr> {
    let dir = export_dir(state, params)?;
    let report = MonitoringReport::new(
        &state.data.exams,
        &state.data.participation,
        &state.data.alerts,
        chrono::Utc::now(),
    );
    let path = report
        .write_to(&dir)
        .map_err(|e| HandlerErr::new("io_failed", format!("{e:#}")))?;
    tracing::info!(path = %path.display(), "exam monitoring report exported");
    Ok(json!({
        "path": path.to_string_lossy(),
        "fileName": report.file_name(),
        "generatedAt": report.generated_at,
        "stats": to_json(&report.stats)?,
    }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let p = &req.params;
    let result = match req.method.as_str() {
        "exams.list" => list_result::<ExamMonitoring>(state, p),
        "exams.get" => get_result::<ExamMonitoring>(state, p),
        "exams.start" => {
            transition_by_id(state, p, |r: &ExamMonitoring| r.apply(ExamAction::Start))
        }
        "exams.end" => transition_by_id(state, p, |r: &ExamMonitoring| r.apply(ExamAction::End)),

        "exams.participants.list" => list_result::<StudentParticipation>(state, p),
        "exams.participants.update" => participants_update(state, p),
        "exams.participants.flag" => participants_flag(state, p),

        "exams.alerts.list" => list_result::<IntegrityAlert>(state, p),
        "exams.alerts.raise" => alerts_raise(state, p),

        "exams.stats" => stats(state),
        "exams.export" => export(state, p),
        _ => return None,
    };
    Some(respond(&req.id, result))
}
