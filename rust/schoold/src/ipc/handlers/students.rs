use crate::codes;
use crate::domain::{
    StudentAdmission, StudentApplication, StudentIdCard, StudentPromotion, StudentRecord,
};
use crate::ipc::error::{respond, HandlerErr};
use crate::ipc::handlers::setup::{codes_config, CodesConfig};
use crate::ipc::helpers::{
    find, get_required_enum, get_required_str, get_result, list_result, today, transition_by_id,
};
use crate::ipc::types::{AppState, Request};
use crate::workflow::{CardAction, LetterAction, PromotionStatus, Review};
use serde_json::Value;

fn load_codes(state: &AppState) -> Result<CodesConfig, HandlerErr> {
    codes_config(state).map_err(|e| HandlerErr::new("db_query_failed", format!("{e:#}")))
}

fn admission_letter(
    state: &mut AppState,
    params: &Value,
    action: LetterAction,
) -> Result<Value, HandlerErr> {
    let stamp = today();
    transition_by_id(state, params, |r: &StudentAdmission| {
        r.apply_letter(action, &stamp)
    })
}

fn id_card_generate(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let cfg = load_codes(state)?;
    let number = codes::card_number(
        &cfg.card_number_prefix,
        cfg.academic_year,
        state
            .data
            .id_cards
            .iter()
            .filter_map(|c| c.card_number.as_deref()),
    );
    transition_by_id(state, params, move |r: &StudentIdCard| {
        r.apply(CardAction::Generate, move || number)
    })
}

fn application_approve(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let cfg = load_codes(state)?;
    let code = codes::student_code(
        &cfg.student_code_prefix,
        cfg.academic_year,
        state
            .data
            .applications
            .iter()
            .filter_map(|a| a.student_code.as_deref()),
    );
    transition_by_id(state, params, move |r: &StudentApplication| {
        r.review(Review::Approve, move || code)
    })
}

fn parse_module_list(params: &Value, key: &str) -> Result<Option<Vec<String>>, HandlerErr> {
    match params.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| {
                v.as_str()
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .ok_or_else(|| {
                        HandlerErr::bad_params(format!("{} must hold non-empty strings", key))
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Some),
        Some(_) => Err(HandlerErr::bad_params(format!("{} must be an array", key))),
    }
}

/// `{ id, status, retakeModules? }`. A conditional decision needs at least one
/// retake module, given here or already on the record.
fn promotions_decide(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let id = get_required_str(params, "id")?;
    let status = get_required_enum(params, "status", PromotionStatus::parse)?;
    let retake = parse_module_list(params, "retakeModules")?;

    if status == PromotionStatus::Conditional {
        if let Some(current) = find::<StudentPromotion>(state, &id) {
            let has_retakes = match retake.as_ref() {
                Some(list) => !list.is_empty(),
                None => !current.retake_modules.is_empty(),
            };
            if !has_retakes {
                return Err(HandlerErr::bad_params(
                    "conditional promotion requires retakeModules",
                ));
            }
        }
    }

    transition_by_id(state, params, move |r: &StudentPromotion| {
        Ok(r.decide(status, retake))
    })
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let p = &req.params;
    let result = match req.method.as_str() {
        "admissions.list" => list_result::<StudentAdmission>(state, p),
        "admissions.get" => get_result::<StudentAdmission>(state, p),
        "admissions.generateLetter" => admission_letter(state, p, LetterAction::Generate),
        "admissions.approveLetter" => admission_letter(state, p, LetterAction::Approve),
        "admissions.rejectLetter" => admission_letter(state, p, LetterAction::Reject),
        "admissions.uploadSigned" => {
            transition_by_id(state, p, |r: &StudentAdmission| r.upload_signed())
        }

        "idCards.list" => list_result::<StudentIdCard>(state, p),
        "idCards.get" => get_result::<StudentIdCard>(state, p),
        "idCards.generate" => id_card_generate(state, p),
        "idCards.print" => transition_by_id(state, p, |r: &StudentIdCard| {
            r.apply(CardAction::Print, String::new)
        }),
        "idCards.issue" => transition_by_id(state, p, |r: &StudentIdCard| {
            r.apply(CardAction::Issue, String::new)
        }),

        "applications.list" => list_result::<StudentApplication>(state, p),
        "applications.get" => get_result::<StudentApplication>(state, p),
        "applications.approve" => application_approve(state, p),
        "applications.reject" => transition_by_id(state, p, |r: &StudentApplication| {
            r.review(Review::Reject, String::new)
        }),

        "promotions.list" => list_result::<StudentPromotion>(state, p),
        "promotions.get" => get_result::<StudentPromotion>(state, p),
        "promotions.decide" => promotions_decide(state, p),

        "studentRecords.list" => list_result::<StudentRecord>(state, p),
        "studentRecords.get" => get_result::<StudentRecord>(state, p),
        _ => return None,
    };
    Some(respond(&req.id, result))
}
