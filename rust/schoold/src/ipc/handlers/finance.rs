use crate::codes;
use crate::domain::{ClearanceRequest, ClearanceType, FeeCategory, Invoice, Payment};
use crate::ipc::error::{respond, HandlerErr};
use crate::ipc::helpers::{
    append, get_optional_date, get_required_amount, get_required_date, get_required_enum,
    get_required_str, get_result, list_result, today, transition_by_id,
};
use crate::ipc::types::{AppState, Request};
use crate::workflow::{ApprovalStatus, InvoiceAction, InvoiceStatus, PaymentStatus, Review};
use serde_json::{json, Value};

fn payments_list(state: &AppState, params: &Value) -> Result<Value, HandlerErr> {
    let mut result = list_result::<Payment>(state, params)?;
    let (completed, pending) =
        state
            .data
            .payments
            .iter()
            .fold((0.0, 0.0), |(c, p), pay| match pay.status {
                PaymentStatus::Completed => (c + pay.amount, p),
                PaymentStatus::Pending => (c, p + pay.amount),
                PaymentStatus::Rejected => (c, p),
            });
    result["completedAmount"] = json!(completed);
    result["pendingAmount"] = json!(pending);
    Ok(result)
}

fn payments_record(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let student_name = get_required_str(params, "studentName")?;
    let student_code = get_required_str(params, "studentCode")?;
    let amount = get_required_amount(params, "amount")?;
    let category = get_required_enum(params, "category", FeeCategory::parse)?;
    let method = get_required_str(params, "method")?;
    let date = match get_optional_date(params, "date")? {
        Some(d) => d.to_string(),
        None => today(),
    };

    let id = codes::sequential_id("PAY", state.data.payments.iter().map(|p| p.id.as_str()));
    append(
        state,
        Payment {
            id,
            student_name,
            student_code,
            amount,
            category,
            method,
            date,
            status: PaymentStatus::Pending,
        },
    )
}

fn invoices_create(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let student_name = get_required_str(params, "studentName")?;
    let student_code = get_required_str(params, "studentCode")?;
    let amount = get_required_amount(params, "amount")?;
    let category = get_required_enum(params, "category", FeeCategory::parse)?;
    let due = get_required_date(params, "dueDate")?;
    let issue = get_optional_date(params, "issueDate")?
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    if due < issue {
        return Err(HandlerErr::bad_params("dueDate must not precede issueDate"));
    }
    let (issue_date, due_date) = (issue.to_string(), due.to_string());

    let id = codes::sequential_id("INV", state.data.invoices.iter().map(|i| i.id.as_str()));
    append(
        state,
        Invoice {
            id,
            student_name,
            student_code,
            amount,
            category,
            issue_date,
            due_date,
            status: InvoiceStatus::Pending,
        },
    )
}

fn clearances_submit(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let student_name = get_required_str(params, "studentName")?;
    let student_code = get_required_str(params, "studentCode")?;
    let program = get_required_str(params, "program")?;
    let clearance_type = get_required_enum(params, "clearanceType", ClearanceType::parse)?;
    let outstanding_balance = match params.get("outstandingBalance") {
        None | Some(Value::Null) => 0.0,
        Some(v) => v
            .as_f64()
            .filter(|n| n.is_finite() && *n >= 0.0)
            .ok_or_else(|| HandlerErr::bad_params("outstandingBalance must be >= 0"))?,
    };

    let id = codes::sequential_id("CLR", state.data.clearances.iter().map(|c| c.id.as_str()));
    append(
        state,
        ClearanceRequest {
            id,
            student_name,
            student_code,
            program,
            clearance_type,
            request_date: today(),
            outstanding_balance,
            status: ApprovalStatus::Pending,
        },
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let p = &req.params;
    let result = match req.method.as_str() {
        "payments.list" => payments_list(state, p),
        "payments.get" => get_result::<Payment>(state, p),
        "payments.record" => payments_record(state, p),
        "payments.approve" => {
            transition_by_id(state, p, |r: &Payment| r.review(Review::Approve))
        }
        "payments.reject" => transition_by_id(state, p, |r: &Payment| r.review(Review::Reject)),

        "invoices.list" => list_result::<Invoice>(state, p),
        "invoices.get" => get_result::<Invoice>(state, p),
        "invoices.create" => invoices_create(state, p),
        "invoices.markPaid" => {
            transition_by_id(state, p, |r: &Invoice| r.apply(InvoiceAction::MarkPaid))
        }
        "invoices.cancel" => {
            transition_by_id(state, p, |r: &Invoice| r.apply(InvoiceAction::Cancel))
        }

        "clearances.list" => list_result::<ClearanceRequest>(state, p),
        "clearances.get" => get_result::<ClearanceRequest>(state, p),
        "clearances.submit" => clearances_submit(state, p),
        "clearances.approve" => transition_by_id(state, p, |r: &ClearanceRequest| {
            r.review(Review::Approve)
        }),
        "clearances.reject" => transition_by_id(state, p, |r: &ClearanceRequest| {
            r.review(Review::Reject)
        }),
        _ => return None,
    };
    Some(respond(&req.id, result))
}
