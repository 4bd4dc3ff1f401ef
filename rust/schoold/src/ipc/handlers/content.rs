use crate::domain::{Announcement, Audience, MediaType, Priority, Resource};
use crate::ipc::error::{respond, HandlerErr};
use crate::ipc::helpers::{
    append, delete_by_id, get_required_enum, get_required_str, get_result, list_result, now_iso,
    today, transition_by_id,
};
use crate::ipc::types::{AppState, Request};
use crate::workflow::{ApprovalStatus, PublishStatus, Review};
use serde_json::Value;

fn announcements_create(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let title = get_required_str(params, "title")?;
    let body = get_required_str(params, "body")?;
    let audience = get_required_enum(params, "audience", Audience::parse)?;
    let priority = match params.get("priority") {
        None | Some(Value::Null) => Priority::Medium,
        Some(_) => get_required_enum(params, "priority", Priority::parse)?,
    };
    let publish = match params.get("publish") {
        None | Some(Value::Null) => false,
        Some(v) => v
            .as_bool()
            .ok_or_else(|| HandlerErr::bad_params("publish must be boolean"))?,
    };

    append(
        state,
        Announcement {
            id: uuid::Uuid::new_v4().to_string(),
            title,
            body,
            audience,
            priority,
            created_at: today(),
            status: if publish {
                PublishStatus::Published
            } else {
                PublishStatus::Draft
            },
        },
    )
}

fn resources_upload(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let file_name = get_required_str(params, "fileName")?;
    let course = get_required_str(params, "course")?;
    let teacher = get_required_str(params, "teacher")?;
    let size_bytes = match params.get("sizeBytes") {
        None | Some(Value::Null) => 0,
        Some(v) => v
            .as_u64()
            .ok_or_else(|| HandlerErr::bad_params("sizeBytes must be a non-negative integer"))?,
    };

    append(
        state,
        Resource {
            id: uuid::Uuid::new_v4().to_string(),
            media_type: MediaType::from_file_name(&file_name),
            file_name,
            size_bytes,
            course,
            teacher,
            uploaded_at: now_iso(),
            status: ApprovalStatus::Pending,
        },
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let p = &req.params;
    let result = match req.method.as_str() {
        "announcements.list" => list_result::<Announcement>(state, p),
        "announcements.get" => get_result::<Announcement>(state, p),
        "announcements.create" => announcements_create(state, p),
        "announcements.publish" => transition_by_id(state, p, |r: &Announcement| r.publish()),
        "announcements.delete" => delete_by_id::<Announcement>(state, p),

        "resources.list" => list_result::<Resource>(state, p),
        "resources.get" => get_result::<Resource>(state, p),
        "resources.upload" => resources_upload(state, p),
        "resources.approve" => {
            transition_by_id(state, p, |r: &Resource| r.review(Review::Approve))
        }
        "resources.reject" => transition_by_id(state, p, |r: &Resource| r.review(Review::Reject)),
        "resources.delete" => delete_by_id::<Resource>(state, p),
        _ => return None,
    };
    Some(respond(&req.id, result))
}
