use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

fn spawn_sidecar() -> (Child, ChildStdin, BufReader<ChildStdout>) {
    let exe = env!("CARGO_BIN_EXE_schoold");
    let mut child = Command::new(exe)
        .env_remove("SCHOOLD_WORKSPACE")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn schoold");
    let stdin = child.stdin.take().expect("child stdin");
    let stdout = child.stdout.take().expect("child stdout");
    (child, stdin, BufReader::new(stdout))
}

fn request(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let payload = json!({
        "id": id,
        "method": method,
        "params": params,
    });
    writeln!(stdin, "{}", payload).expect("write request");
    stdin.flush().expect("flush request");

    let mut line = String::new();
    reader.read_line(&mut line).expect("read response line");
    assert!(!line.trim().is_empty(), "empty response for {}", method);
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("parse response json");
    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some(id));
    value
}

fn request_ok(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let value = request(stdin, reader, id, method, params);
    assert_eq!(
        value.get("ok").and_then(|v| v.as_bool()),
        Some(true),
        "{} failed: {}",
        method,
        value
    );
    value.get("result").cloned().unwrap_or(serde_json::Value::Null)
}

fn error_code(value: &serde_json::Value) -> &str {
    value
        .get("error")
        .and_then(|e| e.get("code"))
        .and_then(|v| v.as_str())
        .unwrap_or("")
}

#[test]
fn student_record_detail_uses_tabs() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let closed = request_ok(&mut stdin, &mut reader, "1", "detail.get", json!({}));
    assert_eq!(closed["open"], false);

    let opened = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "detail.open",
        json!({ "view": "studentRecords", "id": "rec001" }),
    );
    assert_eq!(opened["open"], true);
    assert_eq!(opened["record"]["id"], "rec001");
    assert_eq!(opened["nav"]["kind"], "tabs");
    assert_eq!(opened["nav"]["activeTab"], "profile");
    assert_eq!(
        opened["nav"]["tabs"],
        json!(["profile", "academic", "documents", "courses", "disciplinary"])
    );

    let tab = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "detail.tab",
        json!({ "tab": "courses" }),
    );
    assert_eq!(tab["nav"]["activeTab"], "courses");

    let bad_tab = request(
        &mut stdin,
        &mut reader,
        "4",
        "detail.tab",
        json!({ "tab": "grades" }),
    );
    assert_eq!(error_code(&bad_tab), "bad_params");

    let closed = request_ok(&mut stdin, &mut reader, "5", "detail.close", json!({}));
    assert_eq!(closed["closed"], true);
    let reopened = request_ok(
        &mut stdin,
        &mut reader,
        "6",
        "detail.open",
        json!({ "view": "studentRecords", "id": "rec001" }),
    );
    assert_eq!(reopened["nav"]["activeTab"], "profile");

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn application_detail_pages_do_not_wrap() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let opened = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "detail.open",
        json!({ "view": "applications", "id": "app003" }),
    );
    assert_eq!(opened["nav"]["kind"], "pages");
    assert_eq!(opened["nav"]["page"], 1);
    assert_eq!(opened["nav"]["totalPages"], 2);
    assert_eq!(opened["nav"]["canPrev"], false);

    let back = request_ok(&mut stdin, &mut reader, "2", "detail.prev", json!({}));
    assert_eq!(back["moved"], false);
    assert_eq!(back["nav"]["page"], 1);

    let fwd = request_ok(&mut stdin, &mut reader, "3", "detail.next", json!({}));
    assert_eq!(fwd["moved"], true);
    assert_eq!(fwd["nav"]["page"], 2);
    assert_eq!(fwd["nav"]["canNext"], false);

    let past_end = request_ok(&mut stdin, &mut reader, "4", "detail.next", json!({}));
    assert_eq!(past_end["moved"], false);
    assert_eq!(past_end["nav"]["page"], 2);

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn detail_snapshot_changes_only_on_refresh() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "detail.open",
        json!({ "view": "payments", "id": "PAY004" }),
    );
    let _ = request_ok(&mut stdin, &mut reader, "2", "payments.reject", json!({ "id": "PAY004" }));

    let stale = request_ok(&mut stdin, &mut reader, "3", "detail.get", json!({}));
    assert_eq!(stale["record"]["status"], "pending");
    assert_eq!(stale["nav"]["kind"], "none");

    let fresh = request_ok(&mut stdin, &mut reader, "4", "detail.refresh", json!({}));
    assert_eq!(fresh["refreshed"], true);
    assert_eq!(fresh["record"]["status"], "rejected");

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn refresh_closes_detail_of_deleted_record() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "detail.open",
        json!({ "view": "announcements", "id": "ann-002" }),
    );
    let _ = request_ok(&mut stdin, &mut reader, "2", "announcements.delete", json!({ "id": "ann-002" }));
    let refreshed = request_ok(&mut stdin, &mut reader, "3", "detail.refresh", json!({}));
    assert_eq!(refreshed["open"], false);
    assert_eq!(refreshed["closed"], true);

    let unknown_view = request(
        &mut stdin,
        &mut reader,
        "4",
        "detail.open",
        json!({ "view": "timetable", "id": "x" }),
    );
    assert_eq!(error_code(&unknown_view), "bad_params");
    let unknown_id = request(
        &mut stdin,
        &mut reader,
        "5",
        "detail.open",
        json!({ "view": "payments", "id": "PAY404" }),
    );
    assert_eq!(error_code(&unknown_id), "not_found");
    let nav_without_open = request(&mut stdin, &mut reader, "6", "detail.next", json!({}));
    assert_eq!(error_code(&nav_without_open), "bad_params");

    drop(stdin);
    let _ = child.wait();
}
