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
fn approving_application_assigns_student_code() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let approved = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "applications.approve",
        json!({ "id": "app003" }),
    );
    assert_eq!(approved["outcome"], "applied");
    assert_eq!(approved["record"]["status"], "approved");
    let code = approved["record"]["studentCode"].as_str().unwrap_or("");
    assert!(code.starts_with("STU/"), "unexpected code {code}");
    assert_eq!(code.rsplit('/').next().map(|s| s.len()), Some(4));

    let rejected = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "applications.reject",
        json!({ "id": "app003" }),
    );
    assert_eq!(rejected["outcome"], "illegal_transition");
    assert_eq!(rejected["from"], "approved");

    let summary = request_ok(&mut stdin, &mut reader, "3", "applications.list", json!({}));
    assert_eq!(summary["summary"]["approved"], 2);
    assert!(summary["summary"].get("pending").is_none());

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn admission_letter_flow_and_signed_upload_gate() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let early = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "admissions.uploadSigned",
        json!({ "id": "adm001" }),
    );
    assert_eq!(early["outcome"], "illegal_transition");
    assert_eq!(early["from"], "not_generated");

    let generated = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "admissions.generateLetter",
        json!({ "id": "adm001" }),
    );
    assert_eq!(generated["record"]["letterStatus"], "generated");
    let stamp = generated["record"]["letterGeneratedAt"].as_str().unwrap_or("");
    assert_eq!(stamp.len(), 10, "YYYY-MM-DD expected, got {stamp}");

    let approved = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "admissions.approveLetter",
        json!({ "id": "adm001" }),
    );
    assert_eq!(approved["record"]["letterStatus"], "approved");
    assert!(approved["record"]["letterApprovedAt"].is_string());

    let uploaded = request_ok(
        &mut stdin,
        &mut reader,
        "4",
        "admissions.uploadSigned",
        json!({ "id": "adm001" }),
    );
    assert_eq!(uploaded["record"]["signedLetterUploaded"], true);

    let reject_terminal = request_ok(
        &mut stdin,
        &mut reader,
        "5",
        "admissions.rejectLetter",
        json!({ "id": "adm001" }),
    );
    assert_eq!(reject_terminal["applied"], false);

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn id_cards_follow_linear_lifecycle() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let print_first = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "idCards.print",
        json!({ "id": "card001" }),
    );
    assert_eq!(print_first["outcome"], "illegal_transition");
    assert_eq!(print_first["from"], "not_generated");

    let generated = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "idCards.generate",
        json!({ "id": "card001" }),
    );
    assert_eq!(generated["record"]["status"], "generated");
    let number = generated["record"]["cardNumber"].as_str().unwrap_or("");
    assert!(number.starts_with("ID-"), "unexpected card number {number}");

    for (i, (method, status)) in [("idCards.print", "printed"), ("idCards.issue", "issued")]
        .iter()
        .enumerate()
    {
        let r = request_ok(
            &mut stdin,
            &mut reader,
            &format!("3-{i}"),
            method,
            json!({ "id": "card001" }),
        );
        assert_eq!(r["record"]["status"], *status);
        assert_eq!(r["record"]["cardNumber"], number);
    }

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn promotion_decisions_keep_module_lists_consistent() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let promoted = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "promotions.decide",
        json!({ "id": "prom002", "status": "promoted" }),
    );
    assert_eq!(promoted["record"]["status"], "promoted");
    assert_eq!(promoted["record"]["retakeModules"], json!([]));

    let no_retakes = request(
        &mut stdin,
        &mut reader,
        "2",
        "promotions.decide",
        json!({ "id": "prom002", "status": "conditional" }),
    );
    assert_eq!(error_code(&no_retakes), "bad_params");

    let conditional = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "promotions.decide",
        json!({ "id": "prom002", "status": "conditional", "retakeModules": ["BBA 1104"] }),
    );
    assert_eq!(conditional["record"]["retakeModules"], json!(["BBA 1104"]));

    let held_back = request_ok(
        &mut stdin,
        &mut reader,
        "4",
        "promotions.decide",
        json!({ "id": "prom002", "status": "not_promoted" }),
    );
    assert_eq!(held_back["record"]["allowedModules"], json!([]));
    assert_eq!(held_back["record"]["retakeModules"], json!(["BBA 1104"]));

    let unknown = request(
        &mut stdin,
        &mut reader,
        "5",
        "promotions.decide",
        json!({ "id": "prom002", "status": "graduated" }),
    );
    assert_eq!(error_code(&unknown), "bad_params");

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn student_records_filter_by_fee_standing() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let all = request_ok(&mut stdin, &mut reader, "1", "studentRecords.list", json!({}));
    let total = all["total"].as_u64().expect("total");
    let owing = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "studentRecords.list",
        json!({ "filters": { "fees": "owing" } }),
    );
    let cleared = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "studentRecords.list",
        json!({ "filters": { "fees": "cleared" } }),
    );
    assert_eq!(
        owing["matched"].as_u64().unwrap_or(0) + cleared["matched"].as_u64().unwrap_or(0),
        total
    );

    let missing = request(
        &mut stdin,
        &mut reader,
        "4",
        "studentRecords.get",
        json!({ "id": "rec999" }),
    );
    assert_eq!(error_code(&missing), "not_found");

    drop(stdin);
    let _ = child.wait();
}
