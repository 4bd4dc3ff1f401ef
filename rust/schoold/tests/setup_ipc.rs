use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_dir(prefix: &str) -> PathBuf {
    let p = std::env::temp_dir().join(format!(
        "{}-{}",
        prefix,
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos()
    ));
    std::fs::create_dir_all(&p).expect("create temp dir");
    p
}

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
fn setup_defaults_without_workspace() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let setup = request_ok(&mut stdin, &mut reader, "1", "setup.get", json!({}));
    assert_eq!(setup["codes"]["studentCodePrefix"], "STU");
    assert_eq!(setup["codes"]["cardNumberPrefix"], "ID");
    assert!(setup["codes"]["academicYear"].as_i64().is_some());
    assert!(setup["exports"]["directory"].is_null());

    let refused = request(
        &mut stdin,
        &mut reader,
        "2",
        "setup.update",
        json!({ "section": "codes", "patch": { "academicYear": 2030 } }),
    );
    assert_eq!(error_code(&refused), "no_workspace");

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn codes_section_drives_generated_codes() {
    let workspace = temp_dir("schoold-setup");
    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    );

    let updated = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "setup.update",
        json!({
            "section": "codes",
            "patch": { "studentCodePrefix": "reg", "academicYear": 2024, "cardNumberPrefix": "SC" }
        }),
    );
    assert_eq!(updated["codes"]["studentCodePrefix"], "REG");

    let approved = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "applications.approve",
        json!({ "id": "app003" }),
    );
    assert_eq!(approved["record"]["studentCode"], "REG/2024/0001");

    let card = request_ok(
        &mut stdin,
        &mut reader,
        "4",
        "idCards.generate",
        json!({ "id": "card001" }),
    );
    assert_eq!(card["record"]["cardNumber"], "SC-2024-0001");

    let out_of_range = request(
        &mut stdin,
        &mut reader,
        "5",
        "setup.update",
        json!({ "section": "codes", "patch": { "academicYear": 1999 } }),
    );
    assert_eq!(error_code(&out_of_range), "bad_params");

    let unknown_field = request(
        &mut stdin,
        &mut reader,
        "6",
        "setup.update",
        json!({ "section": "exports", "patch": { "format": "csv" } }),
    );
    assert_eq!(error_code(&unknown_field), "bad_params");

    let unknown_section = request(
        &mut stdin,
        &mut reader,
        "7",
        "setup.update",
        json!({ "section": "printer", "patch": {} }),
    );
    assert_eq!(error_code(&unknown_section), "bad_params");

    let reread = request_ok(&mut stdin, &mut reader, "8", "setup.get", json!({}));
    assert_eq!(reread["codes"]["academicYear"], 2024);

    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_dir_all(workspace);
}

#[test]
fn exports_directory_setting_is_used_by_export() {
    let workspace = temp_dir("schoold-setup-exports");
    let target = workspace.join("custom-out");
    let (mut child, mut stdin, mut reader) = spawn_sidecar();
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    );
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "setup.update",
        json!({ "section": "exports", "patch": { "directory": target.to_string_lossy() } }),
    );
    let exported = request_ok(&mut stdin, &mut reader, "3", "exams.export", json!({}));
    let file_name = exported["fileName"].as_str().expect("fileName");
    assert!(target.join(file_name).is_file());

    drop(stdin);
    let _ = child.wait();
    let _ = std::fs::remove_dir_all(workspace);
}
