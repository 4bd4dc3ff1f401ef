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
fn report_types_and_previews() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let types = request_ok(&mut stdin, &mut reader, "1", "reports.types", json!({}));
    let kinds: Vec<&str> = types["types"]
        .as_array()
        .expect("types")
        .iter()
        .filter_map(|t| t["type"].as_str())
        .collect();
    assert_eq!(
        kinds,
        ["enrollment", "fees", "performance", "attendance", "clearance"]
    );

    for kind in &kinds {
        let p = request_ok(
            &mut stdin,
            &mut reader,
            &format!("p-{kind}"),
            "reports.preview",
            json!({ "type": kind }),
        );
        let headers = p["preview"]["headers"].as_array().expect("headers").len();
        assert!(headers > 0);
        for row in p["preview"]["rows"].as_array().expect("rows") {
            assert_eq!(row.as_array().map(|r| r.len()), Some(headers), "{kind}");
        }
    }

    let none = request_ok(&mut stdin, &mut reader, "2", "reports.preview", json!({}));
    assert!(none["preview"].is_null());
    let unknown = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "reports.preview",
        json!({ "type": "payroll" }),
    );
    assert!(unknown["preview"].is_null());

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn generate_requires_known_type() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let missing = request(&mut stdin, &mut reader, "1", "reports.generate", json!({}));
    assert_eq!(error_code(&missing), "bad_params");

    let unknown = request(
        &mut stdin,
        &mut reader,
        "2",
        "reports.generate",
        json!({ "type": "payroll" }),
    );
    assert_eq!(error_code(&unknown), "not_found");

    let fees = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "reports.generate",
        json!({ "type": "fees" }),
    );
    assert_eq!(fees["type"], "fees");
    assert!(fees["generatedAt"].as_str().unwrap_or("").ends_with('Z'));
    assert_eq!(fees["preview"]["kind"], "fees");

    drop(stdin);
    let _ = child.wait();
}
