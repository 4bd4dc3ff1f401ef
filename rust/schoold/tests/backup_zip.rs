#[path = "../src/db.rs"]
mod db;
#[path = "../src/backup.rs"]
mod backup;

use std::fs::File;
use std::io::{Read, Write};
use std::path::PathBuf;
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

#[test]
fn zip_export_and_import_roundtrip() {
    let workspace = temp_dir("schoold-backup-src");
    let workspace2 = temp_dir("schoold-backup-dst");
    let out_dir = temp_dir("schoold-backup-out");

    let db_src = workspace.join(db::DB_FILE);
    let bytes = b"sqlite-test-payload";
    std::fs::write(&db_src, bytes).expect("write source db");

    let bundle_path = out_dir.join("workspace.schoold.zip");
    let export = backup::export_workspace_bundle(&workspace, &bundle_path).expect("export bundle");
    assert_eq!(export.bundle_format, backup::BUNDLE_FORMAT_V1);
    assert_eq!(export.entry_count, 2);
    assert_eq!(export.db_sha256.len(), 64);

    let f = File::open(&bundle_path).expect("open bundle");
    let mut archive = zip::ZipArchive::new(f).expect("open zip archive");
    let mut manifest = String::new();
    archive
        .by_name("manifest.json")
        .expect("manifest entry")
        .read_to_string(&mut manifest)
        .expect("read manifest");
    assert!(manifest.contains(backup::BUNDLE_FORMAT_V1));
    assert!(manifest.contains(&export.db_sha256));
    archive
        .by_name("db/schoold.sqlite3")
        .expect("database entry in bundle");

    let import = backup::import_workspace_bundle(&bundle_path, &workspace2).expect("import bundle");
    assert_eq!(import.bundle_format_detected, backup::BUNDLE_FORMAT_V1);
    assert_eq!(import.db_sha256, export.db_sha256);

    let restored = std::fs::read(workspace2.join(db::DB_FILE)).expect("read restored db");
    assert_eq!(restored, bytes);

    let _ = std::fs::remove_dir_all(workspace);
    let _ = std::fs::remove_dir_all(workspace2);
    let _ = std::fs::remove_dir_all(out_dir);
}

#[test]
fn import_rejects_checksum_mismatch_and_keeps_existing_db() {
    let workspace = temp_dir("schoold-backup-tamper");
    let out_dir = temp_dir("schoold-backup-tamper-out");
    let existing = workspace.join(db::DB_FILE);
    std::fs::write(&existing, b"keep-me").expect("write existing db");

    let bundle_path = out_dir.join("tampered.zip");
    {
        let f = File::create(&bundle_path).expect("create bundle");
        let mut zip = zip::ZipWriter::new(f);
        let opts = zip::write::FileOptions::default();
        zip.start_file("manifest.json", opts).expect("manifest");
        zip.write_all(
            serde_json::json!({
                "format": backup::BUNDLE_FORMAT_V1,
                "dbSha256": "0000000000000000000000000000000000000000000000000000000000000000"
            })
            .to_string()
            .as_bytes(),
        )
        .expect("write manifest");
        zip.start_file("db/schoold.sqlite3", opts).expect("db entry");
        zip.write_all(b"not-the-original").expect("write db");
        zip.finish().expect("finish");
    }

    let err = backup::import_workspace_bundle(&bundle_path, &workspace)
        .expect_err("tampered bundle must be refused");
    assert!(err.to_string().contains("checksum mismatch"), "{err}");
    assert_eq!(std::fs::read(&existing).expect("read db"), b"keep-me");

    let _ = std::fs::remove_dir_all(workspace);
    let _ = std::fs::remove_dir_all(out_dir);
}

#[test]
fn import_rejects_plain_files() {
    let workspace = temp_dir("schoold-backup-plain");
    let plain = workspace.join("notes.txt");
    std::fs::write(&plain, b"hello world").expect("write plain file");

    let err = backup::import_workspace_bundle(&plain, &workspace)
        .expect_err("plain file is not a bundle");
    assert!(err.to_string().contains("not a workspace bundle"), "{err}");

    let _ = std::fs::remove_dir_all(workspace);
}
