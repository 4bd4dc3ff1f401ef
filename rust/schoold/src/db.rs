use rusqlite::{Connection, OptionalExtension};
use std::path::Path;

pub const DB_FILE: &str = "schoold.sqlite3";

pub fn open_db(workspace: &Path) -> anyhow::Result<Connection> {
    std::fs::create_dir_all(workspace)?;
    let db_path = workspace.join(DB_FILE);
    let conn = Connection::open(db_path)?;

    // One row per record; each collection is rewritten as a whole on change.
    conn.execute(
        "CREATE TABLE IF NOT EXISTS records(
            collection TEXT NOT NULL,
            id TEXT NOT NULL,
            sort_order INTEGER NOT NULL,
            body TEXT NOT NULL,
            updated_at TEXT,
            PRIMARY KEY(collection, sort_order)
        )",
        [],
    )?;
    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_records_collection_id ON records(collection, id)",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS settings(
            key TEXT PRIMARY KEY,
            value_json TEXT NOT NULL
        )",
        [],
    )?;

    Ok(conn)
}

pub fn settings_get_json(
    conn: &Connection,
    key: &str,
) -> anyhow::Result<Option<serde_json::Value>> {
    let raw: Option<String> = conn
        .query_row(
            "SELECT value_json FROM settings WHERE key = ?",
            [key],
            |r| r.get(0),
        )
        .optional()?;
    match raw {
        Some(s) => Ok(Some(serde_json::from_str(&s)?)),
        None => Ok(None),
    }
}

pub fn settings_set_json(
    conn: &Connection,
    key: &str,
    value: &serde_json::Value,
) -> anyhow::Result<()> {
    conn.execute(
        "INSERT INTO settings(key, value_json) VALUES(?, ?)
         ON CONFLICT(key) DO UPDATE SET value_json = excluded.value_json",
        (key, serde_json::to_string(value)?),
    )?;
    Ok(())
}

/// Record bodies of one collection in list order.
pub fn records_load(conn: &Connection, collection: &str) -> anyhow::Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT body FROM records WHERE collection = ? ORDER BY sort_order",
    )?;
    let rows = stmt
        .query_map([collection], |row| row.get::<_, String>(0))?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Replaces every row of `collection` with `rows` (`(id, body)` in list order).
pub fn records_replace(
    conn: &Connection,
    collection: &str,
    rows: &[(String, String)],
) -> anyhow::Result<()> {
    let updated_at = chrono::Utc::now().to_rfc3339();
    let tx = conn.unchecked_transaction()?;
    tx.execute("DELETE FROM records WHERE collection = ?", [collection])?;
    {
        let mut insert = tx.prepare(
            "INSERT INTO records(collection, id, sort_order, body, updated_at)
             VALUES(?, ?, ?, ?, ?)",
        )?;
        for (i, (id, body)) in rows.iter().enumerate() {
            insert.execute((collection, id, i as i64, body, &updated_at))?;
        }
    }
    tx.commit()?;
    Ok(())
}
