mod backup;
mod codes;
mod db;
mod detail;
mod domain;
mod export;
mod filter;
mod ipc;
mod logging;
mod reports;
mod seed;
mod store;
mod workflow;

use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "School administration sidecar (JSON lines over stdio)")]
struct Args {
    /// Workspace directory to open at startup.
    #[arg(long, env = "SCHOOLD_WORKSPACE")]
    workspace: Option<PathBuf>,

    /// tracing filter directive, e.g. `debug` or `schoold=trace`.
    #[arg(long, env = "SCHOOLD_LOG", default_value = "info")]
    log_filter: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::initialize(&args.log_filter)?;

    let mut state = ipc::AppState::new();
    if let Some(path) = args.workspace.as_deref() {
        if let Err(e) = ipc::select_workspace(&mut state, path) {
            tracing::warn!(error = %format!("{e:#}"), "startup workspace not opened; running in memory");
        }
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "schoold ready");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(v) => v,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: ipc::Request = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                // Can't reply without id.
                tracing::warn!(error = %e, "bad request line");
                let reply = serde_json::json!({
                    "ok": false,
                    "error": { "code": "bad_json", "message": e.to_string() },
                });
                let _ = writeln!(stdout, "{}", reply);
                let _ = stdout.flush();
                continue;
            }
        };

        let resp = ipc::handle_request(&mut state, req);
        let _ = writeln!(
            stdout,
            "{}",
            serde_json::to_string(&resp).unwrap_or_else(|_| "{\"ok\":false}".to_string())
        );
        let _ = stdout.flush();
    }

    tracing::info!("stdin closed; exiting");
    Ok(())
}
