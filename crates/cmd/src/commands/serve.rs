// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Line-delimited JSON dispatch host.
//!
//! Each line on stdin is one operation request, tagged by operation
//! name (see [`textstore::Request`]). Each response is one JSON object
//! per line on stdout: `{"result": ...}` carries the legacy status
//! string or file content, `{"error": ...}` carries malformed requests,
//! rejected names, and I/O faults. The loop runs until EOF.

use std::path::Path;

use anyhow::Result;
use serde_json::json;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use diagnostics::{log_debug, log_info, log_warn};
use textstore::{Request, TextStore, legacy_status};

/// Handle one request line, producing the JSON response value.
pub async fn handle_line(store: &TextStore, line: &str) -> serde_json::Value {
    let request: Request = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(err) => {
            log_warn!("Malformed request: {err}", #[emit::as_display] err: err.to_string());
            return json!({ "error": format!("malformed request: {err}") });
        }
    };

    log_debug!("Dispatching {op}", op: request.op_name());

    match legacy_status(store.apply(request).await) {
        Ok(status) => json!({ "result": status }),
        Err(err) => {
            log_warn!("Operation failed: {err}", #[emit::as_display] err: err.to_string());
            json!({ "error": err.to_string() })
        }
    }
}

/// Serve operations over stdin/stdout until EOF.
pub async fn serve_command(root: &Path) -> Result<()> {
    let store = TextStore::open(root)?;

    log_info!("Serving text operations from {root}",
        root: store.root().display().to_string());

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();
    let mut lines = stdin.lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let response = handle_line(&store, &line).await;
        let mut encoded = serde_json::to_string(&response)?;
        encoded.push('\n');
        stdout.write_all(encoded.as_bytes()).await?;
        stdout.flush().await?;
    }

    log_info!("Input closed, shutting down");
    Ok(())
}
