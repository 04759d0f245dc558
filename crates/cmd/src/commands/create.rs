// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::Result;

use diagnostics::log_debug;
use textstore::{Request, TextStore, legacy_status};

/// Create a new text file, reporting the outcome as a status line.
pub async fn create_command(root: &Path, name: &str, content: &str) -> Result<String> {
    log_debug!("Creating file {name} under {root}",
        name: name,
        root: root.display().to_string());

    let store = TextStore::open(root)?;
    let result = store
        .apply(Request::CreateFile {
            filename: name.to_string(),
            content: content.to_string(),
        })
        .await;

    Ok(legacy_status(result)?)
}
