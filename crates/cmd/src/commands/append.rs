// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::Result;

use diagnostics::log_debug;
use textstore::{Request, TextStore, legacy_status};

/// Append a line of content to an existing file.
pub async fn append_command(root: &Path, name: &str, content: &str) -> Result<String> {
    log_debug!("Appending to file {name} under {root}",
        name: name,
        root: root.display().to_string());

    let store = TextStore::open(root)?;
    let result = store
        .apply(Request::AppendToFile {
            filename: name.to_string(),
            content: content.to_string(),
        })
        .await;

    Ok(legacy_status(result)?)
}
