// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::Result;

use diagnostics::log_debug;
use textstore::{Request, TextStore, legacy_status};

/// Read the complete content of a file.
///
/// The returned string is either the file content or the legacy
/// "does not exist" status line.
pub async fn read_command(root: &Path, name: &str) -> Result<String> {
    log_debug!("Reading file {name} under {root}",
        name: name,
        root: root.display().to_string());

    let store = TextStore::open(root)?;
    let result = store
        .apply(Request::ReadFile {
            filename: name.to_string(),
        })
        .await;

    Ok(legacy_status(result)?)
}
