// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::env;
use std::path::PathBuf;

/// Default storage directory, relative to the working directory.
pub const DEFAULT_STORE_DIR: &str = "text_files";

/// Resolve the storage root with an optional override, falling back to
/// the TEXTOPS_DIR environment variable, then to [`DEFAULT_STORE_DIR`].
#[must_use]
pub fn get_store_root_with_override(override_path: Option<PathBuf>) -> PathBuf {
    if let Some(path) = override_path {
        return path;
    }

    env::var("TEXTOPS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_STORE_DIR))
}
