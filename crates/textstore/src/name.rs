// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Validated logical names.
//!
//! Callers address files by a bare name without extension. The storage
//! name is `<name>.txt`, and the name must be a single safe path
//! component: resolution never happens by raw string concatenation, so
//! a hostile name cannot escape the storage root.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::{Result, StoreError};

/// Extension applied to every stored file.
pub const STORAGE_EXTENSION: &str = "txt";

/// A validated logical name for one stored text file.
///
/// Displays as the storage name (`<name>.txt`), the form used in every
/// status message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FileName(String);

impl FileName {
    /// Validate a caller-supplied logical name.
    ///
    /// Rejects empty names, names containing path separators or NUL,
    /// and the `.` / `..` components.
    pub fn new<S: AsRef<str>>(name: S) -> Result<Self> {
        let name = name.as_ref();

        if name.is_empty() {
            return Err(StoreError::invalid_name(name, "name is empty"));
        }
        if name.contains('/') || name.contains('\\') {
            return Err(StoreError::invalid_name(
                name,
                "name must not contain path separators",
            ));
        }
        if name.contains('\0') {
            return Err(StoreError::invalid_name(
                name,
                "name must not contain NUL",
            ));
        }
        if name == "." || name == ".." {
            return Err(StoreError::invalid_name(
                name,
                "name must not be a directory component",
            ));
        }

        Ok(FileName(name.to_string()))
    }

    /// The logical name as supplied by the caller, without extension.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The on-disk file name, `<name>.txt`.
    #[must_use]
    pub fn storage_name(&self) -> String {
        format!("{}.{}", self.0, STORAGE_EXTENSION)
    }

    /// The full storage path under `root`.
    #[must_use]
    pub fn resolve(&self, root: &Path) -> PathBuf {
        root.join(self.storage_name())
    }
}

impl fmt::Display for FileName {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}", self.0, STORAGE_EXTENSION)
    }
}
