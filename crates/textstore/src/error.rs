// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

// Error types for store operations
use crate::name::FileName;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("file '{0}' does not exist")]
    NotFound(FileName),

    #[error("file '{0}' already exists")]
    AlreadyExists(FileName),

    #[error("invalid file name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    pub fn invalid_name<S: AsRef<str>>(name: S, reason: &'static str) -> Self {
        StoreError::InvalidName {
            name: name.as_ref().to_string(),
            reason,
        }
    }
}
