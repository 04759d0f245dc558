// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Legacy wire status rendering.
//!
//! Existing callers of the dispatch transport receive every outcome as a
//! single string: success confirmations, file content, and the two
//! checked preconditions (missing file, already-existing file) are all
//! prose. This module renders the typed results of [`crate::TextStore`]
//! into that contract, byte-for-byte.
//!
//! Only `NotFound` and `AlreadyExists` fold into status strings. Invalid
//! names and underlying I/O faults stay errors and travel on the
//! transport's error channel instead.

use crate::error::StoreError;
use crate::ops::Reply;

/// Render a typed operation result into the legacy status contract.
pub fn legacy_status(result: Result<Reply, StoreError>) -> Result<String, StoreError> {
    match result {
        Ok(Reply::Created(name)) => Ok(format!("File '{name}' created successfully.")),
        Ok(Reply::Appended(name)) => Ok(format!("Appended content to '{name}'.")),
        Ok(Reply::Content(content)) => Ok(content),
        Ok(Reply::Deleted(name)) => Ok(format!("File '{name}' has been deleted.")),
        Err(StoreError::NotFound(name)) => Ok(format!("File '{name}' does not exist.")),
        Err(StoreError::AlreadyExists(name)) => Ok(format!("File '{name}' already exists.")),
        Err(other) => Err(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::name::FileName;

    fn notes() -> FileName {
        FileName::new("notes").unwrap()
    }

    #[test]
    fn renders_success_messages() {
        assert_eq!(
            legacy_status(Ok(Reply::Created(notes()))).unwrap(),
            "File 'notes.txt' created successfully."
        );
        assert_eq!(
            legacy_status(Ok(Reply::Appended(notes()))).unwrap(),
            "Appended content to 'notes.txt'."
        );
        assert_eq!(
            legacy_status(Ok(Reply::Deleted(notes()))).unwrap(),
            "File 'notes.txt' has been deleted."
        );
    }

    #[test]
    fn read_content_passes_through_unmodified() {
        assert_eq!(
            legacy_status(Ok(Reply::Content("hello\nworld".to_string()))).unwrap(),
            "hello\nworld"
        );
    }

    #[test]
    fn folds_checked_preconditions_into_status_strings() {
        assert_eq!(
            legacy_status(Err(StoreError::NotFound(notes()))).unwrap(),
            "File 'notes.txt' does not exist."
        );
        assert_eq!(
            legacy_status(Err(StoreError::AlreadyExists(notes()))).unwrap(),
            "File 'notes.txt' already exists."
        );
    }

    #[test]
    fn io_faults_stay_errors() {
        let io = StoreError::Io(std::io::Error::other("disk full"));
        assert!(legacy_status(Err(io)).is_err());
    }

    #[test]
    fn invalid_names_stay_errors() {
        let err = StoreError::invalid_name("../escape", "name must not contain path separators");
        assert!(legacy_status(Err(err)).is_err());
    }
}
