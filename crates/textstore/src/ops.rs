// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Operation envelope for the dispatch transport.
//!
//! The transport hands operations over by name with string arguments;
//! `Request` is that envelope, tagged by operation name. `Reply` is the
//! typed success payload, kept separate from `StoreError` so callers can
//! distinguish "succeeded with data" from "failed, here is why" without
//! sniffing prose.

use serde::Deserialize;

use crate::name::FileName;

/// One dispatch request, tagged by operation name.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    /// Create a new file with the given content.
    CreateFile {
        filename: String,
        #[serde(default)]
        content: String,
    },
    /// Append a line of content to an existing file.
    AppendToFile { filename: String, content: String },
    /// Read the complete content of a file.
    ReadFile { filename: String },
    /// Delete a file.
    DeleteFile { filename: String },
}

impl Request {
    /// The operation name as it appears on the wire.
    #[must_use]
    pub fn op_name(&self) -> &'static str {
        match self {
            Request::CreateFile { .. } => "create_file",
            Request::AppendToFile { .. } => "append_to_file",
            Request::ReadFile { .. } => "read_file",
            Request::DeleteFile { .. } => "delete_file",
        }
    }
}

/// Typed success payload for each operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    /// `create_file` succeeded.
    Created(FileName),
    /// `append_to_file` succeeded.
    Appended(FileName),
    /// `read_file` succeeded; carries the full file content, unmodified.
    Content(String),
    /// `delete_file` succeeded.
    Deleted(FileName),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_tagged_requests() {
        let req: Request =
            serde_json::from_str(r#"{"op":"create_file","filename":"notes","content":"hello"}"#)
                .unwrap();
        assert!(matches!(
            req,
            Request::CreateFile { ref filename, ref content }
                if filename == "notes" && content == "hello"
        ));
        assert_eq!(req.op_name(), "create_file");
    }

    #[test]
    fn create_content_defaults_to_empty() {
        let req: Request =
            serde_json::from_str(r#"{"op":"create_file","filename":"notes"}"#).unwrap();
        assert!(matches!(
            req,
            Request::CreateFile { ref content, .. } if content.is_empty()
        ));
    }

    #[test]
    fn append_requires_content() {
        let result: Result<Request, _> =
            serde_json::from_str(r#"{"op":"append_to_file","filename":"notes"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_unknown_operation() {
        let result: Result<Request, _> =
            serde_json::from_str(r#"{"op":"truncate_file","filename":"notes"}"#);
        assert!(result.is_err());
    }
}
