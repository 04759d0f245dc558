// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! textstore - four file operations over a flat directory of text files
//!
//! The store maps a logical name to `<root>/<name>.txt` and supports
//! create, append, read, and delete. Each operation is one open-act-close
//! sequence against the filesystem; no state is held between calls apart
//! from the per-name locks that serialize check-then-act sequences within
//! this process.

mod error;
mod name;
mod ops;
mod status;
mod store;

pub use error::{Result, StoreError};
pub use name::{FileName, STORAGE_EXTENSION};
pub use ops::{Reply, Request};
pub use status::legacy_status;
pub use store::TextStore;
