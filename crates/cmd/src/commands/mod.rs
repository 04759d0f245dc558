// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

pub mod append;
pub mod create;
pub mod delete;
pub mod read;
pub mod serve;

pub use append::append_command;
pub use create::create_command;
pub use delete::delete_command;
pub use read::read_command;
pub use serve::serve_command;
