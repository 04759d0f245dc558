// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use cmd::commands::{append_command, create_command, delete_command, read_command, serve_command};
use cmd::common::get_store_root_with_override;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "textops")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Storage root directory (defaults to $TEXTOPS_DIR, then ./text_files)
    #[arg(short, long, global = true)]
    dir: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new text file
    Create {
        /// Logical file name, without extension
        name: String,
        /// Initial content to write
        #[arg(default_value = "")]
        content: String,
    },
    /// Append a line of content to an existing file
    Append {
        /// Logical file name, without extension
        name: String,
        /// Content to append after a separating newline
        content: String,
    },
    /// Print the complete content of a file
    Read {
        /// Logical file name, without extension
        name: String,
    },
    /// Delete a file
    Delete {
        /// Logical file name, without extension
        name: String,
    },
    /// Serve operations over line-delimited JSON on stdin/stdout
    Serve,
}

#[tokio::main]
async fn main() -> Result<()> {
    diagnostics::init_diagnostics();

    let cli = Cli::parse();
    let root = get_store_root_with_override(cli.dir);

    match &cli.command {
        Commands::Create { name, content } => {
            let status = create_command(&root, name, content).await?;
            println!("{status}");
        }
        Commands::Append { name, content } => {
            let status = append_command(&root, name, content).await?;
            println!("{status}");
        }
        Commands::Read { name } => {
            let output = read_command(&root, name).await?;
            println!("{output}");
        }
        Commands::Delete { name } => {
            let status = delete_command(&root, name).await?;
            println!("{status}");
        }
        Commands::Serve => serve_command(&root).await?,
    }

    Ok(())
}
