//! Material listing CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output;
use clipdeck_core::config::AppConfig;
use clipdeck_core::error::AppError;
use clipdeck_core::types::FolderId;

use super::Cli;

/// Arguments for material commands
#[derive(Debug, Args)]
pub struct MaterialArgs {
    /// Material subcommand
    #[command(subcommand)]
    pub command: MaterialCommand,
}

/// Material subcommands
#[derive(Debug, Subcommand)]
pub enum MaterialCommand {
    /// List the materials stored in a folder
    List {
        /// Folder ID
        #[arg(short = 'd', long)]
        folder: String,
    },
}

/// Material display row
#[derive(Debug, Serialize, Tabled)]
struct MaterialRow {
    /// Material ID
    id: String,
    /// Name
    name: String,
    /// File type
    file_type: String,
    /// Category path
    category: String,
    /// Duration
    duration: String,
}

/// Execute material commands
pub async fn execute(args: &MaterialArgs, cli: &Cli, config: &AppConfig) -> Result<(), AppError> {
    let owner = cli.owner(config)?;
    let picker = super::create_picker(config).await?;

    match &args.command {
        MaterialCommand::List { folder } => {
            let items = picker.files(owner, &FolderId::from(folder.as_str())).await?;

            let rows: Vec<MaterialRow> = items
                .iter()
                .map(|m| MaterialRow {
                    id: m.id.to_string(),
                    name: m.name.clone(),
                    file_type: m.file_type.clone(),
                    category: match (&m.category, &m.subcategory) {
                        (Some(c), Some(s)) => format!("{} / {}", c, s),
                        (Some(c), None) => c.clone(),
                        _ => "-".to_string(),
                    },
                    duration: m
                        .duration
                        .map(|d| format!("{:.1}s", d))
                        .unwrap_or_else(|| "-".to_string()),
                })
                .collect();

            output::print_list(&rows, cli.format);
        }
    }

    Ok(())
}
