//! Folder hierarchy CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use clipdeck_core::config::AppConfig;
use clipdeck_core::error::AppError;
use clipdeck_core::types::{FolderId, MaterialType};
use clipdeck_entity::folder::{FolderForest, FolderNode};
use clipdeck_service::{breadcrumbs, move_targets};

use super::Cli;

/// Arguments for folder commands
#[derive(Debug, Args)]
pub struct FolderArgs {
    /// Folder subcommand
    #[command(subcommand)]
    pub command: FolderCommand,
}

/// Folder subcommands
#[derive(Debug, Subcommand)]
pub enum FolderCommand {
    /// Show the folder tree, optionally pruned to some material types
    Tree {
        /// Comma-separated types to keep (video, image, audio)
        #[arg(short, long, value_delimiter = ',')]
        types: Vec<MaterialType>,
    },
    /// Show the "recently added" shortcut folders of the picker
    Recent {
        /// Comma-separated types offered (defaults to the configured types)
        #[arg(short, long, value_delimiter = ',')]
        types: Vec<MaterialType>,
        /// Number of folders (defaults to the configured limit)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// List folders that the given folders may be moved into
    MoveTargets {
        /// IDs of the folders being moved
        #[arg(short, long, num_args = 1.., required = true)]
        moving: Vec<String>,
    },
    /// Show the path from the root to a folder
    Breadcrumbs {
        /// Folder ID
        id: String,
    },
}

/// Folder display row
#[derive(Debug, Serialize, Tabled)]
struct FolderRow {
    /// Folder ID
    id: String,
    /// Name
    name: String,
    /// Resolved type
    #[tabled(rename = "type")]
    #[serde(rename = "type")]
    kind: String,
    /// Materials in the folder
    count: u64,
}

impl FolderRow {
    fn from_node(node: &FolderNode, indent: usize) -> Self {
        Self {
            id: node.id.to_string(),
            name: format!("{}{}", "  ".repeat(indent), node.name),
            kind: type_label(node.kind),
            count: node.count,
        }
    }
}

fn type_label(kind: Option<MaterialType>) -> String {
    kind.map(|k| k.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Execute folder commands
pub async fn execute(args: &FolderArgs, cli: &Cli, config: &AppConfig) -> Result<(), AppError> {
    let owner = cli.owner(config)?;
    let picker = super::create_picker(config).await?;

    match &args.command {
        FolderCommand::Tree { types } => {
            let forest = if types.is_empty() {
                picker.forest(owner).await?
            } else {
                picker.open(owner, Some(types.as_slice())).await?.forest
            };

            match cli.format {
                OutputFormat::Table => print_tree(&forest),
                OutputFormat::Json => output::print_json(&forest),
            }
        }
        FolderCommand::Recent { types, limit } => {
            let wanted = (!types.is_empty()).then_some(types.as_slice());
            let mut view = picker.open(owner, wanted).await?;
            if let Some(limit) = limit {
                view.recent_limit = *limit;
            }

            let rows: Vec<FolderRow> = view
                .recent()
                .into_iter()
                .map(|node| FolderRow::from_node(node, 0))
                .collect();
            output::print_list(&rows, cli.format);
        }
        FolderCommand::MoveTargets { moving } => {
            let forest = picker.forest(owner).await?;
            let moving: Vec<FolderId> =
                moving.iter().map(|id| FolderId::from(id.as_str())).collect();

            if let Some(missing) = moving.iter().find(|id| forest.find(id).is_none()) {
                return Err(AppError::not_found(format!("Folder '{}' not found", missing)));
            }

            let rows: Vec<FolderRow> = move_targets(&forest, &moving)
                .into_iter()
                .map(|t| FolderRow {
                    id: t.id.to_string(),
                    name: format!("{}{}", "  ".repeat(t.depth), t.name),
                    kind: type_label(t.kind),
                    count: forest.find(&t.id).map(|n| n.count).unwrap_or(0),
                })
                .collect();
            output::print_list(&rows, cli.format);
        }
        FolderCommand::Breadcrumbs { id } => {
            let forest = picker.forest(owner).await?;
            let trail = breadcrumbs(&forest, &FolderId::from(id.as_str()));
            if trail.is_empty() {
                return Err(AppError::not_found(format!("Folder '{}' not found", id)));
            }

            match cli.format {
                OutputFormat::Table => {
                    let names: Vec<&str> = trail.iter().map(|n| n.name.as_str()).collect();
                    println!("{}", names.join(" / "));
                }
                OutputFormat::Json => {
                    let rows: Vec<FolderRow> =
                        trail.iter().map(|n| FolderRow::from_node(n, 0)).collect();
                    output::print_json(&rows);
                }
            }
        }
    }

    Ok(())
}

fn print_tree(forest: &FolderForest) {
    if forest.is_empty() {
        println!("No folders found.");
        return;
    }

    println!("/");
    for (depth, node) in forest.walk() {
        let indent = "  ".repeat(depth + 1);
        println!(
            "{}├── {}/ [{}] ({})",
            indent,
            node.name,
            type_label(node.kind),
            node.count
        );
    }
}
