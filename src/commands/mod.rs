//! CLI command definitions and dispatch.

pub mod config;
pub mod folder;
pub mod material;

use std::sync::Arc;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use clipdeck_core::config::AppConfig;
use clipdeck_core::config::source::SourceKind;
use clipdeck_core::error::AppError;
use clipdeck_core::types::OwnerId;
use clipdeck_database::{DatabasePool, PgFolderRepository, PgMaterialRepository, SnapshotSource};
use clipdeck_service::PickerService;

/// ClipDeck material library inspection
#[derive(Debug, Parser)]
#[command(name = "clipdeck", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Environment overlay (loads `config/<env>`)
    #[arg(short, long, env = "CLIPDECK_ENV")]
    pub env: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Owner account UUID (required for the postgres source)
    #[arg(short, long)]
    pub owner: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Folder hierarchy queries
    Folder(folder::FolderArgs),
    /// Material listings
    Material(material::MaterialArgs),
    /// Configuration inspection
    Config(config::ConfigArgs),
}

impl Cli {
    /// Load configuration from the `--config` file and `--env` overlay
    pub fn load_config(&self) -> Result<AppConfig, AppError> {
        AppConfig::load(&self.config, self.env.as_deref())
    }

    /// Execute the CLI command
    pub async fn execute(&self, config: AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Folder(args) => folder::execute(args, self, &config).await,
            Commands::Material(args) => material::execute(args, self, &config).await,
            Commands::Config(args) => config::execute(args, &config, self.format),
        }
    }

    /// Resolve the owner account for the configured source
    pub fn owner(&self, config: &AppConfig) -> Result<OwnerId, AppError> {
        match (&self.owner, config.source.kind) {
            (Some(raw), _) => raw
                .parse()
                .map_err(|e| AppError::validation(format!("Invalid owner UUID: {}", e))),
            // A snapshot holds a single owner's library.
            (None, SourceKind::Snapshot) => Ok(OwnerId::from(uuid::Uuid::nil())),
            (None, SourceKind::Postgres) => Err(AppError::validation(
                "--owner is required when reading from postgres",
            )),
        }
    }
}

/// Helper: build the picker service over the configured source
pub async fn create_picker(config: &AppConfig) -> Result<PickerService, AppError> {
    match config.source.kind {
        SourceKind::Postgres => {
            let pool = DatabasePool::connect(&config.database).await?.into_pool();
            Ok(PickerService::new(
                Arc::new(PgFolderRepository::new(pool.clone())),
                Arc::new(PgMaterialRepository::new(pool)),
                config.picker.clone(),
            ))
        }
        SourceKind::Snapshot => {
            let source = Arc::new(SnapshotSource::load(&config.source.snapshot_path).await?);
            Ok(PickerService::new(
                source.clone(),
                source,
                config.picker.clone(),
            ))
        }
    }
}
