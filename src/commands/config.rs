//! Configuration inspection CLI commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use clipdeck_core::config::AppConfig;
use clipdeck_core::config::source::SourceKind;
use clipdeck_core::error::AppError;
use clipdeck_database::connection::mask_password;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,
}

/// Execute config commands
pub fn execute(
    args: &ConfigArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    match args.command {
        ConfigCommand::Show => match format {
            OutputFormat::Json => {
                let mut shown = config.clone();
                shown.database.url = mask_password(&config.database.url);
                output::print_json(&shown);
            }
            OutputFormat::Table => {
                let kind = match config.source.kind {
                    SourceKind::Postgres => "postgres",
                    SourceKind::Snapshot => "snapshot",
                };
                let wanted: Vec<String> = config
                    .picker
                    .wanted_types
                    .iter()
                    .map(|t| t.to_string())
                    .collect();

                println!("Source");
                output::print_kv("kind", kind);
                output::print_kv("snapshot_path", &config.source.snapshot_path);
                println!("Database");
                output::print_kv("url", &mask_password(&config.database.url));
                output::print_kv("max_connections", &config.database.max_connections.to_string());
                output::print_kv(
                    "connect_timeout_seconds",
                    &config.database.connect_timeout_seconds.to_string(),
                );
                println!("Picker");
                output::print_kv("recent_limit", &config.picker.recent_limit.to_string());
                output::print_kv("wanted_types", &wanted.join(", "));
                println!("Logging");
                output::print_kv("level", &config.logging.level);
                output::print_kv("format", &config.logging.format);
            }
        },
    }

    Ok(())
}
