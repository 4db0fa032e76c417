//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};
use shelfnav_core::{AppConfig, DEFAULT_DATA_FILE};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "shelfnav", version, about = "Browse and edit a location/shelf inventory tree")]
pub struct Cli {
    /// Inventory JSON file
    #[arg(long, value_name = "PATH", default_value = DEFAULT_DATA_FILE, global = true)]
    pub data_file: PathBuf,
    /// Log level: trace|debug|info|warn|error
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,
    /// Log directory (default: `logs` next to the data file)
    #[arg(long, value_name = "DIR", global = true)]
    pub log_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the whole inventory tree
    Tree,
    /// Manage locations
    #[command(subcommand)]
    Location(LocationCommand),
    /// Manage shelves inside a location
    #[command(subcommand)]
    Shelf(ShelfCommand),
    /// Manage auto-named nested shelves inside a shelf
    #[command(subcommand)]
    Nested(NestedCommand),
    /// Search for an order by id
    Order(OrderArgs),
    /// Interactive navigation shell (default)
    Shell,
    /// Print the core version
    Version,
}

#[derive(Debug, Subcommand)]
pub enum LocationCommand {
    List,
    Create { name: String },
    Delete { name: String },
}

#[derive(Debug, Subcommand)]
pub enum ShelfCommand {
    List { location: String },
    Create { location: String, name: String },
    Delete { location: String, name: String },
}

#[derive(Debug, Subcommand)]
pub enum NestedCommand {
    List { location: String, shelf: String },
    Create { location: String, shelf: String },
}

#[derive(Debug, Args)]
pub struct OrderArgs {
    pub order_id: String,
}

impl Cli {
    pub fn config(&self) -> AppConfig {
        let defaults = AppConfig::default();
        AppConfig {
            data_file: self.data_file.clone(),
            log_level: self.log_level.clone().unwrap_or(defaults.log_level),
            log_dir: self.log_dir.clone(),
        }
    }
}
