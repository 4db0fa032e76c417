//! shelfnav command-line front-end.
//!
//! # Responsibility
//! - Parse flags into an `AppConfig`, start logging, open the inventory.
//! - Map one-shot subcommands and the interactive shell onto core operations.
//! - Own all terminal output; the core never prints.

mod cli;
mod render;
mod shell;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use cli::{Cli, Command, LocationCommand, NestedCommand, ShelfCommand};
use log::info;
use render::{render_tree, render_view};
use shelfnav_core::{init_logging, AppCommand, InventoryApp, JsonFileStore};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();

    let cwd = std::env::current_dir().context("failed to resolve working directory")?;
    let log_dir = config.resolve_log_dir(&cwd);
    init_logging(&config.log_level, &log_dir).map_err(|err| anyhow!(err))?;
    info!(
        "event=cli_start module=cli status=ok data_file={}",
        config.data_file.display()
    );

    let mut app = InventoryApp::open(config.store())
        .with_context(|| format!("failed to open `{}`", config.data_file.display()))?;

    match cli.command.unwrap_or(Command::Shell) {
        Command::Shell => {
            shell::run_shell(&mut app)?;
            app.shutdown().context("failed to save inventory on exit")?;
        }
        Command::Version => println!("shelfnav_core version={}", shelfnav_core::core_version()),
        Command::Tree => println!("{}", render_tree(app.hierarchy().document())),
        Command::Location(command) => run_location(&mut app, command)?,
        Command::Shelf(command) => run_shelf(&mut app, command)?,
        Command::Nested(command) => run_nested(&mut app, command)?,
        Command::Order(args) => {
            let view = app.dispatch(AppCommand::SearchOrder(args.order_id))?;
            println!("{}", render_view(&view));
        }
    }
    Ok(())
}

fn run_location(app: &mut InventoryApp<JsonFileStore>, command: LocationCommand) -> Result<()> {
    match command {
        LocationCommand::List => {
            for name in app.hierarchy().list_locations() {
                println!("{name}");
            }
        }
        LocationCommand::Create { name } => {
            let created = app.create_location(&name)?;
            println!("Location '{created}' created successfully.");
        }
        LocationCommand::Delete { name } => {
            app.delete_location(&name)?;
            println!("Location '{name}' deleted successfully.");
        }
    }
    Ok(())
}

fn run_shelf(app: &mut InventoryApp<JsonFileStore>, command: ShelfCommand) -> Result<()> {
    match command {
        ShelfCommand::List { location } => {
            for name in app.hierarchy().list_shelves(&location)? {
                println!("{name}");
            }
        }
        ShelfCommand::Create { location, name } => {
            let created = app.create_shelf(&location, &name)?;
            println!("Shelf '{created}' created successfully.");
        }
        ShelfCommand::Delete { location, name } => {
            app.delete_shelf(&location, &name)?;
            println!("Shelf '{name}' deleted successfully.");
        }
    }
    Ok(())
}

fn run_nested(app: &mut InventoryApp<JsonFileStore>, command: NestedCommand) -> Result<()> {
    match command {
        NestedCommand::List { location, shelf } => {
            for name in app.hierarchy().list_nested_shelves(&location, &shelf)? {
                println!("{name}");
            }
        }
        NestedCommand::Create { location, shelf } => {
            let created = app.create_nested_shelf(&location, &shelf)?;
            println!("Nested Shelf '{created}' created successfully.");
        }
    }
    Ok(())
}
