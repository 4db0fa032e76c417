//! Interactive navigation shell.
//!
//! Each input line becomes one `AppCommand`, resolved against the cursor depth
//! so that `open`, `new` and `delete` act on whichever level is on screen.

use crate::render::{render_scan, render_tree, render_view};
use anyhow::{anyhow, Result};
use log::info;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use shelfnav_core::{
    AppCommand, Cursor, DocumentStore, InventoryApp, NavigationMode, NoopScanner,
};

const HELP: &str = "\
Commands:
  ls              list the current level
  open <name>     enter a location, shelf or nested shelf
  new [name]      create at the current level (nested shelves are auto-named, no name)
  delete          delete the current location or shelf and all its contents
  back            go up one level
  close           leave all menus
  find <id>       search for an order
  scan            poll the scanner for the open nested shelf
  tree            print the whole inventory
  help            show this help
  quit            save and exit";

/// One parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellInput {
    Empty,
    List,
    Open(String),
    New(Option<String>),
    Delete,
    Back,
    Close,
    Find(String),
    Scan,
    Tree,
    Help,
    Quit,
}

pub fn parse_line(line: &str) -> Result<ShellInput, String> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    let argument = (!rest.is_empty()).then(|| rest.to_string());

    match verb.to_ascii_lowercase().as_str() {
        "" => Ok(ShellInput::Empty),
        "ls" | "list" => Ok(ShellInput::List),
        "open" | "cd" => argument
            .map(ShellInput::Open)
            .ok_or_else(|| "usage: open <name>".to_string()),
        "new" | "create" => Ok(ShellInput::New(argument)),
        "delete" | "rm" => Ok(ShellInput::Delete),
        "back" | ".." => Ok(ShellInput::Back),
        "close" => Ok(ShellInput::Close),
        "find" => Ok(ShellInput::Find(rest.to_string())),
        "scan" => Ok(ShellInput::Scan),
        "tree" => Ok(ShellInput::Tree),
        "help" | "?" => Ok(ShellInput::Help),
        "quit" | "exit" => Ok(ShellInput::Quit),
        other => Err(format!("unknown command `{other}`; type `help`")),
    }
}

/// Maps a level-relative input onto the command for the current cursor depth.
pub fn resolve(input: ShellInput, mode: NavigationMode) -> Result<AppCommand, String> {
    match (input, mode) {
        (ShellInput::Open(name), NavigationMode::Home) => Ok(AppCommand::SelectLocation(name)),
        (ShellInput::Open(name), NavigationMode::Location) => Ok(AppCommand::SelectShelf(name)),
        (ShellInput::Open(name), _) => Ok(AppCommand::SelectNestedShelf(name)),
        (ShellInput::New(Some(name)), NavigationMode::Home) => {
            Ok(AppCommand::CreateLocation(name))
        }
        (ShellInput::New(Some(name)), NavigationMode::Location) => {
            Ok(AppCommand::CreateShelf(name))
        }
        (ShellInput::New(None), NavigationMode::Home | NavigationMode::Location) => {
            Err("usage: new <name>".to_string())
        }
        (ShellInput::New(Some(_)), _) => {
            Err("nested shelves are auto-named; type `new` without a name".to_string())
        }
        (ShellInput::New(None), _) => Ok(AppCommand::CreateNestedShelf),
        (ShellInput::Delete, NavigationMode::Home) => {
            Err("open a location or shelf before deleting".to_string())
        }
        (ShellInput::Delete, NavigationMode::Location) => Ok(AppCommand::DeleteCurrentLocation),
        (ShellInput::Delete, _) => Ok(AppCommand::DeleteCurrentShelf),
        (ShellInput::Back, _) => Ok(AppCommand::Back),
        (ShellInput::Close, _) => Ok(AppCommand::Close),
        (ShellInput::Find(order_id), _) => Ok(AppCommand::SearchOrder(order_id)),
        (other, _) => Err(format!("`{other:?}` is not a navigation command")),
    }
}

fn prompt(cursor: &Cursor) -> String {
    let path: Vec<&str> = [cursor.location(), cursor.shelf(), cursor.nested_shelf()]
        .into_iter()
        .flatten()
        .collect();
    format!("shelfnav:/{}> ", path.join("/"))
}

fn delete_target(cursor: &Cursor) -> Option<(&'static str, &str)> {
    match cursor.mode() {
        NavigationMode::Home => None,
        NavigationMode::Location => cursor.location().map(|name| ("location", name)),
        NavigationMode::Shelf | NavigationMode::Scanning => {
            cursor.shelf().map(|name| ("shelf", name))
        }
    }
}

/// Runs the read-eval-print loop until `quit` or end of input.
pub fn run_shell<S: DocumentStore>(app: &mut InventoryApp<S>) -> Result<()> {
    let mut editor =
        DefaultEditor::new().map_err(|err| anyhow!("failed to start line editor: {err}"))?;
    info!("event=shell_start module=cli status=ok");
    println!("{HELP}");

    loop {
        let line = match editor.readline(&prompt(app.cursor())) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => return Err(anyhow!("failed to read input: {err}")),
        };
        let _ = editor.add_history_entry(line.as_str());

        let input = match parse_line(&line) {
            Ok(input) => input,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };

        match input {
            ShellInput::Empty => {}
            ShellInput::Quit => break,
            ShellInput::Help => println!("{HELP}"),
            ShellInput::Tree => println!("{}", render_tree(app.hierarchy().document())),
            ShellInput::List => match app.current_view() {
                Ok(view) => println!("{}", render_view(&view)),
                Err(err) => println!("{err}"),
            },
            ShellInput::Scan => match app.accept_scan(&mut NoopScanner) {
                Ok(report) => println!("{}", render_scan(&report)),
                Err(err) => println!("{err}"),
            },
            other => {
                let command = match resolve(other, app.cursor().mode()) {
                    Ok(command) => command,
                    Err(message) => {
                        println!("{message}");
                        continue;
                    }
                };
                if matches!(
                    command,
                    AppCommand::DeleteCurrentLocation | AppCommand::DeleteCurrentShelf
                ) && !confirm_delete(&mut editor, app.cursor())?
                {
                    continue;
                }
                match app.dispatch(command) {
                    Ok(view) => println!("{}", render_view(&view)),
                    Err(err) => println!("{err}"),
                }
            }
        }
    }

    info!("event=shell_stop module=cli status=ok");
    Ok(())
}

fn confirm_delete(editor: &mut DefaultEditor, cursor: &Cursor) -> Result<bool> {
    let Some((level, name)) = delete_target(cursor) else {
        return Ok(false);
    };
    let question = format!("Delete {level} `{name}` and all its contents? [y/N] ");
    match editor.readline(&question) {
        Ok(answer) => Ok(matches!(answer.trim(), "y" | "Y" | "yes")),
        Err(ReadlineError::Interrupted | ReadlineError::Eof) => Ok(false),
        Err(err) => Err(anyhow!("failed to read confirmation: {err}")),
    }
}
