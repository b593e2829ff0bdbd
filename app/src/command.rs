//! Line commands accepted by the interactive front end.
//!
//! Each input line is split on whitespace and parsed with clap as if it were
//! an argument list without a binary name.

use crate::app::{AppAction, Route};
use crate::screens::edit::EditAction;
use crate::screens::list::ListAction;
use crate::types::TodoId;
use clap::{CommandFactory, Parser, Subcommand};
use thiserror::Error;

#[derive(Parser, Debug)]
#[command(
    name = "listkeeper",
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true,
    disable_help_subcommand = true,
    help_template = "Commands:\n{subcommands}"
)]
struct CommandLine {
    #[command(subcommand)]
    command: Command,
}

/// A parsed command line
#[derive(Subcommand, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Flip completion of an item (list screen)
    Toggle {
        #[arg(value_name = "ID")]
        id: TodoId,
    },
    /// Add an item (edit screen)
    Add {
        /// Words of the title, joined with single spaces
        #[arg(
            value_name = "TEXT",
            required = true,
            num_args = 1..,
            trailing_var_arg = true,
            allow_hyphen_values = true
        )]
        text: Vec<String>,
    },
    /// Remove an item (edit screen)
    #[command(name = "rm")]
    Remove {
        #[arg(value_name = "ID")]
        id: TodoId,
    },
    /// Switch between light and dark
    Theme,
    /// Open the edit screen
    Edit,
    /// Return to the list screen
    Back,
    /// Show the current screen again
    #[command(name = "list")]
    Show,
    /// Show this help
    #[command(alias = "?")]
    Help,
    /// Exit
    #[command(alias = "exit")]
    Quit,
}

/// Errors from parsing or applying a command
#[derive(Error, Debug)]
pub enum CommandError {
    /// The line is not a valid command
    #[error(transparent)]
    Parse(#[from] clap::Error),

    /// The command does not apply to the current screen
    #[error("\"{command}\" is not available on {path}")]
    NotAvailable {
        /// Command name
        command: &'static str,
        /// Path of the current route
        path: &'static str,
    },
}

/// Help text listing every command
#[must_use]
pub fn help() -> String {
    CommandLine::command().render_help().to_string()
}

impl Command {
    /// Parses one input line; blank lines yield `None`
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::Parse`] for unknown commands, missing
    /// arguments and malformed ids.
    pub fn parse(line: &str) -> Result<Option<Self>, CommandError> {
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return Ok(None);
        }

        let parsed = CommandLine::try_parse_from(words)?;
        Ok(Some(parsed.command))
    }

    /// Actions sending this command to the screen mounted for `route`
    ///
    /// `list`, `help` and `quit` are handled by the front end and yield no
    /// actions.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::NotAvailable`] if the command belongs to the
    /// other screen.
    pub fn into_actions(self, route: Route) -> Result<Vec<AppAction>, CommandError> {
        let actions = match (route, self) {
            (Route::List, Self::Toggle { id }) => {
                vec![AppAction::List(ListAction::ToggleTodo { id })]
            },
            (Route::List, Self::Theme) => vec![AppAction::List(ListAction::ToggleTheme)],
            (Route::List, Self::Edit) => vec![AppAction::List(ListAction::OpenEditor)],
            (Route::Edit, Self::Add { text }) => vec![
                AppAction::Edit(EditAction::InputChanged {
                    text: text.join(" "),
                }),
                AppAction::Edit(EditAction::AddTodo),
            ],
            (Route::Edit, Self::Remove { id }) => {
                vec![AppAction::Edit(EditAction::RemoveTodo { id })]
            },
            (Route::Edit, Self::Theme) => vec![AppAction::Edit(EditAction::ToggleTheme)],
            (Route::Edit, Self::Back) => vec![AppAction::Edit(EditAction::BackToList)],
            (_, Self::Show | Self::Help | Self::Quit) => Vec::new(),
            (route, command) => {
                return Err(CommandError::NotAvailable {
                    command: command.name(),
                    path: route.path(),
                });
            },
        };
        Ok(actions)
    }

    const fn name(&self) -> &'static str {
        match self {
            Self::Toggle { .. } => "toggle",
            Self::Add { .. } => "add",
            Self::Remove { .. } => "rm",
            Self::Theme => "theme",
            Self::Edit => "edit",
            Self::Back => "back",
            Self::Show => "list",
            Self::Help => "help",
            Self::Quit => "quit",
        }
    }
}
