use std::io;
use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::modules::events::use_cases::create_event::inbound::cli as create_cli;
use crate::modules::events::use_cases::delete_event::inbound::cli as delete_cli;
use crate::modules::events::use_cases::get_event::inbound::cli as get_cli;
use crate::modules::events::use_cases::list_events::inbound::cli as list_cli;
use crate::modules::events::use_cases::update_event::inbound::cli as update_cli;
use crate::shared::infrastructure::console::Console;
use crate::shell::state::AppState;

pub const MENU: &str = "\n--- Event Scheduling CLI ---\n\
1. View all events\n\
2. View an event by ID\n\
3. Add a new event\n\
4. Update an event by ID\n\
5. Delete an event by ID\n\
6. Exit CLI";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    ViewAll,
    ViewOne,
    Add,
    Update,
    Delete,
    Exit,
}

impl MenuOption {
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Self::ViewAll),
            "2" => Some(Self::ViewOne),
            "3" => Some(Self::Add),
            "4" => Some(Self::Update),
            "5" => Some(Self::Delete),
            "6" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Runs the menu until the user picks Exit or input ends.
pub async fn run<R, W>(state: &AppState, console: &mut Console<R, W>) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    loop {
        console.say(MENU).await?;
        let choice = match console.prompt("Select an option: ").await {
            Ok(choice) => choice,
            Err(error) if error.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(error) => return Err(error),
        };

        let outcome = match MenuOption::from_choice(&choice) {
            Some(MenuOption::ViewAll) => list_cli::handle(state, console).await,
            Some(MenuOption::ViewOne) => get_cli::handle(state, console).await,
            Some(MenuOption::Add) => create_cli::handle(state, console).await,
            Some(MenuOption::Update) => update_cli::handle(state, console).await,
            Some(MenuOption::Delete) => delete_cli::handle(state, console).await,
            Some(MenuOption::Exit) => break,
            None => console.say("Invalid option, please try again.").await,
        };

        match outcome {
            Ok(()) => {}
            Err(error) if error.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(error) => return Err(error),
        }
    }

    tracing::debug!("cli session ended");
    console.say("Exiting CLI.").await
}
