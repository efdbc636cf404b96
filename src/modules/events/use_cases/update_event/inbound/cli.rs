use std::io;
use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::modules::events::adapters::inbound::cli::{
    describe_error, format_date, non_blank, parse_date_input,
};
use crate::modules::events::core::event::EventPatch;
use crate::modules::events::use_cases::update_event::command::UpdateEvent;
use crate::shared::infrastructure::console::Console;
use crate::shell::state::AppState;

/// Checks the id before asking for anything else. Blank answers keep the
/// current value, shown in brackets.
pub async fn handle<R, W>(state: &AppState, console: &mut Console<R, W>) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let id = console.prompt("Enter event ID to update: ").await?;
    let current = match state.get_event.handle(&id).await {
        Ok(event) => event,
        Err(error) => return console.say(describe_error(&error)).await,
    };

    let title = console
        .prompt(format!("Enter new title [{}]: ", current.title))
        .await?;
    let description = console
        .prompt(format!("Enter new description [{}]: ", current.description))
        .await?;
    let date_input = console
        .prompt(format!(
            "Enter new event date (YYYY-MM-DD HH:MM) [{}]: ",
            format_date(&current.date)
        ))
        .await?;

    let date = match non_blank(date_input) {
        None => None,
        Some(input) => match parse_date_input(&input) {
            Ok(date) => Some(date),
            Err(error) => return console.say(describe_error(&error)).await,
        },
    };

    let command = UpdateEvent {
        id,
        changes: EventPatch {
            title: non_blank(title),
            description: non_blank(description),
            date,
        },
    };
    match state.update_event.handle(command).await {
        Ok(_) => console.say("Event updated successfully.").await,
        Err(error) => console.say(describe_error(&error)).await,
    }
}
