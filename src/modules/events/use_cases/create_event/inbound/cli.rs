use std::io;
use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::modules::events::adapters::inbound::cli::{describe_error, parse_date_input};
use crate::modules::events::use_cases::create_event::command::CreateEvent;
use crate::shared::infrastructure::console::Console;
use crate::shell::state::AppState;

pub async fn handle<R, W>(state: &AppState, console: &mut Console<R, W>) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let date_input = console
        .prompt("Enter event date (YYYY-MM-DD HH:MM): ")
        .await?;
    let date = match parse_date_input(&date_input) {
        Ok(date) => date,
        Err(error) => return console.say(describe_error(&error)).await,
    };

    let id = console.prompt("Enter event ID: ").await?;
    let title = console.prompt("Enter event title: ").await?;
    let description = console.prompt("Enter event description: ").await?;

    let command = CreateEvent {
        id,
        title,
        description,
        date,
    };
    match state.create_event.handle(command).await {
        Ok(_) => console.say("Event added successfully.").await,
        Err(error) => console.say(describe_error(&error)).await,
    }
}
