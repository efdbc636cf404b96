use std::io;
use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::modules::events::adapters::inbound::cli::{describe_error, format_event_line};
use crate::shared::infrastructure::console::Console;
use crate::shell::state::AppState;

pub async fn handle<R, W>(state: &AppState, console: &mut Console<R, W>) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let id = console.prompt("Enter event ID: ").await?;
    match state.get_event.handle(&id).await {
        Ok(event) => console.say(format_event_line(&event)).await,
        Err(error) => console.say(describe_error(&error)).await,
    }
}
