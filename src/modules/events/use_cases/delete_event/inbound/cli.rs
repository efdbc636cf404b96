use std::io;
use tokio::io::{AsyncBufRead, AsyncWrite};

use crate::modules::events::adapters::inbound::cli::describe_error;
use crate::shared::infrastructure::console::Console;
use crate::shell::state::AppState;

pub async fn handle<R, W>(state: &AppState, console: &mut Console<R, W>) -> io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let id = console.prompt("Enter event ID to delete: ").await?;
    match state.delete_event.handle(&id).await {
        Ok(_) => console.say("Event deleted successfully.").await,
        Err(error) => console.say(describe_error(&error)).await,
    }
}
