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
    match state.list_events.handle().await {
        Ok(events) if events.is_empty() => console.say("No events available.").await,
        Ok(events) => {
            console.say("\nList of Events:").await?;
            for event in &events {
                console.say(format_event_line(event)).await?;
            }
            Ok(())
        }
        Err(error) => console.say(describe_error(&error)).await,
    }
}
