// Presentation helpers shared by the per use case CLI handlers.

use crate::modules::events::core::errors::ApplicationError;
use crate::modules::events::core::event::Event;
use chrono::{DateTime, NaiveDateTime, Utc};

/// Dates are typed and shown as `YYYY-MM-DD HH:MM`, interpreted as UTC.
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Only the zero padded shape is accepted: chrono alone would also take
/// `2024-1-1 9:5` or a signed year.
pub fn parse_date_input(input: &str) -> Result<DateTime<Utc>, ApplicationError> {
    let trimmed = input.trim();
    NaiveDateTime::parse_from_str(trimmed, DATE_INPUT_FORMAT)
        .ok()
        .filter(|naive| naive.format(DATE_INPUT_FORMAT).to_string() == trimmed)
        .map(|naive| naive.and_utc())
        .ok_or_else(|| ApplicationError::InvalidDate {
            input: input.to_string(),
        })
}

pub fn format_date(date: &DateTime<Utc>) -> String {
    date.format(DATE_INPUT_FORMAT).to_string()
}

pub fn format_event_line(event: &Event) -> String {
    format!(
        "ID: {} | Title: {} | Description: {} | Date: {}",
        event.id,
        event.title,
        event.description,
        format_date(&event.date)
    )
}

/// Blank answers mean "keep the current value" when updating.
pub fn non_blank(answer: String) -> Option<String> {
    if answer.is_empty() { None } else { Some(answer) }
}

pub fn describe_error(error: &ApplicationError) -> String {
    match error {
        ApplicationError::NotFound { .. } => "Event not found.".to_string(),
        ApplicationError::InvalidDate { input } => {
            format!("Invalid date {input:?}, expected YYYY-MM-DD HH:MM.")
        }
        other => format!("Error: {other}"),
    }
}
