use clap::Parser;
use std::net::SocketAddr;

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

/// Event scheduling service with a REST API and an interactive CLI.
#[derive(Debug, Clone, Parser)]
#[command(name = "event_manager", version, about)]
pub struct Config {
    /// Address the REST API listens on
    #[arg(long, env = "EVENT_MANAGER_ADDR", default_value = DEFAULT_ADDR)]
    pub addr: SocketAddr,

    /// Serve the REST API only, without the interactive menu
    #[arg(long, env = "EVENT_MANAGER_HEADLESS")]
    pub headless: bool,

    /// Log filter directives, used when RUST_LOG is unset
    #[arg(long, env = "EVENT_MANAGER_LOG")]
    pub log_filter: Option<String>,
}

impl Config {
    /// The interactive menu owns the terminal unless headless, so logging
    /// stays quiet by default in that mode.
    pub fn log_filter(&self) -> &str {
        match (&self.log_filter, self.headless) {
            (Some(filter), _) => filter,
            (None, true) => "info",
            (None, false) => "warn",
        }
    }
}
