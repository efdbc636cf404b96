// Composition root for the events bounded context.
//
// Responsibilities
// - Read config from flags and environment.
// - Instantiate the in memory event store and wire it into the use case handlers.
// - Expose the HTTP router and the interactive CLI over the same state.

pub mod cli;
pub mod config;
pub mod http;
pub mod logging;
pub mod state;
