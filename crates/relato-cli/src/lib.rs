// NOTE: relato CLI layout
//
// Handlers own the SDK calls, presenters turn SDK results into view models,
// and the console renderer prints either the view (text) or the whole view
// model (json). Handlers never print directly.
//
// Drafts are TOML files rather than interactive prompts so that every
// composer operation stays scriptable.

mod args;
mod commands;
mod handlers;
pub mod logging;
pub mod presentation;

pub use args::{
    AuthCommand, Cli, Commands, EntryList, FeedCommand, ProfileCommand, ReportCommand,
    SavedCommand,
};
pub use commands::run;
