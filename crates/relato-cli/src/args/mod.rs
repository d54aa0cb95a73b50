// NOTE: Command Organization
//
// Subcommands are grouped by screen: auth, report (composer + detail),
// feed, saved and profile. `like` and `save` stay top-level because they
// are the actions people repeat most while browsing the feed.

mod commands;
mod common;
mod enums;
pub mod hints;

pub use commands::*;
pub use common::*;
pub use enums::*;

use clap::Parser;

#[derive(Parser)]
#[command(name = "relato")]
#[command(about = "Write, browse and save family travel reports", long_about = None)]
#[command(version)]
#[command(args_override_self = true)]
pub struct Cli {
    /// Data directory (defaults to $RELATO_PATH, then the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
