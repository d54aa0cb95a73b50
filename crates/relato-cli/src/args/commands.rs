use super::common::ViewModeArgs;
use super::enums::EntryList;
use clap::Subcommand;
use relato_types::{ReportId, Season};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Sign up, sign in and manage the session")]
    Auth {
        #[command(subcommand)]
        command: AuthCommand,
    },

    #[command(about = "Write, read and rearrange travel reports")]
    Report {
        #[command(subcommand)]
        command: ReportCommand,
    },

    #[command(about = "Browse and search the report feed")]
    Feed {
        #[command(subcommand)]
        command: FeedCommand,
    },

    #[command(about = "Like or unlike a report")]
    Like {
        #[arg(help = "Report ID")]
        id: ReportId,
    },

    #[command(about = "Save or unsave a report")]
    Save {
        #[arg(help = "Report ID")]
        id: ReportId,
    },

    #[command(about = "Reports you saved")]
    Saved {
        #[command(subcommand)]
        command: SavedCommand,
    },

    #[command(about = "Your profile and reports")]
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
}

#[derive(Subcommand)]
pub enum AuthCommand {
    #[command(about = "Create an account and sign in")]
    Signup {
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long, help = "Display name (defaults to the email's local part)")]
        name: Option<String>,
    },

    #[command(about = "Sign in with email and password")]
    Signin {
        email: String,

        #[arg(long)]
        password: String,
    },

    #[command(about = "End the current session")]
    Signout,

    #[command(about = "Show the signed-in user")]
    Whoami,
}

#[derive(Subcommand)]
pub enum ReportCommand {
    #[command(about = "Show the section template and writing prompts")]
    Template,

    #[command(about = "Create a report from a TOML draft file")]
    Create {
        #[arg(long, short)]
        file: PathBuf,
    },

    #[command(about = "Apply a TOML draft file to one of your reports")]
    Edit {
        id: ReportId,

        #[arg(long, short)]
        file: PathBuf,
    },

    #[command(about = "Read a report (counts one view)")]
    Show {
        id: ReportId,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Show the section order of one of your reports")]
    Order { id: ReportId },

    #[command(about = "Move a section from one position to another")]
    Move {
        id: ReportId,

        #[arg(help = "Current position (0-based)")]
        from: usize,

        #[arg(help = "New position (0-based)")]
        to: usize,
    },

    #[command(about = "Upload an image into a report section")]
    Attach {
        id: ReportId,

        #[arg(long)]
        section: String,

        #[arg(long)]
        image: PathBuf,
    },

    #[command(about = "Remove an image from a report section")]
    Detach {
        id: ReportId,

        #[arg(help = "Section key, e.g. resumo")]
        section: String,

        #[arg(help = "Image position in the section (0-based)")]
        index: usize,
    },

    #[command(about = "Remove a country, child age or location from a report")]
    Remove {
        id: ReportId,

        #[arg(value_enum)]
        list: EntryList,

        #[arg(help = "Entry position as listed by `report show` (0-based)")]
        index: usize,
    },

    #[command(about = "Delete one of your reports")]
    Delete { id: ReportId },
}

#[derive(Subcommand)]
pub enum FeedCommand {
    #[command(about = "List reports, newest first")]
    List {
        #[arg(long, short, help = "Match title, country, location or author")]
        query: Option<String>,

        #[arg(long, help = "Primavera, Verão, Outono or Inverno")]
        season: Option<Season>,

        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Feed counters")]
    Stats {
        #[arg(long, short)]
        query: Option<String>,

        #[arg(long)]
        season: Option<Season>,
    },
}

#[derive(Subcommand)]
pub enum SavedCommand {
    #[command(about = "List saved reports, most recently saved first")]
    List {
        #[command(flatten)]
        view_mode: ViewModeArgs,
    },
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    #[command(about = "Show your profile and reports")]
    Show {
        #[command(flatten)]
        view_mode: ViewModeArgs,
    },

    #[command(about = "Upload a new avatar image")]
    Avatar {
        #[arg(long)]
        image: PathBuf,
    },
}
