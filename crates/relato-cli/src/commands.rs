use super::args::{
    AuthCommand, Cli, Commands, FeedCommand, ProfileCommand, ReportCommand, SavedCommand,
};
use super::handlers::{self, HandlerContext};
use crate::args::ViewModeArgs;
use anyhow::Result;
use relato_sdk::Client;
use std::path::{Path, PathBuf};
use tracing::debug;

pub fn run(cli: Cli) -> Result<()> {
    crate::logging::init(cli.log_level);

    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;

    let Some(command) = cli.command else {
        show_guidance(&data_dir);
        return Ok(());
    };

    debug!(data_dir = %data_dir.display(), "opening workspace");
    let client = Client::connect(&data_dir)?;
    let ctx = HandlerContext::new(cli.format, &ViewModeArgs::default());
    let with_view = |view_mode: &ViewModeArgs| HandlerContext::new(cli.format, view_mode);

    match command {
        Commands::Auth { command } => match command {
            AuthCommand::Signup {
                email,
                password,
                name,
            } => handlers::auth::sign_up(&client, &email, &password, name.as_deref(), &ctx),
            AuthCommand::Signin { email, password } => {
                handlers::auth::sign_in(&client, &email, &password, &ctx)
            }
            AuthCommand::Signout => handlers::auth::sign_out(&client, &ctx),
            AuthCommand::Whoami => handlers::auth::whoami(&client, &ctx),
        },

        Commands::Report { command } => match command {
            ReportCommand::Template => handlers::report::template(&client, &ctx),
            ReportCommand::Create { file } => handlers::report::create(&client, &file, &ctx),
            ReportCommand::Edit { id, file } => handlers::report::edit(&client, &id, &file, &ctx),
            ReportCommand::Show { id, view_mode } => {
                handlers::report::show(&client, &id, &with_view(&view_mode))
            }
            ReportCommand::Order { id } => handlers::report::order(&client, &id, &ctx),
            ReportCommand::Move { id, from, to } => {
                handlers::report::move_section(&client, &id, from, to, &ctx)
            }
            ReportCommand::Attach { id, section, image } => {
                handlers::report::attach(&client, &id, &section, &image, &ctx)
            }
            ReportCommand::Detach { id, section, index } => {
                handlers::report::detach(&client, &id, &section, index, &ctx)
            }
            ReportCommand::Remove { id, list, index } => {
                handlers::report::remove(&client, &id, list, index, &ctx)
            }
            ReportCommand::Delete { id } => handlers::report::delete(&client, &id, &ctx),
        },

        Commands::Feed { command } => match command {
            FeedCommand::List {
                query,
                season,
                view_mode,
            } => handlers::feed::list(&client, query, season, &with_view(&view_mode)),
            FeedCommand::Stats { query, season } => {
                handlers::feed::stats(&client, query, season, &ctx)
            }
        },

        Commands::Like { id } => handlers::feed::like(&client, &id, &ctx),

        Commands::Save { id } => handlers::feed::save(&client, &id, &ctx),

        Commands::Saved { command } => match command {
            SavedCommand::List { view_mode } => {
                handlers::profile::saved(&client, &with_view(&view_mode))
            }
        },

        Commands::Profile { command } => match command {
            ProfileCommand::Show { view_mode } => {
                handlers::profile::show(&client, &with_view(&view_mode))
            }
            ProfileCommand::Avatar { image } => handlers::profile::avatar(&client, &image, &ctx),
        },
    }
}

fn resolve_data_dir(explicit: Option<&str>) -> Result<PathBuf> {
    Ok(relato_sdk::types::resolve_data_dir(explicit)?)
}

fn show_guidance(data_dir: &Path) {
    let db_exists = data_dir.join("relato.db").exists();

    println!("relato - family travel reports\n");

    if !db_exists {
        println!("Get started:");
        println!("  relato auth signup <email> --password <password> --name <name>");
        println!("  relato report template          # See the report sections");
        println!("  relato report create --file trip.toml\n");
    } else {
        println!("Quick commands:");
        println!("  relato feed list                # Browse reports");
        println!("  relato feed list --query <q>    # Search title, country, place or author");
        println!("  relato report show <ID>         # Read a report");
        println!("  relato profile show             # Your reports\n");
    }

    println!("For more commands:");
    println!("  relato --help");
}
