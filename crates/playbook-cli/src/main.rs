mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use playbook::{ActiveFilter, Catalog, Clipboard, Osc52Clipboard};
use playbook_tui::BrowserOptions;

use crate::config::{AppConfig, SITE_URL_ENV};

#[derive(Parser)]
#[command(name = "playbook")]
#[command(about = "Browse the system design playbook and share links to its writeups")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// List systems matching a filter and search term
    List {
        /// `all`, a category, or a tag (exact, case-sensitive)
        #[arg(long)]
        filter: Option<String>,
        /// Case-insensitive text matched against title, description and stack
        #[arg(long, default_value = "")]
        search: String,
        /// Print a JSON array instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show one system in full
    Show {
        /// System id, or a share link containing `?system=<id>`
        id: String,
        #[arg(long)]
        json: bool,
    },
    /// Print the share link for a system
    Share {
        /// System id, or a share link containing `?system=<id>`
        id: String,
        /// Also copy the link to the terminal clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Show the filter tabs and how many systems each holds
    Tabs,
    /// Launch the interactive browser (default)
    Tui {
        /// Start with this system selected (id or share link)
        #[arg(long)]
        system: Option<String>,
        /// Override the configured starting filter
        #[arg(long)]
        filter: Option<String>,
    },
}

fn browser_filter(config: &AppConfig, flag: Option<&str>) -> ActiveFilter {
    match flag {
        Some(f) => ActiveFilter::parse(f),
        None => config.initial_filter(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let app_config = config::load_config();
    let location = app_config.location(std::env::var(SITE_URL_ENV).ok().as_deref());
    let catalog = Catalog::builtin();

    match cli.command.unwrap_or(Command::Tui {
        system: None,
        filter: None,
    }) {
        Command::List {
            filter,
            search,
            json,
        } => {
            let filter = filter.as_deref().map_or(ActiveFilter::All, ActiveFilter::parse);
            commands::list::run(&catalog, &filter, &search, json)
        }
        Command::Show { id, json } => commands::show::run(&catalog, &location, &id, json),
        Command::Share { id, copy } => {
            if copy {
                let mut clipboard = Osc52Clipboard::stdout();
                commands::share::run(
                    &catalog,
                    &location,
                    &id,
                    Some(&mut clipboard as &mut dyn Clipboard),
                )
            } else {
                commands::share::run(&catalog, &location, &id, None)
            }
        }
        Command::Tabs => commands::tabs::run(&catalog),
        Command::Tui { system, filter } => {
            let select = system.as_deref().map(commands::entry_id).transpose()?;
            let options = BrowserOptions {
                location,
                initial_filter: browser_filter(&app_config, filter.as_deref()),
                select,
            };
            playbook_tui::run(catalog, options).await
        }
    }
}
