use anyhow::Result;
use clap::{Parser, Subcommand};
use inquire::Select;

use sahab_core::{Config, Language, Localizer};

use crate::view;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "sahab", version, about = "Bilingual current-conditions weather app")]
pub struct Cli {
    /// Display language for this run, e.g. "en" or "ar"; overrides the
    /// saved preference without persisting.
    #[arg(long, global = true)]
    pub lang: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current conditions (the default).
    Show,

    /// Show the weather news screen.
    News,

    /// List the side-menu entries.
    Menu,

    /// Choose and persist the display language.
    Language {
        /// Language short name, e.g. "en" or "ar"; prompts when omitted.
        lang: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = Config::load()?;

        let language = match self.lang.as_deref() {
            Some(s) => Language::try_from(s)?,
            None => config.saved_language()?,
        };
        let localizer = Localizer::new(language);

        match self.command.unwrap_or(Command::Show) {
            Command::Show => view::show_current(localizer).await,
            Command::News => view::show_news(localizer).await,
            Command::Menu => {
                view::show_menu(localizer);
                Ok(())
            }
            Command::Language { lang } => configure_language(config, lang),
        }
    }
}

fn configure_language(mut config: Config, lang: Option<String>) -> Result<()> {
    let language = match lang {
        Some(s) => Language::try_from(s.as_str())?,
        None => Select::new("Display language", Language::all().to_vec()).prompt()?,
    };

    config.set_language(language);
    config.save()?;

    println!("Language set to {}", language.display_name());
    Ok(())
}
