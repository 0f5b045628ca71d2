use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use serde_json::json;

use vitae::catalog;
use vitae::config::{Config, ConfigFile, Overrides};
use vitae::content::ContentProvider;
use vitae::model::SectionId;
use vitae::render::render;

#[derive(Parser)]
#[command(name = "vitae")]
#[command(about = "Editor-styled résumé viewer", long_about = None)]
pub(crate) struct Cli {
    /// Config file (defaults to vitae/config.json in the user config dir when present)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Primary résumé source (URL or file)
    #[arg(long, global = true, value_name = "SOURCE")]
    primary: Option<String>,

    /// Fallback résumé source (URL or file)
    #[arg(long, global = true, value_name = "SOURCE")]
    fallback: Option<String>,

    /// Skip both sources and use built-in content
    #[arg(long, global = true)]
    offline: bool,

    /// Append log records to this file
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one section's rendered lines
    Render {
        section: SectionId,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// List the section catalog
    Sections {
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },

    /// Filter the catalog the way the search bar does
    Search {
        query: String,
        /// Emit JSON
        #[arg(long)]
        json: bool,
    },
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref(), cli.command.is_none())?;

    let file = ConfigFile::discover(cli.config.as_deref())?;
    let config = Config::resolve(
        file,
        Overrides {
            primary: cli.primary,
            fallback: cli.fallback,
            offline: cli.offline,
        },
    );
    log::debug!("effective config: {:?}", config);

    match cli.command {
        None => vitae::tui::run_with_options(vitae::tui::TuiRunOptions { config })?,
        Some(Commands::Render { section, json }) => {
            let provider = ContentProvider::new(config.primary, config.fallback)?;
            let content = provider.load();
            let lines = render(section, &content);
            if json {
                let out = json!({
                    "section": section,
                    "content": content.label(),
                    "lines": lines,
                });
                println!(
                    "{}",
                    serde_json::to_string_pretty(&out).context("serialize render json")?
                );
            } else {
                for line in lines {
                    println!("{}", line);
                }
            }
        }
        Some(Commands::Sections { json }) => print_sections(&catalog::filter(""), json)?,
        Some(Commands::Search { query, json }) => print_sections(&catalog::filter(&query), json)?,
    }

    Ok(())
}

fn print_sections(sections: &[&vitae::model::Section], json: bool) -> Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(sections).context("serialize sections json")?
        );
        return Ok(());
    }
    for s in sections {
        println!("{:<12} {:<12} {}", s.id.slug(), s.title, s.display_path);
    }
    Ok(())
}

/// The TUI owns the terminal, so without a log file it gets no logger at all.
fn init_logging(log_file: Option<&Path>, tui: bool) -> Result<()> {
    let default = if log_file.is_some() { "info" } else { "warn" };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default));
    builder.format_timestamp_millis();

    match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("open log file {}", path.display()))?;
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        None if tui => return Ok(()),
        None => {}
    }

    builder.try_init().context("init logger")
}
