use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use brand_nova_config::Config;
use brand_nova_engine::Document;
use clap::{Parser, Subcommand};
use log::info;

#[derive(Parser)]
#[command(name = "brand-nova")]
#[command(about = "Parse pasted markdown into editor nodes and export HTML")]
struct Cli {
    /// Config file (defaults to ~/.config/brand-nova/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the node tree as JSON
    Parse {
        /// Input file, or `-` for stdin
        input: Option<PathBuf>,

        /// Indent the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Export HTML
    Html {
        /// Input file, or `-` for stdin
        input: Option<PathBuf>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print word and character counts
    Stats {
        /// Input file, or `-` for stdin
        input: Option<PathBuf>,

        /// Print the counts as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the effective configuration
    Config {
        /// Write the default configuration if no config file exists
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = load_config(&config_path)?;

    match cli.command {
        Command::Parse { input, pretty } => {
            let doc = read_document(input.as_deref(), &config)?;
            let json = if pretty {
                serde_json::to_string_pretty(doc.blocks())?
            } else {
                serde_json::to_string(doc.blocks())?
            };
            println!("{json}");
        }
        Command::Html { input, output } => {
            let doc = read_document(input.as_deref(), &config)?;
            let html = doc.to_html();
            match output {
                Some(path) => {
                    fs::write(&path, html)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!("Wrote {}", path.display());
                }
                None => println!("{html}"),
            }
        }
        Command::Stats { input, json } => {
            let stats = read_document(input.as_deref(), &config)?.stats();
            if json {
                println!("{}", serde_json::to_string(&stats)?);
            } else {
                // The word count line is what the editor footer shows.
                if config.editor.show_word_count {
                    println!("{} words", stats.words);
                }
                println!("{} characters", stats.characters);
            }
        }
        Command::Config { init } => {
            if init && !config_path.exists() {
                config
                    .save_to_path(&config_path)
                    .with_context(|| format!("Failed to write {}", config_path.display()))?;
                info!("Created {}", config_path.display());
            }
            println!("# {}", config_path.display());
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}

/// Loads the config file, falling back to defaults when it does not exist.
fn load_config(path: &Path) -> Result<Config> {
    match Config::load_from_path(path)? {
        Some(config) => {
            info!("Loaded config from {}", path.display());
            Ok(config)
        }
        None => {
            info!("No config file at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }
}

fn read_document(input: Option<&Path>, config: &Config) -> Result<Document> {
    let raw = read_input(input)?;
    Ok(Document::from_markdown(&raw, &config.parser))
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}
