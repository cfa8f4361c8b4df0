use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use dotview::commands::config::ConfigAction;
use dotview::commands::{self, CmdMessage, CmdResult, MessageLevel};
use dotview::config::DotviewConfig;
use dotview::document;
use dotview::error::Result;
use dotview::store::LoadOptions;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
use args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config_dir = cli.config.clone().unwrap_or_else(default_config_dir);

    let result = match cli.command {
        Commands::Get { file, path } => {
            let doc = document::from_path(&file)?;
            commands::get::run(&doc, &path)?
        }
        Commands::Keys { file, path } => {
            let doc = document::from_path(&file)?;
            commands::keys::run(&doc, &path)?
        }
        Commands::Call {
            file,
            path,
            method,
            args,
        } => {
            let doc = document::from_path(&file)?;
            commands::call::run(&doc, &path, &method, &args)?
        }
        Commands::Records { file, key } => {
            let config = DotviewConfig::load(&config_dir)?;
            let doc = document::from_path(&file)?;
            commands::records::run(&doc, &LoadOptions::from(&config), key.as_deref())?
        }
        Commands::Config { key, value } => {
            let action = match (key, value) {
                (None, _) => ConfigAction::ShowAll,
                (Some(k), None) => ConfigAction::ShowKey(k),
                (Some(k), Some(v)) => ConfigAction::Set(k, v),
            };
            commands::config::run(&config_dir, action)?
        }
    };

    print_result(&result)
}

fn default_config_dir() -> PathBuf {
    ProjectDirs::from("com", "dotview", "dotview")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".dotview"))
}

fn print_result(result: &CmdResult) -> Result<()> {
    for value in &result.values {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    for key in &result.listed_keys {
        println!("{}", key);
    }
    if let Some(config) = &result.config {
        for key in DotviewConfig::keys() {
            println!("{} = {}", key.bold(), config.get(key).unwrap_or_default());
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
