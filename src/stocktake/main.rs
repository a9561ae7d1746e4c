use clap::Parser;
use colored::*;
use std::path::Path;
use stocktake::api::StockApi;
use stocktake::commands::{CmdMessage, CmdResult, MessageLevel};
use stocktake::config::StockConfig;
use stocktake::error::{Result, StockError};
use stocktake::report::ReportOptions;
use stocktake::store::fs::FileStore;
use stocktake::store::StockPaths;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        // Config is handled before any store is opened so it never
        // triggers the startup alert.
        Commands::Config { key, value } => handle_config(&cli.dir, key, value),
        command => run_inventory(&cli.dir, cli.no_alert, command),
    }
}

fn run_inventory(dir: &Path, no_alert: bool, command: Commands) -> Result<()> {
    let config = StockConfig::load(dir).unwrap_or_default();
    let store = FileStore::new(StockPaths::from_config(dir, &config));
    let options = ReportOptions::from_config(&config);

    let (mut api, warnings) = StockApi::open(store, options);
    print_messages(&warnings);

    if !no_alert {
        let alert = api.startup_alert()?;
        print_result(&alert);
        println!();
    }

    let result = match command {
        Commands::Add {
            name,
            quantity,
            price,
        } => api.add(&name, quantity, check_price(price)?)?,
        Commands::Update {
            name,
            quantity,
            price,
        } => api.update(&name, quantity, check_price(price)?)?,
        Commands::Delete { name } => api.delete(&name)?,
        Commands::Search { name } => api.search(&name)?,
        Commands::Report => api.report()?,
        Commands::LowStock { save } => api.low_stock(save)?,
        Commands::Sort { key } => api.sort(key.into())?,
        Commands::Export => api.export()?,
        // Handled in run() before the store opens.
        Commands::Config { .. } => return Ok(()),
    };
    print_result(&result);
    Ok(())
}

fn handle_config(dir: &Path, key: Option<String>, value: Option<String>) -> Result<()> {
    let mut config = StockConfig::load(dir)?;
    match (key, value) {
        (None, _) => {
            for key in StockConfig::keys() {
                if let Some(value) = config.get(key) {
                    println!("{} = {}", key, value);
                }
            }
        }
        (Some(key), None) => match config.get(&key) {
            Some(value) => println!("{} = {}", key, value),
            None => return Err(StockError::Input(format!("Unknown config key: {}", key))),
        },
        (Some(key), Some(value)) => {
            config.set(&key, &value)?;
            config.save(dir)?;
            println!("{} = {}", key, value);
        }
    }
    Ok(())
}

fn check_price(price: f64) -> Result<f64> {
    if !price.is_finite() || price < 0.0 {
        return Err(StockError::Input(format!(
            "Price must be a non-negative number, got {}",
            price
        )));
    }
    Ok(price)
}

fn print_result(result: &CmdResult) {
    if let Some(rendered) = &result.rendered {
        println!("{}", rendered);
    }
    print_messages(&result.messages);
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
