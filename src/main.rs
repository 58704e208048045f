//! Parcelstock CLI - receiving, exit and stock views over the parcel log

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use parcelstock::config::{self, ParcelstockConfig};
use parcelstock::ui::{self, Icons};
use parcelstock::{validate, ParcelStore, StockRow};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "parcelstock")]
#[command(version)]
#[command(about = "Parcel inventory log - record parcels in storage and how they left")]
#[command(long_about = r#"
Parcelstock keeps a log of parcels held in a storage area:
  • Receiving: register a parcel with code, description and quantity
  • Exit: mark every parcel with a code as retrieved, with its exit method
  • Stock: list everything on record, or wipe the log

Example usage:
  parcelstock add --code A1 --description Widget --quantity 5
  parcelstock retrieve --code A1 --method Uber
  parcelstock list
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the database file (overrides the config file)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default config file and create the database
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Register a parcel entering storage
    Add {
        /// Parcel code
        #[arg(long, default_value = "")]
        code: String,

        /// Parcel description
        #[arg(long, default_value = "")]
        description: String,

        /// Quantity (whole number)
        #[arg(short, long, default_value = "")]
        quantity: String,
    },

    /// Mark every parcel with a code as retrieved
    Retrieve {
        /// Parcel code
        #[arg(long, default_value = "")]
        code: String,

        /// Exit method: 99, Uber, Lalamove, Carrier, "Customer Pickup"
        #[arg(short, long, default_value = "")]
        method: String,
    },

    /// Show the current stock
    List {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Delete every parcel record
    Clear {
        /// Confirm the wipe
        #[arg(long)]
        yes: bool,
    },

    /// Show stock statistics
    Stats,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Err(err) = run(cli) {
        ui::error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let loaded = config::load_config(cli.config.as_deref())?;
    let database = config::resolve_database(cli.database, loaded.as_ref());

    match cli.command {
        Commands::Init { force } => {
            let config_path = cli.config.unwrap_or_else(config::default_config_path);
            let cfg = ParcelstockConfig {
                database: Some(database.to_string_lossy().to_string()),
            };
            config::write_config(&config_path, &cfg, force)?;
            let store = open_store(database)?;
            ui::success(&format!("Wrote {}", config_path.display()));
            ui::info("Database", &store.path().display().to_string());
        }

        Commands::Add { code, description, quantity } => {
            let parcel = validate::validate_entry(&code, &description, &quantity)?;
            let store = open_store(database)?;
            store.create(&parcel)?;
            ui::success(&format!("{} Parcel {} added to stock", Icons::PACKAGE, parcel.code));
            show_stock(&store)?;
        }

        Commands::Retrieve { code, method } => {
            let (code, method) = validate::validate_exit(&code, &method)?;
            let store = open_store(database)?;
            let updated = store.mark_retrieved(&code, method.as_str())?;
            if updated == 0 {
                ui::warn(&format!("No parcel with code {}", code));
            } else {
                ui::success(&format!(
                    "{} {} parcel(s) with code {} left via {}",
                    Icons::TRUCK, updated, code, method
                ));
            }
            show_stock(&store)?;
        }

        Commands::List { format } => {
            let store = open_store(database)?;
            let rows = store.list_all()?;
            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                show_rows(&rows);
            }
        }

        Commands::Clear { yes } => {
            if !yes {
                anyhow::bail!("refusing to clear the stock without --yes");
            }
            let store = open_store(database)?;
            let deleted = store.clear_all()?;
            ui::success(&format!("{} Stock cleared ({} record(s) removed)", Icons::BROOM, deleted));
            show_stock(&store)?;
        }

        Commands::Stats => {
            let store = open_store(database)?;
            let stats = store.stats()?;
            ui::header(Icons::STATS, &format!("Stock Statistics ({})", store.path().display()));
            println!("{}", ui::stats_table(&stats));
        }
    }

    Ok(())
}

/// Ensure the schema once, before any record operation
fn open_store(database: PathBuf) -> anyhow::Result<ParcelStore> {
    config::ensure_db_dir(&database)?;
    let store = ParcelStore::new(database);
    let added = store.ensure_schema()?;
    if !added.is_empty() {
        ui::info("Added columns", &added.join(", "));
    }
    Ok(store)
}

/// Re-read the full stock after a mutation
fn show_stock(store: &ParcelStore) -> anyhow::Result<()> {
    let rows = store.list_all()?;
    show_rows(&rows);
    Ok(())
}

fn show_rows(rows: &[StockRow]) {
    ui::section(&format!(" {} Items in stock ", Icons::INVENTORY));
    if rows.is_empty() {
        println!("∅ No parcels on record.");
    } else {
        println!("{}", ui::stock_table(rows));
    }
}
