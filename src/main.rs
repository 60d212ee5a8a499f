//! Carteira main entry point

mod render;

use anyhow::Context;
use carteira_config::{Config, ConfigError};
use carteira_core::{
    CoreError, CoreResult, DashboardSession, DashboardView, DefaultErrorLogger, ErrorContext,
    ErrorLogger, ListSession, ListView, Wallet,
};
use carteira_store::{JsonRecordSource, RecordStore};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tokio::runtime::Runtime;

#[derive(Parser, Debug)]
#[command(name = "carteira")]
#[command(author = "Carteira Contributors")]
#[command(version = "0.1.0")]
#[command(about = "Monthly gains, expenses and balance of a personal wallet", long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "config.yaml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the dashboard of a month
    Dashboard {
        /// Month, 1-12 (defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
        /// Year (defaults to the current year, or the latest year with records)
        #[arg(short, long)]
        year: Option<String>,
        /// Print the view as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the gains or expenses of a month
    List {
        /// entry-balance or exit-balance
        kind: String,
        #[arg(short, long)]
        month: Option<String>,
        #[arg(short, long)]
        year: Option<String>,
        /// Toggle a frequency (recorrente, eventual); repeatable
        #[arg(short, long)]
        toggle: Vec<String>,
        #[arg(long)]
        json: bool,
    },
    /// Print the default configuration
    InitConfig,
}

fn load_config(path: &Path) -> anyhow::Result<(Config, Option<ConfigError>)> {
    match Config::load(path) {
        Ok(config) => Ok((config, None)),
        Err(e @ ConfigError::FileNotFound { .. }) => Ok((Config::default(), Some(e))),
        Err(e) => Err(anyhow::anyhow!("{}", e.to_details())),
    }
}

fn run_dashboard(
    wallet: &Wallet,
    month: Option<String>,
    year: Option<String>,
) -> CoreResult<DashboardView> {
    let mut session = DashboardSession::new(wallet)?;
    if let Some(month) = month {
        session.select_month(&month)?;
    }
    if let Some(year) = year {
        session.select_year(&year)?;
    }
    session.view()
}

fn run_list(
    wallet: &Wallet,
    kind: &str,
    month: Option<String>,
    year: Option<String>,
    toggles: &[String],
) -> CoreResult<ListView> {
    let mut session = ListSession::from_route(wallet, kind)?;
    if let Some(month) = month {
        session.select_month(&month)?;
    }
    if let Some(year) = year {
        session.select_year(&year)?;
    }
    for toggle in toggles {
        session.toggle_frequency(toggle)?;
    }
    session.view()
}

fn report<T>(logger: &dyn ErrorLogger, operation: &str, result: CoreResult<T>) -> anyhow::Result<T> {
    result.map_err(|e| {
        logger.log_error(&e, &ErrorContext::new(operation));
        e.into()
    })
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Command::InitConfig = args.command {
        print!("{}", Config::generate_default());
        return Ok(());
    }

    let (config, missing) = load_config(&args.config)?;
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.as_str()),
    )
    .init();
    if let Some(e) = missing {
        log::warn!("{}, using default configuration", e);
    }

    let gains_path = config.gains_path();
    let expenses_path = config.expenses_path();
    log::info!(
        "Config loaded: gains={}, expenses={}",
        gains_path.display(),
        expenses_path.display()
    );

    let rt = Runtime::new().context("failed to start runtime")?;
    let logger = DefaultErrorLogger;

    let store = rt
        .block_on(RecordStore::load(&JsonRecordSource, &gains_path, &expenses_path))
        .map_err(CoreError::from);
    let store = match store {
        Ok(store) => store,
        Err(e) => {
            let context = ErrorContext::new("load_records")
                .with_data("gains", serde_json::json!(gains_path.to_string_lossy()))
                .with_data("expenses", serde_json::json!(expenses_path.to_string_lossy()));
            logger.log_error(&e, &context);
            return Err(e.into());
        }
    };

    if store.is_empty() {
        logger.log_warning("Record store is empty", &ErrorContext::new("load_records"));
    }

    let wallet = Wallet::from_config(store, &config);

    let output = match args.command {
        Command::Dashboard { month, year, json } => {
            let view = report(&logger, "dashboard", run_dashboard(&wallet, month, year))?;
            if json {
                serde_json::to_string_pretty(&view)?
            } else {
                render::dashboard(&view, wallet.format())?
            }
        }
        Command::List {
            kind,
            month,
            year,
            toggle,
            json,
        } => {
            let view = report(&logger, "list", run_list(&wallet, &kind, month, year, &toggle))?;
            if json {
                serde_json::to_string_pretty(&view)?
            } else {
                render::list(&view)?
            }
        }
        Command::InitConfig => return Ok(()),
    };

    println!("{}", output.trim_end());
    Ok(())
}
