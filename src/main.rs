//! employee-import - batch import and HTTP service for employee files.

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use employee_import::api::{AppState, create_router};
use employee_import::batch::import_into;
use employee_import::cli::{Cli, Command, RunArgs, ServeArgs};
use employee_import::config::{ConfigLoader, ImportConfig};
use employee_import::logging;
use employee_import::store::{FileSource, MemoryStore};

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "employee-import failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = ConfigLoader::load_or_default(cli.config.as_ref())?.into_config();

    match cli.command {
        Command::Run(args) => run_batch(config, args),
        Command::Serve(args) => serve(config, args).await,
    }
}

fn run_batch(config: ImportConfig, args: RunArgs) -> Result<(), Box<dyn Error>> {
    let input_path = args.input.unwrap_or(config.input_path);
    let store_path = args.store.or(config.store_path);

    let mut store = match &store_path {
        Some(path) => MemoryStore::load(path)?,
        None => MemoryStore::new(),
    };

    let report = import_into(&FileSource::new(&input_path), &mut store)?;
    if let Some(path) = &store_path {
        store.save(path)?;
    }

    println!(
        "{}: {} lines read, {} imported, {} rejected",
        report.source,
        report.lines_read,
        report.imported(),
        report.rejected()
    );
    for diagnostic in &report.diagnostics {
        println!("  {}", diagnostic);
    }
    Ok(())
}

async fn serve(config: ImportConfig, args: ServeArgs) -> Result<(), Box<dyn Error>> {
    let addr = args.addr.unwrap_or(config.listen_addr);
    let store_path = args.store.or(config.store_path);

    let state = match store_path {
        Some(path) => AppState::new(MemoryStore::load(&path)?).with_snapshot(path),
        None => AppState::new(MemoryStore::new()),
    };

    let listener = tokio::net::TcpListener::bind(addr.as_str()).await?;
    info!(addr = %addr, "Import API listening");
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
