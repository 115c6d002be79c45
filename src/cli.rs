//! Command line definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Import manager, technician and sales representative records.
#[derive(Debug, Parser)]
#[command(name = "employee-import")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// YAML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Import an employee file into the store
    Run(RunArgs),

    /// Serve the import API over HTTP
    Serve(ServeArgs),
}

/// Arguments for `run`.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Employee file to import (overrides `input_path`)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// JSON snapshot used as the store (overrides `store_path`)
    #[arg(short, long)]
    pub store: Option<PathBuf>,
}

/// Arguments for `serve`.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind (overrides `listen_addr`)
    #[arg(short, long)]
    pub addr: Option<String>,

    /// JSON snapshot used as the store (overrides `store_path`)
    #[arg(short, long)]
    pub store: Option<PathBuf>,
}
