//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Top-level command line
#[derive(Parser)]
#[command(name = "message-search")]
#[command(about = "Search a cached upstream message collection over HTTP", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file (defaults to message-search.yaml plus local overrides)
    #[arg(short, long, global = true, env = "MESSAGE_SEARCH_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP search server
    Serve(ServeArgs),

    /// Run a single search against the upstream and print the page
    Search(SearchArgs),
}

/// Arguments for `serve`
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Host to bind to (overrides config)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for `search`
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to look for; omit to list every message
    pub query: Option<String>,

    /// Page number, starting at 1
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Results per page (defaults to search.default_page_size)
    #[arg(short = 's', long)]
    pub page_size: Option<usize>,
}
