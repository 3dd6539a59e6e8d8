//! CLI module for the model registry BFF
//!
//! Provides the `serve` subcommand, which runs the HTTP API.

pub mod serve;

use clap::{Parser, Subcommand};

/// Model registry BFF - HTTP API between the UI and model registries
#[derive(Parser)]
#[command(name = "model-registry-bff")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve(serve::ServeArgs),
}
