//! CLI for the eventdesk backend

pub mod serve;

use clap::{Parser, Subcommand};

/// Eventdesk - event management backend
#[derive(Parser)]
#[command(name = "eventdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the API server
    Serve,
}
