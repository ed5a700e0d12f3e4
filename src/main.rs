use clap::Parser;
use eventdesk::cli::{serve, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Serve => serve::run().await,
    }
}
