use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;

use commands::serve;

#[derive(Parser)]
#[command(name = "cloudkitchen")]
#[command(about = "Shanghai Cloud Kitchen business plan API server")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:8001, 127.0.0.1:8080).
        /// Overrides CLOUDKITCHEN_BIND_ADDRESS.
        #[arg(short, long)]
        bind_address: Option<String>,

        /// Seed the business plan before serving
        #[arg(long)]
        seed: bool,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        match self.command {
            Commands::Serve { bind_address, seed } => {
                serve(bind_address, seed).await?;
            }
        }
        Ok(())
    }
}
