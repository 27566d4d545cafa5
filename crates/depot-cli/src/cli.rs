use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "depot",
    about = "depot — deduplicating content store with a request ledger",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the depot server
    Serve(ServeArgs),
}

#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind; overrides the config file
    #[arg(long)]
    pub bind: Option<SocketAddr>,
    /// Path to a TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,
}
