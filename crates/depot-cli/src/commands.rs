use colored::Colorize;

use depot_server::{DepotServer, ServerConfig};

use crate::cli::{Cli, Command, ServeArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = ServerConfig::load_or_default(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }

    println!(
        "{} depot server on {}",
        "✓".green().bold(),
        config.bind_addr.to_string().bold()
    );
    println!(
        "  recent listings: {} items, {} requests",
        config.service.recent_item_count.to_string().yellow(),
        config.service.recent_request_count.to_string().yellow()
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(DepotServer::new(config).serve())?;
    Ok(())
}
