use clap::Parser;

mod cli;
mod commands;
mod error;
mod util;

use cli::Cli;
use commands::Commands;
pub use error::AppError;
pub use util::{load_config, prompt_yes_no, render_report};

#[tokio::main]
async fn main() {
    env_logger::init();

    let args = Cli::parse();

    if let Err(e) = run(args).await {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

async fn run(args: Cli) -> Result<(), AppError> {
    let config = load_config(args.config.as_deref())?;

    match &args.command {
        Commands::Lookup(lookup) => lookup.run(&config).await,
        Commands::List(list) => list.run(&config),
        Commands::Clear(clear) => clear.run(&config),
    }
}
