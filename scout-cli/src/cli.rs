use std::path::PathBuf;

use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(name = "scout-cli")]
#[clap(about = "Look up public profiles and remember their ids", long_about = None)]
pub struct Cli {
    #[clap(
        long,
        global = true,
        value_parser,
        help = "Path to a JSON config file"
    )]
    pub config: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Commands,
}
