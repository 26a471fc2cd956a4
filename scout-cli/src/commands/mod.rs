use clap::Subcommand;

mod clear;
mod list;
mod lookup;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Lookup(lookup::Lookup),
    List(list::List),
    Clear(clear::Clear),
}
