use profile_scout::Config;

use crate::util::open_store;
use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "list", about = "List remembered profile ids")]
pub struct List {
    #[clap(help = "Only show ids starting with this prefix")]
    prefix: Option<String>,
}

impl List {
    pub fn run(&self, config: &Config) -> Result<(), AppError> {
        let store = open_store(config)?;
        let prefix = self.prefix.as_deref().unwrap_or("");
        for id in store.suggest(prefix) {
            println!("{}", id);
        }
        Ok(())
    }
}
