use profile_scout::Config;

use crate::util::open_store;
use crate::{prompt_yes_no, AppError};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "clear", about = "Forget every remembered profile id")]
pub struct Clear {
    #[clap(long, short, help = "Do not ask for confirmation")]
    yes: bool,
}

impl Clear {
    pub fn run(&self, config: &Config) -> Result<(), AppError> {
        if !self.yes && !prompt_yes_no("Delete all remembered ids?")? {
            println!("Nothing was deleted.");
            return Ok(());
        }

        let mut store = open_store(config)?;
        let count = store.len();
        store.clear()?;
        println!("Forgot {} ids.", count);
        Ok(())
    }
}
