use profile_scout::{Config, ProfileId};

use crate::util::ask_to_remember;
use crate::{render_report, AppError};

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "lookup", about = "Fetch a profile and show its details")]
pub struct Lookup {
    #[clap(help = "Profile id to look up")]
    id: String,
    #[clap(
        long,
        conflicts_with = "forget",
        help = "Remember an unknown id without asking"
    )]
    remember: bool,
    #[clap(long, help = "Never remember an unknown id")]
    forget: bool,
}

impl Lookup {
    pub async fn run(&self, config: &Config) -> Result<(), AppError> {
        let mut workflow = profile_scout::open(config)?;

        let remember = self.remember;
        let forget = self.forget;
        let mut confirm = |id: &ProfileId| {
            if remember {
                true
            } else if forget {
                false
            } else {
                ask_to_remember(id)
            }
        };

        let report = workflow
            .submit(&self.id, &mut confirm)
            .await
            .ok_or(AppError::BlankProfileId)?;
        render_report(&report);

        Ok(())
    }
}
