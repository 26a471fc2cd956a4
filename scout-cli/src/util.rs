use std::fmt::Write as _;
use std::io::{self, BufRead, Write};
use std::path::Path;

use profile_scout::{
    Config, IdentifierStore, LookupReport, ProfileId, CONFIG_FILE,
    PREFERENCES_FILE,
};

use crate::AppError;

const DATA_FOLDER: &str = "profile-scout";

/// Load the config file given on the command line, or the one in the data
/// directory if it exists. Without a file the store lives in the data
/// directory as well.
pub fn load_config(path: Option<&Path>) -> Result<Config, AppError> {
    let data_dir = dirs::data_dir()
        .map(|dir| dir.join(DATA_FOLDER))
        .ok_or(AppError::DataDirNotFound);

    let discovered = match (path, &data_dir) {
        (Some(path), _) => Some(path.to_path_buf()),
        (None, Ok(dir)) if dir.join(CONFIG_FILE).is_file() => {
            Some(dir.join(CONFIG_FILE))
        }
        _ => None,
    };

    let mut config = Config::load(discovered.as_deref())
        .map_err(|e| AppError::ConfigLoadError(e.to_string()))?;
    if discovered.is_none() {
        config.store_path = data_dir?.join(PREFERENCES_FILE);
    }
    log::debug!("using store at {}", config.store_path.display());
    Ok(config)
}

pub fn open_store(config: &Config) -> Result<IdentifierStore, AppError> {
    IdentifierStore::open(config.store_path.clone())
        .map_err(|e| AppError::StoreOpenError(e.to_string()))
}

/// Ask a yes/no question on the terminal. Anything but "y"/"yes" is no.
pub fn prompt_yes_no(question: &str) -> Result<bool, AppError> {
    print!("{} [y/N] ", question);
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}

pub fn ask_to_remember(id: &ProfileId) -> bool {
    let question = format!(
        "{} has not been looked up before.\nRemember it for autocompletion?",
        id
    );
    prompt_yes_no(&question).unwrap_or_else(|e| {
        log::warn!("could not read answer: {}", e);
        false
    })
}

/// The lines printed for one lookup.
pub fn format_report(report: &LookupReport) -> String {
    let mut out = String::new();
    match &report.outcome {
        Ok(snapshot) => {
            let fields = snapshot.fields();
            let _ = writeln!(out, "Name:        {}", fields.name);
            let _ = writeln!(out, "Friends:     {}", fields.friends);
            let _ = writeln!(out, "Level:       {}", fields.level);
            let _ = writeln!(out, "Games:       {}", fields.games);
            let _ = writeln!(out, "Groups:      {}", fields.groups);
            let _ = writeln!(out, "Badges:      {}", fields.badges);
            if !fields.avatar.is_empty() {
                let _ = writeln!(out, "Avatar:      {}", fields.avatar);
            }
            let _ = writeln!(out, "Profile URL: {}", fields.source);
        }
        Err(_) => {
            let _ = writeln!(out, "Failed to retrieve profile data.");
            let _ =
                writeln!(out, "Check that the id {} is correct.", report.id);
        }
    }
    if report.remembered {
        let _ = writeln!(out, "\n{} saved for autocompletion.", report.id);
    }
    out
}

pub fn render_report(report: &LookupReport) {
    print!("{}", format_report(report));
}
