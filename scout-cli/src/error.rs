use profile_scout::ScoutError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Couldn't retrieve data directory!")]
    DataDirNotFound,

    #[error("Couldn't load config: {0}")]
    ConfigLoadError(String),

    #[error("Could not open id store: {0}")]
    StoreOpenError(String),

    #[error("Nothing to look up")]
    BlankProfileId,

    #[error(transparent)]
    IoError(#[from] io::Error),

    #[error(transparent)]
    ScoutError(#[from] ScoutError),
}
