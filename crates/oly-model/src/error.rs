use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown season: {0}")]
    UnknownSeason(String),
    #[error("unknown sex: {0}")]
    UnknownSex(String),
    #[error("unknown medal: {0}")]
    UnknownMedal(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
