use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FovError {
    #[error("invalid aspect ratio '{0}', expected W:H with positive integers")]
    InvalidAspectRatio(String),
    #[error("unknown game '{0}'")]
    UnknownGame(String),
    #[error("unknown language '{0}', use en or cn")]
    UnknownLocale(String),
}
