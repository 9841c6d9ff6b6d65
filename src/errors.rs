use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("invalid password length {0}: length must not be negative")]
    InvalidLength(i64),

    #[error("secure random source failed: {0}")]
    RandomSource(String),

    #[error("cannot allocate a password of length {0}")]
    TooLong(i64),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not load .env file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("could not determine working directory: {0}")]
    WorkingDir(std::io::Error),

    #[error("no password length given: pass --length or set PASSWORD_LENGTH")]
    MissingLength,

    #[error("PASSWORD_LENGTH is not a valid integer: {value:?}")]
    InvalidLength { value: String },
}

#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("no clipboard provider available on this system")]
    Unavailable,

    #[error("{0}")]
    Write(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Password(#[from] PasswordError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("could not write output: {0}")]
    Output(#[from] std::io::Error),
}
