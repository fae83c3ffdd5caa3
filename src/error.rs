use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("no configuration directory available")]
    NoConfigDir,
    #[error("config i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config file: {0}")]
    ConfigParse(#[from] toml::de::Error),
    #[error("could not serialize config: {0}")]
    ConfigWrite(#[from] toml::ser::Error),
    #[error("invalid avatar endpoint: {0}")]
    AvatarUrl(#[from] url::ParseError),
    #[error("avatar request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("avatar request returned HTTP {0}")]
    Status(u16),
}

pub type Result<T> = std::result::Result<T, AppError>;
