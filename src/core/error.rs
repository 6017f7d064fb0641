use thiserror::Error;

/// Errors surfaced by the game outside of normal play.
///
/// Bad player input never becomes an error; prompts simply ask again.
#[derive(Debug, Error)]
pub enum GameError {
    /// Reading stdin or writing stdout failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Standard input reached end-of-file while a prompt was waiting.
    #[error("input closed")]
    InputClosed,

    /// The config file is not valid TOML for `GameConfig`.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The config parsed but holds values the game cannot run with.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
