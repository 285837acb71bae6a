use thiserror::Error;

#[derive(Error, Debug)]
pub enum IssueDeskError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml_ng::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid {kind} '{value}'")]
    InvalidValue { kind: &'static str, value: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Standard input reached end of file while a prompt was waiting.
    #[error("input closed")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, IssueDeskError>;
