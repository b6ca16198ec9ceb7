use thiserror::Error;

/// Malformed SRT input. Any of these aborts the run before anything is written.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("invalid timestamp '{0}', expected HH:MM:SS,mmm")]
    Timestamp(String),

    #[error("invalid subtitle index '{0}'")]
    Index(String),

    #[error("invalid time range '{0}', expected 'start --> end'")]
    TimeRange(String),

    #[error("subtitle block needs an index line, a time range line and text")]
    TooFewLines,

    #[error("block {block}: {source}")]
    Block {
        block: usize,
        #[source]
        source: Box<ParseError>,
    },
}

#[derive(Error, Debug)]
pub enum SrtShiftError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Subtitle format error: {0}")]
    Parse(#[from] ParseError),

    #[error("Too big shift, please use convenient measures: |{unit}| = {value} must be below {limit}")]
    ShiftTooLarge {
        unit: &'static str,
        value: i64,
        limit: i64,
    },

    #[error("Source is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, SrtShiftError>;
