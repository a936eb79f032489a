//! Converter configuration with sane defaults.

use clap::ValueEnum;

/// One of the three representations a date can take.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Bare `YYYY-MM-DD`.
    #[default]
    Text,
    /// JSON string literal `"YYYY-MM-DD"`.
    Json,
    /// Single element `<tag>YYYY-MM-DD</tag>`.
    Xml,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Form of each input value.
    pub from: Format,
    /// Form of each output value.
    pub to: Format,
    /// Element name used when writing XML.
    pub tag: String,
    /// Log at debug level instead of info.
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            from: Format::Text,
            to: Format::Text,
            tag: "date".to_string(),
            verbose: false,
        }
    }
}
