use clap::Parser;

use crate::config::{Config, Format};

#[derive(Parser, Debug)]
#[command(name = "isodate")]
#[command(about = "Convert YYYY-MM-DD dates between text, JSON and XML forms", long_about = None)]
pub struct Cli {
    /// Form of each input value
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub from: Format,

    /// Form of each output value
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub to: Format,

    /// Element name for XML output
    #[arg(long, default_value = "date")]
    pub tag: String,

    /// Debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Values to convert; stdin lines are read when none are given
    pub values: Vec<String>,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            from: self.from,
            to: self.to,
            tag: self.tag.clone(),
            verbose: self.verbose,
        }
    }
}
