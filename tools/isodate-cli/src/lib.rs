//! isodate-cli: line-oriented converter between the text, JSON and XML forms
//! of a `YYYY-MM-DD` date. The binary wires stdin/stdout to `convert::run`.

pub mod args;
pub mod config;
pub mod convert;
pub mod logging;

pub use config::{Config, Format};
