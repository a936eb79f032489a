//! Decode one representation, re-encode as another.

use anyhow::Context;
use isodate::{Date, DateError};
use log::{debug, warn};
use std::io::{BufRead, Write};

use crate::config::{Config, Format};

/// Counts reported once all input has been processed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub converted: usize,
    pub failed: usize,
}

pub fn decode(input: &str, format: Format) -> Result<Date, DateError> {
    match format {
        Format::Text => Date::parse_text(input.as_bytes()),
        Format::Json => Date::decode_json(input.as_bytes()),
        Format::Xml => Date::decode_xml(input),
    }
}

pub fn encode(date: &Date, format: Format, tag: &str) -> Result<String, DateError> {
    match format {
        Format::Text => Ok(date.format()),
        Format::Json => Ok(serde_json::to_string(date)?),
        Format::Xml => date.to_xml(tag),
    }
}

pub fn convert_line(line: &str, config: &Config) -> Result<String, DateError> {
    let date = decode(line, config.from)?;
    encode(&date, config.to, &config.tag)
}

/// Convert every non-blank line of `input`, writing one result per line to
/// `out`. Rejected lines are logged and counted, never written.
pub fn run<R: BufRead, W: Write>(config: &Config, input: R, mut out: W) -> anyhow::Result<Summary> {
    let mut summary = Summary::default();

    for (idx, line) in input.lines().enumerate() {
        let line = line.context("read error")?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match convert_line(trimmed, config) {
            Ok(converted) => {
                debug!("line {}: {} -> {}", idx + 1, trimmed, converted);
                writeln!(out, "{}", converted).context("write error")?;
                summary.converted += 1;
            }
            Err(e) => {
                warn!("line {}: {}", idx + 1, e);
                summary.failed += 1;
            }
        }
    }

    out.flush().context("write error")?;
    Ok(summary)
}
