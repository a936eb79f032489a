//! Binary entrypoint: convert dates from arguments or stdin lines.
//!
//! Exit status: 0 when every value converted, 1 when any value was rejected
//! or I/O failed, 2 on usage errors (reported by clap).

use clap::Parser;
use isodate_cli::args::Cli;
use isodate_cli::{convert, logging};
use std::io::{self, Cursor, Write};

fn main() {
    let cli = Cli::parse();
    let config = cli.config();

    if let Err(e) = logging::init(config.verbose) {
        let _ = writeln!(io::stderr(), "isodate: logger init failed: {}", e);
    }

    let stdout = io::stdout();
    let out = io::BufWriter::new(stdout.lock());

    let result = if cli.values.is_empty() {
        convert::run(&config, io::stdin().lock(), out)
    } else {
        convert::run(&config, Cursor::new(cli.values.join("\n")), out)
    };

    match result {
        Ok(summary) => {
            log::debug!(
                "converted {} value(s), rejected {}",
                summary.converted,
                summary.failed
            );
            if summary.failed > 0 {
                std::process::exit(1);
            }
        }
        Err(e) => {
            log::error!("{:#}", e);
            std::process::exit(1);
        }
    }
}
