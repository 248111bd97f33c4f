//! `historai history`

use std::io::{self, Write};

use anyhow::Result;

use historai::cli::HistorySource;
use historai::output::format_entry;
use historai::Config;

/// Print parsed history entries, oldest first.
///
/// Without `--limit` every entry is printed.
pub fn handle(config: &Config, source: &HistorySource, json: bool, timestamps: bool) -> Result<()> {
    let entries = super::read_history(config, source, 0)?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for entry in &entries {
        if json {
            serde_json::to_writer(&mut out, entry)?;
            writeln!(out)?;
        } else {
            writeln!(out, "{}", format_entry(entry, timestamps))?;
        }
    }
    out.flush()?;
    Ok(())
}
