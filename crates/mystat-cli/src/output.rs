//! Terminal output.
//!
//! Portal payloads are written to stdout as JSON so they can be piped into
//! other tools. Everything meant for a human (progress, status, errors) goes
//! to stderr.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Status line after a command changed something on the portal.
pub fn success(msg: &str) {
    eprintln!("{} {}", "✓".green(), msg);
}

/// Status line for a failed command, with its full context chain.
pub fn error(err: &anyhow::Error) {
    eprintln!("{} {:#}", "✗".red(), err);
}

/// Progress note shown while waiting on the portal.
pub fn progress(msg: &str) {
    eprintln!("{}", msg.dimmed());
}

/// Aligned `label: value` lines for a short human summary on stdout.
pub fn fields(rows: &[(&str, String)]) {
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, value) in rows {
        let label = format!("{:>width$}", label, width = width);
        println!("{}: {}", label.dimmed(), value);
    }
}

/// Write a payload to stdout as one line of JSON, or indented when `pretty`.
pub fn json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", text);
    Ok(())
}
