//! Append-style result log, newest entry first.

use chrono::Local;
use std::fs;
use std::io;
use std::path::Path;

/// Add `result` to the log at `path` and echo it to stdout.
///
/// Each entry is prefixed with a local timestamp line. New entries go on
/// top: an existing log is rewritten with the fresh entry above the
/// previous contents, separated by a blank line.
pub fn append_entry(path: &Path, result: &str) -> io::Result<()> {
    let stamp = Local::now().format("%X %x").to_string();
    write_entry(path, &stamp, result)?;
    println!("{}", result);
    Ok(())
}

fn write_entry(path: &Path, stamp: &str, result: &str) -> io::Result<()> {
    if path.exists() {
        let previous = fs::read_to_string(path)?;
        fs::write(path, format!("{}\n{}\n\n{}", stamp, result, previous))
    } else {
        fs::write(path, format!("{}\n{}", stamp, result))
    }
}
