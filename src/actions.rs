//! GitHub Actions plumbing: step outputs and workflow commands.
//!
//! Outputs are appended to the file `$GITHUB_OUTPUT` points at, using the
//! heredoc form the runner requires for multiline values. Failures are
//! reported with an `::error::` workflow command so the step is annotated
//! in the run log.

use crate::error::{ReleaseNoteError, Result};
use std::env;
use std::fs::OpenOptions;
use std::io::Write;

/// Heredoc delimiter for multiline output values.
const DELIMITER: &str = "__RELEASE_NOTE_EOF__";

/// Append a named step output to `$GITHUB_OUTPUT`.
///
/// Returns `Ok(false)` when `GITHUB_OUTPUT` is unset, i.e. the tool is not
/// running under a workflow; the output is then skipped, not an error.
pub fn set_output(name: &str, value: &str) -> Result<bool> {
    let Some(path) = env::var_os("GITHUB_OUTPUT") else {
        return Ok(false);
    };

    if name.contains(DELIMITER) || value.contains(DELIMITER) {
        return Err(ReleaseNoteError::config(format!(
            "Output '{}' contains the heredoc delimiter",
            name
        )));
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    write!(file, "{}<<{}\n{}\n{}\n", name, DELIMITER, value, DELIMITER)?;
    Ok(true)
}

/// Emit an `::error::` workflow command carrying the failure message.
///
/// The runner requires `%`, `\r`, and `\n` to be escaped in command data.
pub fn set_failed(message: &str) {
    println!("::error::{}", escape_command_data(message));
}

fn escape_command_data(data: &str) -> String {
    data.replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
