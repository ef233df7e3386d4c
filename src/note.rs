//! Release note generation: fetch a compare range, classify each commit,
//! accumulate one line per matching commit, and write the result.

use crate::classify;
use crate::config::Config;
use crate::error::Result;
use crate::host::CommitHost;
use std::fs;
use std::path::Path;

/// Builds a release note from the commit range described by a [Config].
///
/// Generic over [CommitHost] so tests can run against an in-memory host.
pub struct ReleaseNoteGenerator<'a, H: CommitHost> {
    config: &'a Config,
    host: &'a H,
}

impl<'a, H: CommitHost> ReleaseNoteGenerator<'a, H> {
    pub fn new(config: &'a Config, host: &'a H) -> Self {
        ReleaseNoteGenerator { config, host }
    }

    /// Fetch the compare range and build the note text.
    ///
    /// Commits are processed in the order the host returned them; each
    /// classified commit appends one line, unclassified commits are
    /// skipped. An empty range or zero matches yields an empty string,
    /// which is a valid result, not an error.
    pub fn generate(&self) -> Result<String> {
        let commits = self.host.compare_commits(
            &self.config.owner,
            &self.config.repo,
            &self.config.base,
            &self.config.head,
        )?;

        let mut note = String::new();
        for commit in &commits {
            if let Some(line) = classify::format_line(&commit.message) {
                note.push_str(&line);
            }
        }

        Ok(note)
    }
}

/// Write the note verbatim to the output path, truncating existing content.
pub fn write_note(path: &Path, note: &str) -> Result<()> {
    fs::write(path, note)?;
    Ok(())
}
