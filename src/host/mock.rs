use crate::error::{ReleaseNoteError, Result};
use crate::host::{CommitHost, CommitRecord};

/// Mock host for testing without network access
///
/// Returns a preloaded commit list in insertion order, or a configured
/// failure, regardless of the refs passed in.
pub struct MockHost {
    commits: Vec<CommitRecord>,
    failure: Option<String>,
}

impl MockHost {
    /// Create a mock host with an empty compare range
    pub fn new() -> Self {
        MockHost {
            commits: Vec::new(),
            failure: None,
        }
    }

    /// Create a mock host preloaded with messages, in order
    pub fn with_messages(messages: &[&str]) -> Self {
        let mut host = MockHost::new();
        for (i, message) in messages.iter().enumerate() {
            host.add_commit(format!("sha{:04}", i), *message);
        }
        host
    }

    /// Append a commit to the compare range
    pub fn add_commit(&mut self, sha: impl Into<String>, message: impl Into<String>) {
        self.commits.push(CommitRecord {
            sha: sha.into(),
            message: message.into(),
        });
    }

    /// Make every compare call fail with the given message
    pub fn fail_with(&mut self, message: impl Into<String>) {
        self.failure = Some(message.into());
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl CommitHost for MockHost {
    fn compare_commits(
        &self,
        _owner: &str,
        _repo: &str,
        _base: &str,
        _head: &str,
    ) -> Result<Vec<CommitRecord>> {
        if let Some(message) = &self.failure {
            return Err(ReleaseNoteError::fetch(message.clone()));
        }
        Ok(self.commits.clone())
    }
}
