//! Source-control host abstraction layer
//!
//! This module provides a trait-based abstraction over the one host
//! operation release-note needs: comparing two refs and returning the
//! ordered commits between them.
//!
//! The primary abstraction is the [CommitHost] trait. Concrete
//! implementations include:
//!
//! - [github::GithubHost]: the real implementation against the GitHub
//!   REST compare endpoint
//! - [mock::MockHost]: an in-memory implementation for testing
//!
//! Most code should depend on the [CommitHost] trait rather than a
//! concrete implementation to enable easy testing.

pub mod github;
pub mod mock;

pub use github::GithubHost;
pub use mock::MockHost;

use crate::error::Result;

/// A single commit in a compare range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// The full commit hash
    pub sha: String,
    /// The full commit message (subject and body)
    pub message: String,
}

/// Common host operation trait for abstraction
///
/// Implementations answer one question: which commits are reachable from
/// `head` but not from `base`? The returned order is whatever the host's
/// compare query produced and is preserved by callers, never re-sorted.
pub trait CommitHost {
    /// Get the ordered commits between two refs
    ///
    /// `base` is the exclusive lower bound of the range and `head` the
    /// inclusive upper bound; either may be a branch name, tag, or commit
    /// hash.
    ///
    /// # Returns
    /// * `Ok(Vec<CommitRecord>)` - Commits in the host's compare order
    /// * `Err` - If a ref is invalid or the host cannot be reached
    fn compare_commits(
        &self,
        owner: &str,
        repo: &str,
        base: &str,
        head: &str,
    ) -> Result<Vec<CommitRecord>>;
}
