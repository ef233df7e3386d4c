use crate::error::{ReleaseNoteError, Result};
use crate::host::{CommitHost, CommitRecord};
use serde::Deserialize;

/// Default API base when `GITHUB_API_URL` is not provided.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// GitHub REST implementation of [CommitHost].
///
/// Uses the compare endpoint
/// `GET /repos/{owner}/{repo}/compare/{base}...{head}` and reads only the
/// fields release-note needs from the response.
pub struct GithubHost {
    client: reqwest::blocking::Client,
    api_url: String,
    token: Option<String>,
}

/// The subset of the compare response this tool reads.
#[derive(Debug, Deserialize)]
struct CompareResponse {
    commits: Vec<ApiCommit>,
}

#[derive(Debug, Deserialize)]
struct ApiCommit {
    sha: String,
    commit: ApiCommitDetail,
}

#[derive(Debug, Deserialize)]
struct ApiCommitDetail {
    message: String,
}

/// GitHub error payloads carry a human-readable `message` field.
#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

impl GithubHost {
    /// Create a client for the given API base URL and optional bearer token.
    pub fn new(api_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("release-note/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ReleaseNoteError::fetch(format!("Cannot build HTTP client: {}", e)))?;

        Ok(GithubHost {
            client,
            api_url: api_url.into(),
            token,
        })
    }

    /// Build the compare endpoint URL for a ref pair.
    fn compare_url(&self, owner: &str, repo: &str, base: &str, head: &str) -> String {
        format!(
            "{}/repos/{}/{}/compare/{}...{}",
            self.api_url.trim_end_matches('/'),
            owner,
            repo,
            base,
            head
        )
    }
}

impl CommitHost for GithubHost {
    fn compare_commits(
        &self,
        owner: &str,
        repo: &str,
        base: &str,
        head: &str,
    ) -> Result<Vec<CommitRecord>> {
        let url = self.compare_url(owner, repo, base, head);

        let mut request = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .map_err(|e| ReleaseNoteError::fetch(format!("Compare request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            // Surface GitHub's own message when the body carries one
            let detail = response
                .json::<ApiError>()
                .map(|err| err.message)
                .unwrap_or_else(|_| "no error detail".to_string());
            return Err(ReleaseNoteError::fetch(format!(
                "GitHub returned {} for compare {}...{}: {}",
                status, base, head, detail
            )));
        }

        let compare: CompareResponse = response
            .json()
            .map_err(|e| ReleaseNoteError::fetch(format!("Cannot parse compare response: {}", e)))?;

        Ok(compare
            .commits
            .into_iter()
            .map(|c| CommitRecord {
                sha: c.sha,
                message: c.commit.message,
            })
            .collect())
    }
}
