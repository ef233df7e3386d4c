use crate::error::{ReleaseNoteError, Result};
use crate::host::github::DEFAULT_API_URL;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Optional configuration loaded from a `releasenote.toml` file.
///
/// Every field is optional here; requiredness is enforced only after the
/// CLI, file, and GitHub Actions environment layers are merged.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct FileConfig {
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub base: Option<String>,
    pub head: Option<String>,
    pub output_path: Option<String>,
    pub token: Option<String>,
    pub api_url: Option<String>,
}

/// Values supplied on the command line, overriding file and environment.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub owner: Option<String>,
    pub repo: Option<String>,
    pub base: Option<String>,
    pub head: Option<String>,
    pub output_path: Option<String>,
    pub token: Option<String>,
}

/// Fully resolved, validated run configuration.
///
/// Construction via [`Config::resolve`] guarantees every required field is
/// non-empty before the fetch step begins.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub owner: String,
    pub repo: String,
    pub base: String,
    pub head: String,
    pub output_path: PathBuf,
    pub token: Option<String>,
    pub api_url: String,
}

/// The part of a GitHub event payload this tool reads: the base branch of
/// the triggering event and the pull request's head commit.
#[derive(Debug, Deserialize, Default)]
struct EventPayload {
    #[serde(default)]
    base_ref: Option<String>,
    #[serde(default)]
    pull_request: Option<EventPullRequest>,
}

#[derive(Debug, Deserialize)]
struct EventPullRequest {
    head: EventPullRequestHead,
}

#[derive(Debug, Deserialize)]
struct EventPullRequestHead {
    sha: String,
}

/// Loads file configuration or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releasenote.toml` in current directory
/// 3. `.releasenote.toml` in user config directory
/// 4. Empty configuration if no file found
///
/// # Returns
/// * `Ok(FileConfig)` - Loaded or empty configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_file_config(config_path: Option<&str>) -> Result<FileConfig> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./releasenote.toml").exists() {
        fs::read_to_string("./releasenote.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".releasenote.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(FileConfig::default());
        }
    } else {
        return Ok(FileConfig::default());
    };

    toml::from_str(&config_str)
        .map_err(|e| ReleaseNoteError::config(format!("Cannot parse config file: {}", e)))
}

/// Read a GitHub Actions step input, as the runner exposes it: the input
/// name uppercased, spaces replaced with underscores, prefixed `INPUT_`.
fn action_input(name: &str) -> Option<String> {
    let var = format!("INPUT_{}", name.to_uppercase().replace(' ', "_"));
    env::var(var).ok().filter(|v| !v.is_empty())
}

/// Read the event payload the workflow run was triggered with, if any.
///
/// A missing `GITHUB_EVENT_PATH` or absent file yields an empty payload;
/// a present but unparsable file is a configuration error.
fn load_event_payload() -> Result<EventPayload> {
    let Some(path) = env::var_os("GITHUB_EVENT_PATH") else {
        return Ok(EventPayload::default());
    };
    let path = PathBuf::from(path);
    if !path.exists() {
        return Ok(EventPayload::default());
    }

    let payload_str = fs::read_to_string(&path)?;
    serde_json::from_str(&payload_str).map_err(|e| {
        ReleaseNoteError::config(format!("Cannot parse event payload {}: {}", path.display(), e))
    })
}

/// Split `GITHUB_REPOSITORY` ("owner/repo") into its two parts.
fn repository_from_env() -> (Option<String>, Option<String>) {
    match env::var("GITHUB_REPOSITORY") {
        Ok(value) => match value.split_once('/') {
            Some((owner, repo)) => (Some(owner.to_string()), Some(repo.to_string())),
            None => (None, None),
        },
        Err(_) => (None, None),
    }
}

fn pick(
    flag: Option<String>,
    file: Option<String>,
    env_value: Option<String>,
) -> Option<String> {
    flag.or(file).or(env_value)
}

fn require(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ReleaseNoteError::config(format!(
            "Missing required field '{}' (pass --{}, set it in releasenote.toml, or run under GitHub Actions)",
            field,
            field.replace('_', "-")
        ))),
    }
}

impl Config {
    /// Merge CLI overrides, file configuration, and the GitHub Actions
    /// environment into a validated configuration.
    ///
    /// Precedence per field, highest first: CLI flag, config file, Actions
    /// environment. Owner and repo come from `GITHUB_REPOSITORY`, base and
    /// head from the event payload, the output path from the
    /// `release_note_file` step input.
    pub fn resolve(overrides: Overrides, file: FileConfig) -> Result<Config> {
        let payload = load_event_payload()?;
        let (env_owner, env_repo) = repository_from_env();

        let env_base = payload.base_ref;
        let env_head = payload.pull_request.map(|pr| pr.head.sha);
        let env_output = action_input("release_note_file");
        let env_token = env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());

        let owner = require(pick(overrides.owner, file.owner, env_owner), "owner")?;
        let repo = require(pick(overrides.repo, file.repo, env_repo), "repo")?;
        let base = require(pick(overrides.base, file.base, env_base), "base")?;
        let head = require(pick(overrides.head, file.head, env_head), "head")?;
        let output_path = require(
            pick(overrides.output_path, file.output_path, env_output),
            "output_path",
        )?;

        let token = pick(overrides.token, file.token, env_token);
        let api_url = file
            .api_url
            .or_else(|| env::var("GITHUB_API_URL").ok().filter(|u| !u.is_empty()))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Config {
            owner,
            repo,
            base,
            head,
            output_path: PathBuf::from(output_path),
            token,
            api_url,
        })
    }
}
