//! Commit date lookup through the `git` command-line tool

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::process::Command;
use tracing::debug;

use crate::config::defaults::DEFAULT_GIT_COMMAND;
use crate::errors::{AppError, AppResult};

/// Source of the "last updated" date stamped into the README
#[async_trait]
pub trait CommitDateSource: Send + Sync {
    /// Calendar date of the most recent commit in `repo`
    async fn latest_commit_date(&self, repo: &Path) -> AppResult<NaiveDate>;
}

/// Queries `git log -1 --format=%cs`
pub struct GitCli {
    command: String,
}

impl GitCli {
    pub fn new(command: Option<String>) -> Self {
        Self {
            command: command.unwrap_or_else(|| DEFAULT_GIT_COMMAND.to_string()),
        }
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Parse the `%cs` (short ISO committer date) output of git
pub fn parse_commit_date(stdout: &str) -> AppResult<NaiveDate> {
    let trimmed = stdout.trim();
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").map_err(|e| {
        AppError::external_tool(
            "git",
            format!("unexpected commit date output '{trimmed}': {e}"),
        )
    })
}

#[async_trait]
impl CommitDateSource for GitCli {
    async fn latest_commit_date(&self, repo: &Path) -> AppResult<NaiveDate> {
        debug!("Querying last commit date in {}", repo.display());

        let output = Command::new(&self.command)
            .args(["log", "-1", "--format=%cs"])
            .current_dir(repo)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|e| {
                AppError::external_tool(&self.command, format!("failed to execute: {e}"))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::external_tool(&self.command, stderr.trim_end()));
        }

        parse_commit_date(&String::from_utf8_lossy(&output.stdout))
    }
}
