//! README Refresher
//!
//! Stamps the date of the latest commit into `README.template.md` and writes
//! the result to `README.md`. Any failure is fatal; nothing is retried.

use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::{info, warn};

pub mod git;

pub use git::{CommitDateSource, GitCli};

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::utils::fs::write_atomic;

/// Replace every occurrence of `placeholder` with `value`
///
/// Returns the rendered text and the number of replacements made.
pub fn render_template(template: &str, placeholder: &str, value: &str) -> (String, usize) {
    let count = template.matches(placeholder).count();
    (template.replace(placeholder, value), count)
}

/// Outcome of a refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshedReadme {
    pub path: PathBuf,
    pub date: NaiveDate,
    pub replacements: usize,
}

pub struct ReadmeRefresher<S> {
    source: S,
    repo: PathBuf,
    template: PathBuf,
    output: PathBuf,
    placeholder: String,
}

impl ReadmeRefresher<GitCli> {
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            GitCli::new(Some(config.readme.git_command.clone())),
            config.paths.root.clone(),
            config.readme_template(),
            config.readme_output(),
            config.readme.placeholder.clone(),
        )
    }
}

impl<S: CommitDateSource> ReadmeRefresher<S> {
    pub fn new(
        source: S,
        repo: PathBuf,
        template: PathBuf,
        output: PathBuf,
        placeholder: String,
    ) -> Self {
        Self {
            source,
            repo,
            template,
            output,
            placeholder,
        }
    }

    pub async fn refresh(&self) -> AppResult<RefreshedReadme> {
        let date = self.source.latest_commit_date(&self.repo).await?;

        let template = tokio::fs::read_to_string(&self.template)
            .await
            .map_err(|e| AppError::io(&self.template, e))?;

        let stamp = date.format("%Y-%m-%d").to_string();
        let (content, replacements) = render_template(&template, &self.placeholder, &stamp);
        if replacements == 0 {
            warn!(
                "Template {} contains no {} placeholder",
                self.template.display(),
                self.placeholder
            );
        }

        write_atomic(&self.output, &content)?;
        info!(
            "Wrote {} with last update {} ({} replacements)",
            self.output.display(),
            stamp,
            replacements
        );

        Ok(RefreshedReadme {
            path: self.output.clone(),
            date,
            replacements,
        })
    }
}
