use std::path::{Path, PathBuf};

use async_trait::async_trait;
use channel_catalog::errors::{AppError, AppResult};
use channel_catalog::readme::{CommitDateSource, ReadmeRefresher};
use chrono::NaiveDate;
use tempfile::TempDir;

/// Commit date source returning a canned answer
struct FixedDate(Option<NaiveDate>);

#[async_trait]
impl CommitDateSource for FixedDate {
    async fn latest_commit_date(&self, _repo: &Path) -> AppResult<NaiveDate> {
        self.0
            .ok_or_else(|| AppError::external_tool("git", "fatal: not a git repository"))
    }
}

fn refresher(dir: &TempDir, date: Option<NaiveDate>) -> ReadmeRefresher<FixedDate> {
    ReadmeRefresher::new(
        FixedDate(date),
        dir.path().to_path_buf(),
        dir.path().join("README.template.md"),
        dir.path().join("README.md"),
        "{{LAST_UPDATE}}".to_string(),
    )
}

fn date() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2025, 2, 14)
}

#[tokio::test]
async fn test_refresh_substitutes_every_placeholder() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("README.template.md"),
        "# Listas\n\nÚltima actualización: {{LAST_UPDATE}}\n\n_{{LAST_UPDATE}}_\n",
    )
    .unwrap();

    let refreshed = refresher(&dir, date()).refresh().await.unwrap();

    assert_eq!(refreshed.path, dir.path().join("README.md"));
    assert_eq!(refreshed.replacements, 2);
    assert_eq!(
        std::fs::read_to_string(dir.path().join("README.md")).unwrap(),
        "# Listas\n\nÚltima actualización: 2025-02-14\n\n_2025-02-14_\n"
    );
}

#[tokio::test]
async fn test_template_is_left_untouched() {
    let dir = TempDir::new().unwrap();
    let template = "Updated {{LAST_UPDATE}}\n";
    std::fs::write(dir.path().join("README.template.md"), template).unwrap();

    refresher(&dir, date()).refresh().await.unwrap();

    assert_eq!(
        std::fs::read_to_string(dir.path().join("README.template.md")).unwrap(),
        template
    );
}

#[tokio::test]
async fn test_missing_template() {
    let dir = TempDir::new().unwrap();

    let err = refresher(&dir, date()).refresh().await.unwrap_err();
    match err {
        AppError::FileNotFound { path } => {
            assert_eq!(path, PathBuf::from(dir.path().join("README.template.md")))
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(!dir.path().join("README.md").exists());
}

#[tokio::test]
async fn test_git_failure_is_fatal_and_writes_nothing() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("README.template.md"), "{{LAST_UPDATE}}").unwrap();

    let err = refresher(&dir, None).refresh().await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "External tool error: git - fatal: not a git repository"
    );
    assert!(!dir.path().join("README.md").exists());
}
