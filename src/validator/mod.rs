//! Stream Validator
//!
//! Confirms that every stream URL published in the generated catalogs is
//! reachable. The pipeline is a single pass: extract, check, report.
//!
//! Checks run one at a time by default. With `concurrency > 1` up to that
//! many checks are in flight, but results are still reported in document
//! order. Per-URL network failures are recorded as status `0` and never stop
//! the run.

use std::io::Write;
use std::pin::pin;

use futures::stream::{self, StreamExt};
use tracing::info;

pub mod extractor;
pub mod probe;
pub mod report;

pub use extractor::{apply_limit, collect_urls, extract_stream_urls};
pub use probe::{HttpProbe, ReqwestProbe, resolve_status};
pub use report::{ValidationResult, ValidationSummary};

use crate::config::Config;
use crate::errors::{AppError, AppResult};

pub struct StreamValidator<P> {
    probe: P,
    concurrency: usize,
}

impl StreamValidator<ReqwestProbe> {
    pub fn from_config(config: &Config) -> AppResult<Self> {
        let probe = ReqwestProbe::new(config.validator.timeout, &config.validator.user_agent)?;
        Ok(Self::new(probe, config.validator.concurrency))
    }
}

impl<P: HttpProbe> StreamValidator<P> {
    pub fn new(probe: P, concurrency: usize) -> Self {
        Self {
            probe,
            concurrency: concurrency.max(1),
        }
    }

    /// Check a single URL
    pub async fn check(&self, url: String) -> ValidationResult {
        let status = resolve_status(&self.probe, &url).await;
        ValidationResult { url, status }
    }

    /// Check every URL, writing one report line per URL as results arrive
    /// followed by the conclusion
    pub async fn run<W: Write>(&self, urls: Vec<String>, out: &mut W) -> AppResult<ValidationSummary> {
        info!(
            "Checking {} stream URLs (concurrency {})",
            urls.len(),
            self.concurrency
        );

        let mut summary = ValidationSummary::default();
        let mut results = pin!(
            stream::iter(urls)
                .map(|url| self.check(url))
                .buffered(self.concurrency)
        );

        while let Some(result) = results.next().await {
            writeln!(out, "{result}")
                .and_then(|_| out.flush())
                .map_err(|e| AppError::io("<report>", e))?;
            summary.record(result);
        }

        writeln!(out, "\n{}", summary.conclusion()).map_err(|e| AppError::io("<report>", e))?;

        info!(
            "Checked {} URLs, {} failed",
            summary.checked(),
            summary.failures.len()
        );
        Ok(summary)
    }
}
