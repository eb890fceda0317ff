//! List Generator
//!
//! Reads the category data for each document kind and writes the markdown
//! catalog next to the data directory. Each document is rendered completely
//! in memory and then written atomically, so a parse error never leaves a
//! truncated catalog behind.

use std::path::PathBuf;

use tracing::{debug, info};

pub mod markdown;

pub use markdown::{render_document, render_table};

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::{Category, DocumentKind};
use crate::utils::fs::{read_to_string, write_atomic};

/// Outcome of generating one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    pub kind: DocumentKind,
    pub path: PathBuf,
    pub categories: usize,
    pub channels: usize,
}

pub struct ListGenerator {
    root: PathBuf,
    data_dir: PathBuf,
}

impl ListGenerator {
    pub fn new<R: Into<PathBuf>, D: Into<PathBuf>>(root: R, data_dir: D) -> Self {
        Self {
            root: root.into(),
            data_dir: data_dir.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.paths.root.clone(), config.data_dir())
    }

    pub fn data_path(&self, kind: DocumentKind) -> PathBuf {
        self.data_dir.join(kind.render_config().data)
    }

    pub fn output_path(&self, kind: DocumentKind) -> PathBuf {
        self.root.join(kind.render_config().output)
    }

    /// Load and parse the data file for `kind`
    pub fn load_categories(&self, kind: DocumentKind) -> AppResult<Vec<Category>> {
        let path = self.data_path(kind);
        debug!("Reading {} data from {}", kind, path.display());

        let contents = read_to_string(&path)?;
        serde_yaml::from_str(&contents).map_err(|e| AppError::parse(&path, e))
    }

    /// Render the catalog for `kind` without touching the output file
    pub fn render(&self, kind: DocumentKind) -> AppResult<(String, Vec<Category>)> {
        let categories = self.load_categories(kind)?;
        let document = render_document(kind.render_config(), &categories);
        Ok((document, categories))
    }

    /// Generate one document, fully replacing any previous version
    pub fn generate(&self, kind: DocumentKind) -> AppResult<GeneratedDocument> {
        let (document, categories) = self.render(kind)?;
        let path = self.output_path(kind);
        write_atomic(&path, &document)?;

        let generated = GeneratedDocument {
            kind,
            path,
            categories: categories.len(),
            channels: categories.iter().map(Category::channel_count).sum(),
        };
        info!(
            "Generated {} with {} categories and {} channels",
            generated.path.display(),
            generated.categories,
            generated.channels
        );
        Ok(generated)
    }

    /// Generate every known document in order; the first failure aborts
    pub fn generate_all(&self) -> AppResult<Vec<GeneratedDocument>> {
        DocumentKind::ALL
            .iter()
            .map(|kind| self.generate(*kind))
            .collect()
    }
}
