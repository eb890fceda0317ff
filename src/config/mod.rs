use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

pub mod defaults;
pub mod duration_serde;

use defaults::*;

use crate::errors::{AppError, AppResult};
use crate::models::DocumentKind;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub readme: ReadmeConfig,
    #[serde(default)]
    pub validator: ValidatorConfig,
}

/// Where the catalog lives on disk
///
/// Every other path in the configuration is resolved against `root`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_root")]
    pub root: PathBuf,
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReadmeConfig {
    #[serde(default = "default_readme_template")]
    pub template: PathBuf,
    #[serde(default = "default_readme_output")]
    pub output: PathBuf,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// Can be a full path (/usr/bin/git) or a command name searched in $PATH
    #[serde(default = "default_git_command")]
    pub git_command: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Total timeout applied to each HEAD and each GET request
    #[serde(default = "default_timeout", with = "duration_serde::duration")]
    pub timeout: Duration,
    /// Number of URLs checked at once; 1 keeps the checks strictly sequential
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Skip target documents that do not exist instead of failing
    #[serde(default = "default_skip_missing")]
    pub skip_missing: bool,
    /// Generated documents whose stream column is checked, in order
    #[serde(default = "default_documents")]
    pub documents: Vec<DocumentKind>,
}

fn default_root() -> PathBuf {
    PathBuf::from(DEFAULT_ROOT)
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn default_readme_template() -> PathBuf {
    PathBuf::from(DEFAULT_README_TEMPLATE)
}

fn default_readme_output() -> PathBuf {
    PathBuf::from(DEFAULT_README_OUTPUT)
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

fn default_git_command() -> String {
    DEFAULT_GIT_COMMAND.to_string()
}

fn default_timeout() -> Duration {
    Duration::from_secs(DEFAULT_TIMEOUT_SECONDS)
}

fn default_concurrency() -> usize {
    DEFAULT_CONCURRENCY
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_skip_missing() -> bool {
    DEFAULT_SKIP_MISSING
}

fn default_documents() -> Vec<DocumentKind> {
    DocumentKind::ALL.to_vec()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            data_dir: default_data_dir(),
        }
    }
}

impl Default for ReadmeConfig {
    fn default() -> Self {
        Self {
            template: default_readme_template(),
            output: default_readme_output(),
            placeholder: default_placeholder(),
            git_command: default_git_command(),
        }
    }
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            concurrency: default_concurrency(),
            user_agent: default_user_agent(),
            skip_missing: default_skip_missing(),
            documents: default_documents(),
        }
    }
}

/// Location of the implicit config file for a catalog root
pub fn default_config_path(root: Option<&Path>) -> PathBuf {
    root.unwrap_or(Path::new(DEFAULT_ROOT))
        .join(DEFAULT_CONFIG_FILE)
}

impl Config {
    /// Load configuration from defaults, an optional TOML file and the environment
    ///
    /// An explicitly requested file must exist. Otherwise `catalog.toml` is
    /// looked up in `root` (the current directory when no root is given) and
    /// is optional.
    pub fn load(config_file: Option<&Path>, root: Option<&Path>) -> AppResult<Self> {
        let path = match config_file {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::FileNotFound {
                        path: path.to_path_buf(),
                    });
                }
                path.to_path_buf()
            }
            None => default_config_path(root),
        };

        if path.exists() {
            info!("Loading configuration from: {}", path.display());
        } else {
            debug!("No config file at {}, using defaults", path.display());
        }

        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(&path))
            .merge(Env::prefixed(ENV_PREFIX).split(ENV_SEPARATOR));

        Self::from_figment(figment)
    }

    /// Extract and validate a configuration from any figment
    pub fn from_figment(figment: Figment) -> AppResult<Self> {
        let config: Config = figment
            .extract()
            .map_err(|e| AppError::configuration(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.validator.concurrency == 0 {
            return Err(AppError::configuration(
                "validator.concurrency must be at least 1",
            ));
        }
        if self.validator.timeout.is_zero() {
            return Err(AppError::configuration(
                "validator.timeout must be greater than zero",
            ));
        }
        if self.readme.placeholder.is_empty() {
            return Err(AppError::configuration("readme.placeholder must not be empty"));
        }
        Ok(())
    }

    /// Override the catalog root, e.g. from a `--root` flag
    pub fn with_root<P: Into<PathBuf>>(mut self, root: P) -> Self {
        self.paths.root = root.into();
        self
    }

    /// Resolve a path relative to the catalog root
    pub fn resolve<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.paths.root.join(path)
    }

    pub fn data_dir(&self) -> PathBuf {
        self.resolve(&self.paths.data_dir)
    }

    pub fn readme_template(&self) -> PathBuf {
        self.resolve(&self.readme.template)
    }

    pub fn readme_output(&self) -> PathBuf {
        self.resolve(&self.readme.output)
    }

    /// Generated documents the validator reads, resolved against the root
    pub fn validator_targets(&self) -> Vec<PathBuf> {
        self.validator
            .documents
            .iter()
            .map(|kind| self.resolve(kind.render_config().output))
            .collect()
    }
}
