/// Configuration default values
///
/// This module contains all the default values for configuration options,
/// making them easily changeable in one central location.
// Paths
pub const DEFAULT_CONFIG_FILE: &str = "catalog.toml";
pub const DEFAULT_ROOT: &str = ".";
pub const DEFAULT_DATA_DIR: &str = "data";

// README refresher
pub const DEFAULT_README_TEMPLATE: &str = "README.template.md";
pub const DEFAULT_README_OUTPUT: &str = "README.md";
pub const DEFAULT_PLACEHOLDER: &str = "{{LAST_UPDATE}}";
pub const DEFAULT_GIT_COMMAND: &str = "git";

// Stream validator
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_CONCURRENCY: usize = 1;
pub const DEFAULT_SKIP_MISSING: bool = false;
pub const DEFAULT_USER_AGENT: &str = concat!("channel-catalog/", env!("CARGO_PKG_VERSION"));

// Environment overrides, e.g. CATALOG_VALIDATOR__TIMEOUT=5s
pub const ENV_PREFIX: &str = "CATALOG_";
pub const ENV_SEPARATOR: &str = "__";
