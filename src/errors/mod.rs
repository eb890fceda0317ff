//! Centralized error handling for the channel catalog tools
//!
//! Every fallible library operation returns [`AppResult`]. The binaries wrap
//! these in `anyhow` at the process edge so a fatal error prints a diagnostic
//! and exits non-zero.
//!
//! # Error Categories
//!
//! - **FileNotFound**: a data file, template or target document is missing
//! - **Parse**: a data file does not deserialize into categories
//! - **ExternalTool**: the `git` query failed
//! - **Probe**: a single stream check failed at the network level; the
//!   validator recovers these into status `0` and never aborts on them
//!
//! # Usage
//!
//! ```rust
//! use channel_catalog::errors::{AppError, AppResult};
//!
//! fn example_function() -> AppResult<String> {
//!     Err(AppError::configuration("concurrency must be at least 1"))
//! }
//! ```

pub mod types;

pub use types::*;

/// Convenience type alias for Results using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Convenience type alias for single stream probe results
pub type ProbeResult<T> = Result<T, ProbeError>;
