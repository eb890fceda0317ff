//! Utility modules shared by the generator, the README refresher and the
//! stream validator.

pub mod fs;
pub mod status_code_matcher;
pub mod url;

pub use fs::write_atomic;
pub use status_code_matcher::is_reachable;
