//! Television and radio channel catalogs: markdown generation, README
//! refresh and stream reachability checks.

pub mod cli;
pub mod config;
pub mod errors;
pub mod generator;
pub mod models;
pub mod observability;
pub mod readme;
pub mod utils;
pub mod validator;
