//! screengen command-line driver.
//!
//! Reads declarations exported by a front end as JSON, runs the dispatcher
//! generator over them and reports generated source and diagnostics. The
//! binary in `main.rs` only parses arguments and picks output streams; the
//! work lives here so it can be tested against in-memory writers.

pub mod commands;
pub mod load;
pub mod tracing_setup;

pub use load::{load_declarations, parse_declarations, LoadError};
