//! Diagnostic system for the dispatcher generator.
//!
//! Every diagnostic carries:
//! - an error code for searchability (`screengen explain E1001`)
//! - a clear message (what went wrong)
//! - a primary span (the declaration, case or argument it is anchored at)
//! - optional notes and help text (why, and how to fix it)
//!
//! Fatal diagnostics abort generation for one declaration; warnings travel
//! alongside successful output.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod errors;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use error_code::ErrorCode;
pub use errors::ErrorDocs;

// Derived diagnostics name `Span` through this crate.
pub use screengen_ir::Span;
