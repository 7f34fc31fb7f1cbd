//! Public API types shared by the Lispy front ends.
//!
//! Diagnostics are the stable, renderer-agnostic shape of every error that
//! carries a source location: parse failures and the origin of an error
//! value produced during evaluation.

pub mod error;
pub mod options;

pub use error::{Diagnostic, Severity};
pub use options::ParseOptions;
