//! Two-variant rule outcome.
//!
//! Every rule evaluation yields an [`Outcome`]:
//!
//! - **Continuing**: contributes a (possibly empty) fragment and lets the
//!   next rule run.
//! - **Terminal**: ends evaluation; its payload is the final output and
//!   replaces anything accumulated so far.
//!
//! The combinators on [`Outcome`] (`map`, `bind`, `tee`) only ever touch
//! the continuing path, so a terminal value passes through a pipeline
//! untouched and the closures are never called for it.

mod types;

pub use types::Outcome;
