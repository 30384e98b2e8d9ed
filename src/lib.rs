//! Ordered rule evaluation with short-circuit outcomes.
//!
//! An integer is run through an ordered sequence of rules. Each rule
//! yields an [`Outcome`](outcome::Outcome):
//!
//! - **Continuing**: a (possibly empty) fragment is appended to the result
//!   and the next rule runs.
//! - **Terminal**: evaluation stops; the payload is the whole result.
//!
//! If no rule contributes anything, the result is the number itself.
//!
//! # Modules
//!
//! - [`outcome`]: the two-variant outcome and its combinators
//!   (`map`, `bind`, `tee`, `fold`).
//! - [`evaluator`]: the [`Rule`](evaluator::Rule) trait, the short-circuit
//!   fold, the equivalent operator pipeline, and [`RuleEngine`](evaluator::RuleEngine).
//! - [`rules`]: stock rules, configurable [`RuleSpec`](rules::RuleSpec)
//!   records, de-duplicating [`RuleSet`](rules::RuleSet)s, and the
//!   [`Guarded`](rules::Guarded) adapter for fallible rules.
//! - [`error`]: errors raised while building rule sets.
//!
//! # Example
//!
//! ```
//! use u_rulefold::rules::standard_rules;
//!
//! let engine = standard_rules().into_engine();
//! assert_eq!(engine.evaluate(105), "FizzBuzzBang");
//! assert_eq!(engine.evaluate(42), "The answer");
//! ```
//!
//! # Features
//!
//! - `serde`: (de)serialization of outcomes and rule-set configuration.
//! - `parallel`: rayon-backed [`RuleEngine::par_evaluate_range`](evaluator::RuleEngine).

pub mod error;
pub mod evaluator;
pub mod outcome;
pub mod rules;

pub use error::{Error, Result};
