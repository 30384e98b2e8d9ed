//! Ordered rule evaluation with short-circuit.
//!
//! Rules are applied to a number strictly in the order they were given:
//!
//! - A **continuing** outcome appends its fragment to the running result
//!   and evaluation moves on to the next rule.
//! - The first **terminal** outcome ends evaluation. Its payload becomes the
//!   whole result, replacing any fragments accumulated before it, and no
//!   later rule is invoked.
//!
//! When every rule continues with an empty fragment (or there are no rules),
//! the result falls back to the number's decimal form.
//!
//! # Design
//!
//! Order is the only priority mechanism. There is no priority field and no
//! implicit sorting; whoever builds the rule sequence decides precedence.
//!
//! The [`ops`] operators express the same fold as a lazy pipeline
//! (`map` → [`take_through_terminal`] → [`combine`]) and are guaranteed to
//! agree with [`evaluate`] for every input.

mod engine;
pub mod ops;
mod types;

pub use engine::{evaluate, Evaluation, RuleEngine};
pub use ops::{combine, evaluate_composed, take_through_terminal, OutcomeIterExt, TakeThroughTerminal};
pub use types::{rule_fn, FnRule, Rule};
