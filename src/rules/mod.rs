//! Rule catalog and rule-set configuration.
//!
//! Rules are described by [`RuleSpec`] records: a [`Predicate`] on the
//! input number, the output it produces when the predicate holds, and
//! whether that output is continuing or terminal. The choice between
//! continuing and terminal is fixed when the spec is built.
//!
//! A [`RuleSet`] is an ordered, de-duplicated list of specs. Position in the
//! set is the rule's priority. Sets can be appended to and merged with
//! union semantics before being turned into a
//! [`RuleEngine`](crate::evaluator::RuleEngine).
//!
//! [`Guarded`] adapts a fallible rule function into a total rule by turning
//! its errors into terminal outcomes.

mod catalog;
mod guarded;
mod set;
mod types;

pub use catalog::{divisible_by, equals, standard_rules};
pub use guarded::Guarded;
pub use set::RuleSet;
pub use types::{Predicate, RuleSpec};
