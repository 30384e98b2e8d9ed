//! Stock rule constructors.

use super::set::RuleSet;
use super::types::{Predicate, RuleSpec};

/// "Divisible by `divisor` → continue with `fragment`".
///
/// The rule is named after its fragment.
pub fn divisible_by(divisor: i64, fragment: impl Into<String>) -> RuleSpec {
    let fragment = fragment.into();
    RuleSpec::new(fragment.clone(), Predicate::DivisibleBy(divisor), fragment)
}

/// "Exactly `value` → stop with `output`".
///
/// The rule is named after its output.
pub fn equals(value: i64, output: impl Into<String>) -> RuleSpec {
    let output = output.into();
    RuleSpec::new(output.clone(), Predicate::Equals(value), output).terminal()
}

/// The stock rule set: Fizz (3), Buzz (5), Bang (7), then a terminal
/// "The answer" for exactly 42.
///
/// Returns a fresh set on every call.
pub fn standard_rules() -> RuleSet {
    RuleSet::from_validated(vec![
        divisible_by(3, "Fizz"),
        divisible_by(5, "Buzz"),
        divisible_by(7, "Bang"),
        equals(42, "The answer"),
    ])
}
