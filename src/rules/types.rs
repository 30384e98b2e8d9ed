//! Rule configuration records.

use crate::error::{Error, Result};
use crate::evaluator::Rule;
use crate::outcome::Outcome;

/// Condition a rule checks against the input number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Predicate {
    /// Holds when the number is a multiple of the divisor.
    DivisibleBy(i64),

    /// Holds when the number equals the value exactly.
    Equals(i64),
}

impl Predicate {
    /// Tests `number` against this predicate.
    ///
    /// A zero divisor never matches; such specs are rejected by
    /// [`RuleSpec::validate`] anyway.
    pub fn matches(self, number: i64) -> bool {
        match self {
            Predicate::DivisibleBy(d) => d != 0 && number.wrapping_rem(d) == 0,
            Predicate::Equals(v) => number == v,
        }
    }
}

/// A configurable rule: "when `predicate` holds, produce `output`".
///
/// When the predicate does not hold the rule continues with an empty
/// fragment. Two specs are equal when all their fields are equal, which
/// is what [`RuleSet`](super::RuleSet) uses to collapse duplicates.
///
/// # Examples
///
/// ```
/// use u_rulefold::evaluator::Rule;
/// use u_rulefold::outcome::Outcome;
/// use u_rulefold::rules::{Predicate, RuleSpec};
///
/// let fizz = RuleSpec::new("Fizz", Predicate::DivisibleBy(3), "Fizz");
/// assert_eq!(fizz.apply(9), Outcome::continuing("Fizz"));
///
/// let answer = RuleSpec::new("Answer", Predicate::Equals(42), "The answer").terminal();
/// assert_eq!(answer.apply(42), Outcome::terminal("The answer"));
/// assert_eq!(answer.apply(41), Outcome::empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleSpec {
    name: String,
    predicate: Predicate,
    output: String,
    #[cfg_attr(feature = "serde", serde(default))]
    terminal: bool,
}

impl RuleSpec {
    /// Creates a continuing rule.
    pub fn new(name: impl Into<String>, predicate: Predicate, output: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            predicate,
            output: output.into(),
            terminal: false,
        }
    }

    /// Makes a match end evaluation with this rule's output.
    pub fn terminal(mut self) -> Self {
        self.terminal = true;
        self
    }

    /// Makes a match contribute a fragment and let evaluation continue.
    pub fn continuing(mut self) -> Self {
        self.terminal = false;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn predicate(&self) -> Predicate {
        self.predicate
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Checks that this spec can be evaluated.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(Error::EmptyName);
        }
        if self.predicate == Predicate::DivisibleBy(0) {
            return Err(Error::ZeroDivisor {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

impl Rule for RuleSpec {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, number: i64) -> Outcome {
        if !self.predicate.matches(number) {
            Outcome::empty()
        } else if self.terminal {
            Outcome::terminal(self.output.as_str())
        } else {
            Outcome::continuing(self.output.as_str())
        }
    }
}
