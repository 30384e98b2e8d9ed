//! Adapter for fallible rule functions.

use crate::evaluator::Rule;
use crate::outcome::Outcome;
use std::fmt::Display;
use std::marker::PhantomData;
use tracing::warn;

/// Wraps a fallible rule so that a failure ends evaluation.
///
/// `Ok(outcome)` passes through unchanged; `Err(e)` becomes
/// `Outcome::Terminal(e.to_string())`. The engine itself never catches
/// anything, so this is the place to opt in to that conversion.
///
/// # Examples
///
/// ```
/// use u_rulefold::evaluator::RuleEngine;
/// use u_rulefold::outcome::Outcome;
/// use u_rulefold::rules::Guarded;
///
/// let engine = RuleEngine::new().with_rule(Guarded::new("Half", |n: i64| {
///     if n % 2 == 0 {
///         Ok(Outcome::continuing((n / 2).to_string()))
///     } else {
///         Err(format!("{n} is odd"))
///     }
/// }));
///
/// assert_eq!(engine.evaluate(8), "4");
/// assert_eq!(engine.evaluate(3), "3 is odd");
/// ```
pub struct Guarded<F, E> {
    name: String,
    f: F,
    _error: PhantomData<fn() -> E>,
}

impl<F, E> Guarded<F, E>
where
    F: Fn(i64) -> Result<Outcome, E> + Send + Sync,
    E: Display,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
            _error: PhantomData,
        }
    }
}

impl<F, E> Rule for Guarded<F, E>
where
    F: Fn(i64) -> Result<Outcome, E> + Send + Sync,
    E: Display,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, number: i64) -> Outcome {
        match (self.f)(number) {
            Ok(outcome) => outcome,
            Err(e) => {
                let message = e.to_string();
                warn!(rule = %self.name, number, error = %message, "rule failed, converting to terminal");
                Outcome::Terminal(message)
            }
        }
    }
}
