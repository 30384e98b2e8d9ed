//! Core trait for rules.

use crate::outcome::Outcome;

/// A pure mapping from a number to an [`Outcome`].
///
/// Rules carry no mutable state; the same rule may be shared by many
/// engines and applied from several threads at once.
///
/// # Examples
///
/// ```
/// use u_rulefold::evaluator::Rule;
/// use u_rulefold::outcome::Outcome;
///
/// struct Even;
///
/// impl Rule for Even {
///     fn name(&self) -> &str { "Even" }
///     fn apply(&self, number: i64) -> Outcome {
///         if number % 2 == 0 {
///             Outcome::continuing("Even")
///         } else {
///             Outcome::empty()
///         }
///     }
/// }
///
/// assert_eq!(Even.apply(4), Outcome::continuing("Even"));
/// ```
pub trait Rule: Send + Sync {
    /// Returns the name of this rule.
    fn name(&self) -> &str;

    /// Evaluates this rule against `number`.
    fn apply(&self, number: i64) -> Outcome;
}

impl<R: Rule + ?Sized> Rule for Box<R> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn apply(&self, number: i64) -> Outcome {
        (**self).apply(number)
    }
}

impl<R: Rule + ?Sized> Rule for &R {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn apply(&self, number: i64) -> Outcome {
        (**self).apply(number)
    }
}

/// A named closure rule.
pub struct FnRule<F> {
    name: String,
    f: F,
}

impl<F> FnRule<F>
where
    F: Fn(i64) -> Outcome + Send + Sync,
{
    pub fn new(name: impl Into<String>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }
}

impl<F> Rule for FnRule<F>
where
    F: Fn(i64) -> Outcome + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, number: i64) -> Outcome {
        (self.f)(number)
    }
}

/// Shorthand for [`FnRule::new`].
pub fn rule_fn<F>(name: impl Into<String>, f: F) -> FnRule<F>
where
    F: Fn(i64) -> Outcome + Send + Sync,
{
    FnRule::new(name, f)
}
