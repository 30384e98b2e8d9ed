//! The outcome value and its combinators.

use std::fmt;

/// Result of applying one rule to one number.
///
/// A closed sum: a value is always exactly one of the two variants, and
/// every consumer dispatches with an exhaustive `match` (or [`fold`]).
///
/// [`fold`]: Outcome::fold
///
/// # Examples
///
/// ```
/// use u_rulefold::outcome::Outcome;
///
/// let fizz = Outcome::continuing("Fizz").map(|s| s.to_uppercase());
/// assert_eq!(fizz, Outcome::continuing("FIZZ"));
///
/// let done = Outcome::terminal("The answer").map(|s| s.to_uppercase());
/// assert_eq!(done, Outcome::terminal("The answer"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "value", rename_all = "snake_case"))]
pub enum Outcome {
    /// Keep evaluating; append this fragment to the running result.
    Continuing(String),

    /// Stop evaluating; this is the whole result.
    Terminal(String),
}

impl Outcome {
    /// Creates a non-terminal outcome carrying `fragment` (may be empty).
    pub fn continuing(fragment: impl Into<String>) -> Self {
        Outcome::Continuing(fragment.into())
    }

    /// Creates a terminal outcome carrying the final `output`.
    pub fn terminal(output: impl Into<String>) -> Self {
        Outcome::Terminal(output.into())
    }

    /// The neutral outcome: continuing with an empty fragment.
    pub fn empty() -> Self {
        Outcome::Continuing(String::new())
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::Terminal(_))
    }

    pub fn is_continuing(&self) -> bool {
        matches!(self, Outcome::Continuing(_))
    }

    /// Returns the payload regardless of variant.
    pub fn as_str(&self) -> &str {
        match self {
            Outcome::Continuing(s) | Outcome::Terminal(s) => s,
        }
    }

    /// Consumes the outcome and returns its payload.
    pub fn into_inner(self) -> String {
        match self {
            Outcome::Continuing(s) | Outcome::Terminal(s) => s,
        }
    }

    /// Transforms a continuing fragment.
    ///
    /// A terminal outcome is returned as is and `f` is not called.
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnOnce(String) -> String,
    {
        match self {
            Outcome::Continuing(s) => Outcome::Continuing(f(s)),
            terminal @ Outcome::Terminal(_) => terminal,
        }
    }

    /// Transforms a terminal output, leaving continuing fragments alone.
    pub fn map_terminal<F>(self, f: F) -> Self
    where
        F: FnOnce(String) -> String,
    {
        match self {
            continuing @ Outcome::Continuing(_) => continuing,
            Outcome::Terminal(s) => Outcome::Terminal(f(s)),
        }
    }

    /// Chains a continuing fragment into a new outcome.
    ///
    /// `f` may switch the result to terminal. On a terminal outcome `f` is
    /// never invoked, so any side effects it carries are skipped.
    pub fn bind<F>(self, f: F) -> Self
    where
        F: FnOnce(String) -> Outcome,
    {
        match self {
            Outcome::Continuing(s) => f(s),
            terminal @ Outcome::Terminal(_) => terminal,
        }
    }

    /// Runs `f` on a continuing fragment for its side effect.
    pub fn tee<F>(self, f: F) -> Self
    where
        F: FnOnce(&str),
    {
        if let Outcome::Continuing(s) = &self {
            f(s);
        }
        self
    }

    /// Exhaustive dispatch into a single value.
    pub fn fold<T, C, M>(self, on_continuing: C, on_terminal: M) -> T
    where
        C: FnOnce(String) -> T,
        M: FnOnce(String) -> T,
    {
        match self {
            Outcome::Continuing(s) => on_continuing(s),
            Outcome::Terminal(s) => on_terminal(s),
        }
    }
}

impl Default for Outcome {
    fn default() -> Self {
        Outcome::empty()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
