//! Sequence operators over outcomes.
//!
//! Evaluation can also be written as a pipeline:
//!
//! ```text
//! rules ──apply──▶ outcomes ──take_through_terminal──▶ truncated ──combine──▶ String
//! ```
//!
//! Each stage is lazy, so a rule past the first terminal outcome is never
//! applied. [`evaluate_composed`] assembles the pipeline and always agrees
//! with [`evaluate`](super::evaluate).

use super::types::Rule;
use crate::outcome::Outcome;
use std::iter::FusedIterator;

/// Iterator adapter that yields outcomes up to and including the first
/// terminal one.
///
/// Created by [`take_through_terminal`] or
/// [`OutcomeIterExt::take_through_terminal`].
#[derive(Debug, Clone)]
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct TakeThroughTerminal<I> {
    iter: I,
    done: bool,
}

impl<I> Iterator for TakeThroughTerminal<I>
where
    I: Iterator<Item = Outcome>,
{
    type Item = Outcome;

    fn next(&mut self) -> Option<Outcome> {
        if self.done {
            return None;
        }
        match self.iter.next() {
            Some(outcome) => {
                self.done = outcome.is_terminal();
                Some(outcome)
            }
            None => {
                self.done = true;
                None
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.done {
            (0, Some(0))
        } else {
            let (lo, hi) = self.iter.size_hint();
            (lo.min(1), hi)
        }
    }
}

impl<I> FusedIterator for TakeThroughTerminal<I> where I: Iterator<Item = Outcome> {}

/// Truncates `outcomes` right after the first terminal outcome.
pub fn take_through_terminal<I>(outcomes: I) -> TakeThroughTerminal<I::IntoIter>
where
    I: IntoIterator<Item = Outcome>,
{
    TakeThroughTerminal {
        iter: outcomes.into_iter(),
        done: false,
    }
}

/// Reduces outcomes to a single string.
///
/// Returns the payload of the first terminal outcome if there is one,
/// otherwise the concatenated continuing fragments, otherwise `fallback`.
pub fn combine<I>(outcomes: I, fallback: impl Into<String>) -> String
where
    I: IntoIterator<Item = Outcome>,
{
    let mut acc = String::new();
    for outcome in outcomes {
        match outcome {
            Outcome::Terminal(output) => return output,
            Outcome::Continuing(fragment) => acc.push_str(&fragment),
        }
    }
    if acc.is_empty() {
        fallback.into()
    } else {
        acc
    }
}

/// Evaluates `rules` against `number` through the operator pipeline.
pub fn evaluate_composed<R: Rule>(rules: &[R], number: i64) -> String {
    let outcomes = rules.iter().map(|r| r.apply(number)).take_through_terminal();
    combine(outcomes, number.to_string())
}

/// Extension methods on iterators of outcomes.
pub trait OutcomeIterExt: Iterator<Item = Outcome> + Sized {
    /// See [`take_through_terminal`].
    fn take_through_terminal(self) -> TakeThroughTerminal<Self> {
        TakeThroughTerminal {
            iter: self,
            done: false,
        }
    }

    /// Applies [`Outcome::map`] to every outcome.
    fn map_fragments<F>(self, mut f: F) -> impl Iterator<Item = Outcome>
    where
        F: FnMut(String) -> String,
    {
        self.map(move |o| o.map(&mut f))
    }
}

impl<I> OutcomeIterExt for I where I: Iterator<Item = Outcome> {}
