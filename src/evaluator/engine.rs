//! Rule evaluation engine.

use super::types::Rule;
use crate::outcome::Outcome;
use tracing::{debug, trace};

/// Evaluates `rules` against `number`, in order, with short-circuit.
///
/// Rules are invoked one at a time. The first terminal outcome is returned
/// as the whole result and nothing after it runs. Otherwise the continuing
/// fragments are concatenated; if that is empty the number itself is
/// returned in decimal.
///
/// # Examples
///
/// ```
/// use u_rulefold::evaluator::evaluate;
/// use u_rulefold::rules::standard_rules;
///
/// let rules = standard_rules();
/// assert_eq!(evaluate(rules.as_slice(), 15), "FizzBuzz");
/// assert_eq!(evaluate(rules.as_slice(), 42), "The answer");
/// assert_eq!(evaluate(rules.as_slice(), 1), "1");
/// ```
pub fn evaluate<R: Rule>(rules: &[R], number: i64) -> String {
    let mut acc = String::new();

    for rule in rules {
        match rule.apply(number) {
            Outcome::Terminal(output) => {
                debug!(rule = rule.name(), number, "terminal outcome, stopping");
                return output;
            }
            Outcome::Continuing(fragment) => {
                trace!(rule = rule.name(), number, fragment = %fragment, "continuing");
                acc.push_str(&fragment);
            }
        }
    }

    if acc.is_empty() {
        number.to_string()
    } else {
        acc
    }
}

/// Record of a single evaluation, as produced by [`RuleEngine::trace`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The evaluated number.
    pub number: i64,

    /// Rule name and outcome for every rule that was actually invoked.
    pub outcomes: Vec<(String, Outcome)>,

    /// Index of the rule whose terminal outcome stopped evaluation.
    pub terminated_at: Option<usize>,

    /// Final output (same as [`RuleEngine::evaluate`]).
    pub output: String,
}

/// An ordered, immutable-once-built sequence of rules.
///
/// # Examples
///
/// ```
/// use u_rulefold::evaluator::RuleEngine;
/// use u_rulefold::rules::{divisible_by, equals};
///
/// let engine = RuleEngine::new()
///     .with_rule(divisible_by(3, "Fizz"))
///     .with_rule(divisible_by(5, "Buzz"))
///     .with_rule(equals(42, "The answer"));
///
/// assert_eq!(engine.evaluate(15), "FizzBuzz");
/// assert_eq!(engine.evaluate_range(1, 5), vec!["1", "2", "Fizz", "4", "Buzz"]);
/// ```
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine {
    /// Creates an engine with no rules.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Builds an engine from rules in iteration order.
    pub fn from_rules<R, I>(rules: I) -> Self
    where
        R: Rule + 'static,
        I: IntoIterator<Item = R>,
    {
        Self {
            rules: rules
                .into_iter()
                .map(|r| Box::new(r) as Box<dyn Rule>)
                .collect(),
        }
    }

    /// Appends a rule after all existing ones.
    pub fn with_rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Appends an already boxed rule.
    pub fn with_boxed_rule(mut self, rule: Box<dyn Rule>) -> Self {
        self.rules.push(rule);
        self
    }

    /// Returns the number of rules in this engine.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the names of all rules in order.
    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Evaluates a single number. See [`evaluate`].
    pub fn evaluate(&self, number: i64) -> String {
        evaluate(&self.rules, number)
    }

    /// Evaluates a single number and records every outcome observed.
    ///
    /// Rules after a terminal outcome are not invoked and do not appear
    /// in [`Evaluation::outcomes`].
    pub fn trace(&self, number: i64) -> Evaluation {
        let mut outcomes = Vec::new();
        let mut terminated_at = None;

        for (i, rule) in self.rules.iter().enumerate() {
            let outcome = rule.apply(number);
            let stop = outcome.is_terminal();
            outcomes.push((rule.name().to_string(), outcome));
            if stop {
                terminated_at = Some(i);
                break;
            }
        }

        let output = match terminated_at {
            Some(i) => outcomes[i].1.as_str().to_string(),
            None => {
                let joined: String = outcomes.iter().map(|(_, o)| o.as_str()).collect();
                if joined.is_empty() {
                    number.to_string()
                } else {
                    joined
                }
            }
        };

        Evaluation {
            number,
            outcomes,
            terminated_at,
            output,
        }
    }

    /// Evaluates `count` consecutive numbers starting at `start`.
    ///
    /// Stops early at `i64::MAX` instead of overflowing.
    pub fn evaluate_range(&self, start: i64, count: usize) -> Vec<String> {
        numbers(start, count).map(|n| self.evaluate(n)).collect()
    }

    /// Parallel version of [`evaluate_range`](Self::evaluate_range).
    ///
    /// Output order matches input order.
    #[cfg(feature = "parallel")]
    pub fn par_evaluate_range(&self, start: i64, count: usize) -> Vec<String> {
        use rayon::prelude::*;

        let inputs: Vec<i64> = numbers(start, count).collect();
        inputs.par_iter().map(|&n| self.evaluate(n)).collect()
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .finish()
    }
}

fn numbers(start: i64, count: usize) -> impl Iterator<Item = i64> {
    (0..count).map_while(move |i| i64::try_from(i).ok().and_then(|i| start.checked_add(i)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::rule_fn;
    use crate::rules::{divisible_by, equals, standard_rules};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn fixed(name: &'static str, outcome: Outcome) -> impl Rule {
        rule_fn(name, move |_| outcome.clone())
    }

    #[test]
    fn test_standard_scenarios() {
        let engine = standard_rules().into_engine();
        assert_eq!(engine.evaluate(1), "1");
        assert_eq!(engine.evaluate(3), "Fizz");
        assert_eq!(engine.evaluate(5), "Buzz");
        assert_eq!(engine.evaluate(7), "Bang");
        assert_eq!(engine.evaluate(15), "FizzBuzz");
        assert_eq!(engine.evaluate(105), "FizzBuzzBang");
        assert_eq!(engine.evaluate(42), "The answer");
    }

    #[test]
    fn test_terminal_pre_empts_earlier_match() {
        // "Even" matches 42 first; the terminal rule still decides.
        let engine = RuleEngine::new()
            .with_rule(divisible_by(2, "Even"))
            .with_rule(equals(42, "The answer"));
        assert_eq!(engine.evaluate(42), "The answer");
        assert_eq!(engine.evaluate(4), "Even");
    }

    #[test]
    fn test_terminal_replaces_accumulator() {
        let rules = [
            fixed("A", Outcome::continuing("A")),
            fixed("B", Outcome::continuing("B")),
            fixed("Stop", Outcome::terminal("Z")),
        ];
        assert_eq!(evaluate(&rules, 0), "Z");
    }

    #[test]
    fn test_concatenation_follows_order() {
        let rules = [
            fixed("A", Outcome::continuing("A")),
            fixed("B", Outcome::continuing("B")),
            fixed("C", Outcome::continuing("C")),
        ];
        assert_eq!(evaluate(&rules, 9), "ABC");
    }

    #[test]
    fn test_reordering_changes_output() {
        let bang = || divisible_by(7, "Bang");
        let meh = || divisible_by(3, "Meh");

        let a = RuleEngine::new().with_rule(bang()).with_rule(meh());
        let b = RuleEngine::new().with_rule(meh()).with_rule(bang());
        assert_eq!(a.evaluate(21), "BangMeh");
        assert_eq!(b.evaluate(21), "MehBang");
    }

    #[test]
    fn test_no_rules_falls_back_to_number() {
        let engine = RuleEngine::new();
        assert_eq!(engine.evaluate(17), "17");
        assert_eq!(engine.evaluate(-4), "-4");
    }

    #[test]
    fn test_all_empty_fragments_fall_back_to_number() {
        let rules = [fixed("E1", Outcome::empty()), fixed("E2", Outcome::empty())];
        assert_eq!(evaluate(&rules, 23), "23");
    }

    #[test]
    fn test_rules_after_terminal_never_run() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);

        let engine = RuleEngine::new()
            .with_rule(fixed("Stop", Outcome::terminal("stop")))
            .with_rule(rule_fn("Counted", move |_| {
                counter.fetch_add(1, Ordering::SeqCst);
                Outcome::continuing("late")
            }));

        assert_eq!(engine.evaluate(1), "stop");
        assert_eq!(engine.trace(2).outcomes.len(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_first_terminal_wins() {
        let engine = RuleEngine::new()
            .with_rule(fixed("First", Outcome::terminal("first")))
            .with_rule(fixed("Second", Outcome::terminal("second")));
        assert_eq!(engine.evaluate(0), "first");
    }

    #[test]
    fn test_trace() {
        let engine = standard_rules().into_engine();

        let t = engine.trace(42);
        assert_eq!(t.output, "The answer");
        assert_eq!(t.terminated_at, Some(3));
        assert_eq!(t.outcomes[0], ("Fizz".to_string(), Outcome::continuing("Fizz")));
        assert_eq!(t.outcomes[2], ("Bang".to_string(), Outcome::continuing("Bang")));

        let t = engine.trace(15);
        assert_eq!(t.output, "FizzBuzz");
        assert_eq!(t.terminated_at, None);
        assert_eq!(t.outcomes.len(), 4);
    }

    #[test]
    fn test_trace_agrees_with_evaluate() {
        let engine = standard_rules().into_engine();
        for n in -50..=150 {
            assert_eq!(engine.trace(n).output, engine.evaluate(n), "n = {n}");
        }
    }

    #[test]
    fn test_rule_names() {
        let engine = standard_rules().into_engine();
        assert_eq!(engine.rule_names(), vec!["Fizz", "Buzz", "Bang", "The answer"]);
        assert_eq!(engine.rule_count(), 4);
    }

    #[test]
    fn test_evaluate_range() {
        let engine = standard_rules().into_engine();
        let out = engine.evaluate_range(1, 15);
        assert_eq!(out.len(), 15);
        assert_eq!(out[0], "1");
        assert_eq!(out[2], "Fizz");
        assert_eq!(out[14], "FizzBuzz");
        assert!(engine.evaluate_range(1, 0).is_empty());
    }

    #[test]
    fn test_evaluate_range_saturates() {
        let engine = RuleEngine::new();
        let out = engine.evaluate_range(i64::MAX - 1, 5);
        assert_eq!(out, vec![(i64::MAX - 1).to_string(), i64::MAX.to_string()]);
    }

    #[test]
    fn test_shuffled_rules_keep_every_fragment() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut specs = vec![
            divisible_by(3, "Fizz"),
            divisible_by(5, "Buzz"),
            divisible_by(7, "Bang"),
        ];

        for _ in 0..10 {
            specs.shuffle(&mut rng);
            let expected: String = specs.iter().map(|s| s.output()).collect();
            let engine = RuleEngine::from_rules(specs.clone());
            assert_eq!(engine.evaluate(105), expected);
        }
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        let engine = Arc::new(standard_rules().into_engine());
        let handles: Vec<_> = (0..4)
            .map(|t| {
                let engine = Arc::clone(&engine);
                std::thread::spawn(move || engine.evaluate(15 * (t + 1)))
            })
            .collect();

        for h in handles {
            let out = h.join().unwrap();
            assert!(out.starts_with("FizzBuzz"));
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_par_evaluate_range_matches_sequential() {
        let engine = standard_rules().into_engine();
        assert_eq!(
            engine.par_evaluate_range(-100, 500),
            engine.evaluate_range(-100, 500)
        );
    }
}
