//! Ordered, de-duplicated rule sets.

use super::types::RuleSpec;
use crate::error::{Error, Result};
use crate::evaluator::{Rule, RuleEngine};
use tracing::debug;

/// An ordered collection of [`RuleSpec`]s with union semantics.
///
/// Insertion order is evaluation order. Adding a spec that is already
/// present (by equality) is a no-op, so the first occurrence keeps its
/// position.
///
/// # Examples
///
/// ```
/// use u_rulefold::rules::{divisible_by, equals, standard_rules, RuleSet};
///
/// let mut extra = RuleSet::new();
/// extra.push(divisible_by(3, "Fizz")).unwrap(); // already in the standard set
/// extra.push(divisible_by(2, "Even")).unwrap();
///
/// let merged = RuleSet::merge(standard_rules(), extra);
/// assert_eq!(merged.len(), 5);
///
/// let engine = merged.into_engine();
/// assert_eq!(engine.evaluate(6), "FizzEven");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<RuleSpec>", into = "Vec<RuleSpec>"))]
pub struct RuleSet {
    specs: Vec<RuleSpec>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from specs, validating each and dropping duplicates.
    pub fn from_specs<I>(specs: I) -> Result<Self>
    where
        I: IntoIterator<Item = RuleSpec>,
    {
        let mut set = Self::new();
        for spec in specs {
            set.push(spec)?;
        }
        Ok(set)
    }

    /// Wraps specs that are known to be valid and distinct.
    pub(super) fn from_validated(specs: Vec<RuleSpec>) -> Self {
        Self { specs }
    }

    /// Appends `spec` unless an equal spec is already present.
    ///
    /// Returns `Ok(true)` when the spec was added.
    pub fn push(&mut self, spec: RuleSpec) -> Result<bool> {
        spec.validate()?;
        if self.specs.contains(&spec) {
            debug!(rule = spec.name(), "duplicate rule collapsed");
            return Ok(false);
        }
        self.specs.push(spec);
        Ok(true)
    }

    /// Appends every spec of `other` not already present, keeping order.
    pub fn append(&mut self, other: RuleSet) {
        for spec in other.specs {
            if self.specs.contains(&spec) {
                debug!(rule = spec.name(), "duplicate rule collapsed");
            } else {
                self.specs.push(spec);
            }
        }
    }

    /// Ordered union: `first`'s rules, then `second`'s new ones.
    pub fn merge(first: RuleSet, second: RuleSet) -> RuleSet {
        let mut merged = first;
        merged.append(second);
        merged
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RuleSpec> {
        self.specs.iter()
    }

    pub fn as_slice(&self) -> &[RuleSpec] {
        &self.specs
    }

    /// Builds an engine that evaluates this set in order.
    pub fn into_engine(self) -> RuleEngine {
        RuleEngine::from_rules(self.specs)
    }
}

impl TryFrom<Vec<RuleSpec>> for RuleSet {
    type Error = Error;

    fn try_from(specs: Vec<RuleSpec>) -> Result<Self> {
        Self::from_specs(specs)
    }
}

impl From<RuleSet> for Vec<RuleSpec> {
    fn from(set: RuleSet) -> Self {
        set.specs
    }
}

impl IntoIterator for RuleSet {
    type Item = RuleSpec;
    type IntoIter = std::vec::IntoIter<RuleSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.into_iter()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a RuleSpec;
    type IntoIter = std::slice::Iter<'a, RuleSpec>;

    fn into_iter(self) -> Self::IntoIter {
        self.specs.iter()
    }
}
