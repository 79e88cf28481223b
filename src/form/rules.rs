//! Field rule tables.
//!
//! Both forms are validated by a [`RuleSet`]: an ordered table of fields, each
//! with an ordered list of checks. Every field is evaluated; within a field the
//! first failing check supplies the message, so `required` placed before
//! `min_chars` behaves like an `if / else if` chain.

use regex::Regex;

use super::error_map::ErrorMap;

/// One check against a form snapshot. `Err` carries the message shown for the field.
pub type Check<S> = Box<dyn Fn(&S) -> Result<(), String> + Send + Sync>;

/// Reads one text value out of a snapshot.
pub type Accessor<S> = fn(&S) -> &str;

/// Predicate over a snapshot, used for conditional rules.
pub type Condition<S> = fn(&S) -> bool;

struct FieldRule<S, K> {
    field: K,
    applies: Option<Condition<S>>,
    checks: Vec<Check<S>>,
}

impl<S, K> FieldRule<S, K> {
    fn first_failure(&self, snapshot: &S) -> Option<String> {
        if let Some(applies) = self.applies {
            if !applies(snapshot) {
                return None;
            }
        }
        self.checks.iter().find_map(|check| check(snapshot).err())
    }
}

/// Ordered rule table keyed by field.
pub struct RuleSet<S, K> {
    rules: Vec<FieldRule<S, K>>,
}

impl<S, K: Copy + Ord> Default for RuleSet<S, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, K: Copy + Ord> RuleSet<S, K> {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Add a field whose checks always run.
    pub fn field(mut self, field: K, checks: Vec<Check<S>>) -> Self {
        self.rules.push(FieldRule {
            field,
            applies: None,
            checks,
        });
        self
    }

    /// Add a field whose checks only run while `applies` holds.
    pub fn field_if(mut self, field: K, applies: Condition<S>, checks: Vec<Check<S>>) -> Self {
        self.rules.push(FieldRule {
            field,
            applies: Some(applies),
            checks,
        });
        self
    }

    /// Evaluate every field and collect the failures.
    pub fn validate(&self, snapshot: &S) -> ErrorMap<K> {
        self.rules
            .iter()
            .filter_map(|rule| rule.first_failure(snapshot).map(|msg| (rule.field, msg)))
            .collect()
    }

    /// Evaluate a single field. Fields without rules always pass.
    pub fn validate_field(&self, snapshot: &S, field: K) -> Option<String> {
        self.rules
            .iter()
            .filter(|rule| rule.field == field)
            .find_map(|rule| rule.first_failure(snapshot))
    }

    pub fn fields(&self) -> impl Iterator<Item = K> + '_ {
        self.rules.iter().map(|rule| rule.field)
    }
}

/// Fails when the accessed value is empty. Trimming is the accessor's job.
pub fn required<S: 'static>(get: Accessor<S>, message: &'static str) -> Check<S> {
    Box::new(move |snapshot| {
        if get(snapshot).is_empty() {
            Err(message.to_string())
        } else {
            Ok(())
        }
    })
}

/// Fails when the value has fewer than `min` characters.
pub fn min_chars<S: 'static>(get: Accessor<S>, min: usize, message: &'static str) -> Check<S> {
    Box::new(move |snapshot| {
        if get(snapshot).chars().count() < min {
            Err(message.to_string())
        } else {
            Ok(())
        }
    })
}

/// Fails when the value does not match `pattern`.
pub fn matches<S: 'static>(
    get: Accessor<S>,
    pattern: &'static Regex,
    message: &'static str,
) -> Check<S> {
    Box::new(move |snapshot| {
        if pattern.is_match(get(snapshot)) {
            Ok(())
        } else {
            Err(message.to_string())
        }
    })
}

/// Fails when two accessed values differ.
pub fn equals<S: 'static>(
    get: Accessor<S>,
    other: Accessor<S>,
    message: &'static str,
) -> Check<S> {
    Box::new(move |snapshot| {
        if get(snapshot) == other(snapshot) {
            Ok(())
        } else {
            Err(message.to_string())
        }
    })
}

/// Fails when the predicate does not hold.
pub fn satisfies<S: 'static>(predicate: Condition<S>, message: &'static str) -> Check<S> {
    Box::new(move |snapshot| {
        if predicate(snapshot) {
            Ok(())
        } else {
            Err(message.to_string())
        }
    })
}

/// Runs `check` only while `condition` holds.
pub fn when<S: 'static>(condition: Condition<S>, check: Check<S>) -> Check<S> {
    Box::new(move |snapshot| {
        if condition(snapshot) {
            check(snapshot)
        } else {
            Ok(())
        }
    })
}
