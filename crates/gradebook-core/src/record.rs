//! The per-student grade record.
//!
//! A [`GradeRecord`] maps test ids to the current grade value. Entries are
//! seeded from initial grades (or the test maximum) and afterwards only
//! changed through the editor, so every value stays inside its test's
//! `[0, max]` range.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Grades, Test};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradeRecord {
    values: BTreeMap<String, f64>,
}

impl GradeRecord {
    /// An empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a record with one entry per test.
    ///
    /// Each entry takes the initial grade when one is supplied, otherwise the
    /// test's maximum.
    pub fn seeded(tests: &[Test], initial: Option<&Grades>) -> Self {
        let mut record = Self::new();
        record.reconcile(tests, initial);
        record
    }

    /// Fill in entries for tests that have none yet.
    ///
    /// Existing entries are left alone. All missing entries are filled in one
    /// pass; returns how many were added.
    pub fn reconcile(&mut self, tests: &[Test], initial: Option<&Grades>) -> usize {
        let mut filled = 0;
        for test in tests {
            if self.values.contains_key(&test.id) {
                continue;
            }
            let value = initial
                .and_then(|grades| grades.get(&test.id).copied())
                .map(|v| test.clamp(v))
                .unwrap_or_else(|| test.upper_bound());
            self.values.insert(test.id.clone(), value);
            filled += 1;
        }
        filled
    }

    /// Current value for a test, if recorded.
    pub fn get(&self, test_id: &str) -> Option<f64> {
        self.values.get(test_id).copied()
    }

    pub fn contains(&self, test_id: &str) -> bool {
        self.values.contains_key(test_id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(test id, value)` pairs ordered by test id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Sum of all recorded values.
    pub fn total(&self) -> f64 {
        self.values.values().fold(0.0, |acc, v| acc + v)
    }

    /// Overwrite an entry. Callers are responsible for clamping.
    pub(crate) fn insert(&mut self, test_id: &str, value: f64) {
        self.values.insert(test_id.to_string(), value);
    }
}
