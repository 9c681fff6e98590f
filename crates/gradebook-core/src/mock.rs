//! Recording store for testing.

use chrono::Utc;

use crate::model::{GradeUpdate, Test};
use crate::traits::GradeStore;

/// An in-memory store that keeps every update call it receives.
///
/// Lets tests check exactly what the editor forwarded without a real
/// gradebook behind it.
#[derive(Debug, Clone, Default)]
pub struct RecordingStore {
    tests: Vec<Test>,
    updates: Vec<GradeUpdate>,
}

impl RecordingStore {
    pub fn new(tests: Vec<Test>) -> Self {
        Self {
            tests,
            updates: Vec::new(),
        }
    }

    /// Replace the test list, as if tests were added or removed upstream.
    pub fn set_tests(&mut self, tests: Vec<Test>) {
        self.tests = tests;
    }

    /// All updates received, oldest first.
    pub fn updates(&self) -> &[GradeUpdate] {
        &self.updates
    }

    pub fn last_update(&self) -> Option<&GradeUpdate> {
        self.updates.last()
    }

    /// Most recent value written for a test, across all students.
    pub fn stored(&self, test_id: &str) -> Option<f64> {
        self.updates
            .iter()
            .rev()
            .find(|u| u.test_id == test_id)
            .map(|u| u.value)
    }
}

impl GradeStore for RecordingStore {
    fn tests(&self) -> &[Test] {
        &self.tests
    }

    fn update_grade(&mut self, student_id: &str, test_id: &str, value: f64) {
        self.updates.push(GradeUpdate {
            student_id: student_id.to_string(),
            test_id: test_id.to_string(),
            value,
            at: Utc::now(),
        });
    }
}
