//! The grade editor: bounds-checked mutations over a student's record.
//!
//! A [`GradeEditor`] owns the record for one student and a handle to the
//! store. Every accepted mutation is written to the record and forwarded to
//! the store in the same call, so both always observe the same clamped
//! value. Unknown tests and steps past a bound are silent no-ops.

use tracing::debug;

use crate::model::{Grades, Test};
use crate::parser::parse_grade_input;
use crate::record::GradeRecord;
use crate::report::GradeSheet;
use crate::statistics::{self, GradeSummary};
use crate::traits::GradeStore;

/// Editor for one student's grades, backed by an injected store.
pub struct GradeEditor<S> {
    store: S,
    student_id: String,
    initial: Grades,
    record: GradeRecord,
}

impl<S: GradeStore> GradeEditor<S> {
    /// Open an editor for `student_id`, seeding the record from `initial`
    /// grades where present and from each test's maximum otherwise.
    pub fn open(store: S, student_id: impl Into<String>, initial: Option<Grades>) -> Self {
        let initial = initial.unwrap_or_default();
        let record = GradeRecord::seeded(store.tests(), Some(&initial));
        let student_id = student_id.into();
        debug!(
            "opened editor for {student_id} with {} grade(s)",
            record.len()
        );
        Self {
            store,
            student_id,
            initial,
            record,
        }
    }

    pub fn student_id(&self) -> &str {
        &self.student_id
    }

    pub fn record(&self) -> &GradeRecord {
        &self.record
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutable access to the store, e.g. to change its test list before
    /// calling [`reconcile`](Self::reconcile).
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Close the editor and hand the store back.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Bring the record in line with the store's current test list.
    ///
    /// Fills every missing entry in one pass and never overwrites existing
    /// ones. Call this whenever the test list changes.
    pub fn reconcile(&mut self) -> &GradeRecord {
        let filled = self
            .record
            .reconcile(self.store.tests(), Some(&self.initial));
        if filled > 0 {
            debug!("reconciled {filled} new test(s) for {}", self.student_id);
        }
        &self.record
    }

    /// Set a grade from raw text input.
    ///
    /// Input that does not parse as a number counts as 0. Returns the value
    /// that was stored, or `None` if the test is unknown.
    pub fn set_grade(&mut self, test_id: &str, raw: &str) -> Option<f64> {
        let value = parse_grade_input(raw).unwrap_or_else(|e| {
            debug!("{e}, treating as 0");
            0.0
        });
        self.set_grade_value(test_id, value)
    }

    /// Set a grade from an already-parsed number, clamped to the test's range.
    pub fn set_grade_value(&mut self, test_id: &str, value: f64) -> Option<f64> {
        let test = self.find_test(test_id)?;
        let clamped = test.clamp(value);
        self.apply(test_id, clamped);
        Some(clamped)
    }

    /// Raise a grade by one, capped at the test's maximum.
    ///
    /// Returns `None` when the test is unknown, has no recorded entry, or is
    /// already at its maximum.
    pub fn increment_grade(&mut self, test_id: &str) -> Option<f64> {
        let bound = self.find_test(test_id)?.upper_bound();
        let current = self.current(test_id)?;
        if current >= bound {
            return None;
        }
        let next = (current + 1.0).min(bound);
        self.apply(test_id, next);
        Some(next)
    }

    /// Lower a grade by one, floored at 0.
    ///
    /// Returns `None` when the test is unknown, has no recorded entry, or is
    /// already at 0.
    pub fn decrement_grade(&mut self, test_id: &str) -> Option<f64> {
        self.find_test(test_id)?;
        let current = self.current(test_id)?;
        if current <= 0.0 {
            return None;
        }
        let next = (current - 1.0).max(0.0);
        self.apply(test_id, next);
        Some(next)
    }

    pub fn total_grade(&self) -> f64 {
        statistics::total_grade(&self.record)
    }

    pub fn total_achievable(&self) -> f64 {
        statistics::total_achievable(&self.record, self.store.tests())
    }

    pub fn percentage(&self) -> Option<u32> {
        statistics::percentage(self.total_grade(), self.total_achievable())
    }

    pub fn summary(&self) -> GradeSummary {
        GradeSummary::compute(&self.record, self.store.tests())
    }

    /// Per-test rows plus the summary, ready for rendering.
    pub fn sheet(&self, student_name: &str) -> GradeSheet {
        GradeSheet::build(
            &self.student_id,
            student_name,
            self.store.tests(),
            &self.record,
        )
    }

    fn find_test(&self, test_id: &str) -> Option<Test> {
        let test = self.store.tests().iter().find(|t| t.id == test_id).cloned();
        if test.is_none() {
            debug!("ignoring edit for unknown test {test_id}");
        }
        test
    }

    fn current(&self, test_id: &str) -> Option<f64> {
        let current = self.record.get(test_id);
        if current.is_none() {
            debug!("no recorded grade for {test_id}; reconcile first");
        }
        current
    }

    fn apply(&mut self, test_id: &str, value: f64) {
        self.record.insert(test_id, value);
        self.store.update_grade(&self.student_id, test_id, value);
    }
}
