//! The store contract the grade editor is built on.
//!
//! The editor never reaches for global state: whoever opens it hands over a
//! [`GradeStore`], either owned or as `&mut` borrow.

use crate::model::Test;

/// Application store holding the canonical tests and grades.
pub trait GradeStore {
    /// Tests in display order. Source of truth for identity and bounds.
    fn tests(&self) -> &[Test];

    /// Persist a single grade value. Fire-and-forget: nothing is returned.
    fn update_grade(&mut self, student_id: &str, test_id: &str, value: f64);
}

impl<S: GradeStore + ?Sized> GradeStore for &mut S {
    fn tests(&self) -> &[Test] {
        (**self).tests()
    }

    fn update_grade(&mut self, student_id: &str, test_id: &str, value: f64) {
        (**self).update_grade(student_id, test_id, value)
    }
}

impl<S: GradeStore + ?Sized> GradeStore for Box<S> {
    fn tests(&self) -> &[Test] {
        (**self).tests()
    }

    fn update_grade(&mut self, student_id: &str, test_id: &str, value: f64) {
        (**self).update_grade(student_id, test_id, value)
    }
}
