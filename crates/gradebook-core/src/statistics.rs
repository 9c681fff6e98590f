//! Derived aggregates over a grade record.
//!
//! All functions here are pure; callers recompute them after every change.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::model::Test;
use crate::record::GradeRecord;

/// Sum of all recorded values.
pub fn total_grade(record: &GradeRecord) -> f64 {
    record.total()
}

/// Sum of the maximum grade over tests that have a recorded entry.
///
/// Each test id counts once even if the list repeats it.
pub fn total_achievable(record: &GradeRecord, tests: &[Test]) -> f64 {
    let mut seen = HashSet::new();
    tests
        .iter()
        .filter(|t| record.contains(&t.id) && seen.insert(t.id.as_str()))
        .map(Test::upper_bound)
        .fold(0.0, |acc, v| acc + v)
}

/// `round(total / achievable * 100)`, or `None` when nothing is achievable.
pub fn percentage(total: f64, achievable: f64) -> Option<u32> {
    if achievable > 0.0 {
        // float → int casts saturate, so out-of-range values land on 0 or u32::MAX
        Some((total / achievable * 100.0).round() as u32)
    } else {
        None
    }
}

/// Snapshot of the derived values for one record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeSummary {
    /// Sum of current grades.
    pub total_grade: f64,
    /// Sum of maxima over graded tests.
    pub total_achievable: f64,
    /// Rounded percentage, absent when nothing is achievable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<u32>,
}

impl GradeSummary {
    /// Compute the summary of `record` against `tests`.
    pub fn compute(record: &GradeRecord, tests: &[Test]) -> Self {
        let total_grade = total_grade(record);
        let total_achievable = total_achievable(record, tests);
        Self {
            total_grade,
            total_achievable,
            percentage: percentage(total_grade, total_achievable),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Grades;

    fn two_tests() -> Vec<Test> {
        vec![Test::new("t1", "Quiz", 10.0), Test::new("t2", "Exam", 20.0)]
    }

    #[test]
    fn full_marks_is_one_hundred_percent() {
        let tests = two_tests();
        let record = GradeRecord::seeded(&tests, None);
        let summary = GradeSummary::compute(&record, &tests);
        assert_eq!(summary.total_grade, 30.0);
        assert_eq!(summary.total_achievable, 30.0);
        assert_eq!(summary.percentage, Some(100));
    }

    #[test]
    fn percentage_rounds_to_nearest() {
        assert_eq!(percentage(25.0, 30.0), Some(83));
        assert_eq!(percentage(1.0, 8.0), Some(13)); // 12.5 rounds up
        assert_eq!(percentage(0.0, 30.0), Some(0));
    }

    #[test]
    fn no_percentage_without_achievable() {
        assert_eq!(percentage(0.0, 0.0), None);
        let summary = GradeSummary::compute(&GradeRecord::new(), &[]);
        assert_eq!(summary.total_grade, 0.0);
        assert_eq!(summary.total_achievable, 0.0);
        assert!(summary.percentage.is_none());
    }

    #[test]
    fn empty_totals_are_positive_zero() {
        let summary = GradeSummary::compute(&GradeRecord::new(), &[]);
        assert!(summary.total_grade.is_sign_positive());
        assert!(summary.total_achievable.is_sign_positive());
        let json = serde_json::to_string(&summary).unwrap();
        assert!(!json.contains("-0"), "{json}");
    }

    #[test]
    fn removed_test_counts_in_total_but_not_achievable() {
        let tests = two_tests();
        let mut record = GradeRecord::seeded(&tests, None);
        // t2 disappears from the store; its entry stays in the record
        record.reconcile(&tests[..1], None);
        let summary = GradeSummary::compute(&record, &tests[..1]);
        assert_eq!(summary.total_grade, 30.0);
        assert_eq!(summary.total_achievable, 10.0);
        assert_eq!(summary.percentage, Some(300));
    }

    #[test]
    fn achievable_only_counts_recorded_tests() {
        let tests = two_tests();
        let record = GradeRecord::seeded(&tests[..1], None);
        assert_eq!(total_achievable(&record, &tests), 10.0);
    }

    #[test]
    fn achievable_counts_duplicate_ids_once() {
        let mut tests = two_tests();
        tests.push(Test::new("t1", "Quiz again", 10.0));
        let record = GradeRecord::seeded(&tests, None);
        assert_eq!(total_achievable(&record, &tests), 30.0);
    }

    #[test]
    fn summary_with_partial_grades() {
        let tests = two_tests();
        let initial: Grades = [("t1".to_string(), 7.0), ("t2".to_string(), 11.0)]
            .into_iter()
            .collect();
        let record = GradeRecord::seeded(&tests, Some(&initial));
        let summary = GradeSummary::compute(&record, &tests);
        assert_eq!(summary.total_grade, 18.0);
        assert_eq!(summary.percentage, Some(60));
    }

    #[test]
    fn summary_json_omits_missing_percentage() {
        let summary = GradeSummary::compute(&GradeRecord::new(), &[]);
        let json = serde_json::to_string(&summary).unwrap();
        assert!(!json.contains("percentage"));
    }
}
