//! Grade sheet report with markdown and JSON rendering.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::Test;
use crate::record::GradeRecord;
use crate::statistics::GradeSummary;

/// One student's grades laid out per test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradeSheet {
    pub student_id: String,
    pub student_name: String,
    /// One row per test, in test order.
    pub rows: Vec<SheetRow>,
    pub summary: GradeSummary,
}

/// A single test on the sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetRow {
    pub test_id: String,
    pub name: String,
    /// Current grade, `None` when the record has no entry for this test.
    pub grade: Option<f64>,
    pub max_grade: f64,
}

impl GradeSheet {
    /// Lay out `record` against `tests`.
    pub fn build(
        student_id: &str,
        student_name: &str,
        tests: &[Test],
        record: &GradeRecord,
    ) -> Self {
        let rows = tests
            .iter()
            .map(|t| SheetRow {
                test_id: t.id.clone(),
                name: t.name.clone(),
                grade: record.get(&t.id),
                max_grade: t.upper_bound(),
            })
            .collect();

        Self {
            student_id: student_id.to_string(),
            student_name: student_name.to_string(),
            rows,
            summary: GradeSummary::compute(record, tests),
        }
    }

    /// Human-readable heading, e.g. `Ada (s1)`.
    pub fn title(&self) -> String {
        if self.student_name.is_empty() {
            self.student_id.clone()
        } else {
            format!("{} ({})", self.student_name, self.student_id)
        }
    }

    /// Totals line, e.g. `Total: 25 / 30 (83%)`.
    pub fn totals_line(&self) -> String {
        let mut line = format!(
            "Total: {} / {}",
            format_grade(self.summary.total_grade),
            format_grade(self.summary.total_achievable)
        );
        if let Some(pct) = self.summary.percentage {
            line.push_str(&format!(" ({pct}%)"));
        }
        line
    }

    /// Format the sheet as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!("## {}\n\n", self.title()));

        if self.rows.is_empty() {
            md.push_str("_No tests._\n\n");
        } else {
            md.push_str("| Test | Name | Grade | Max |\n");
            md.push_str("|------|------|-------|-----|\n");
            for row in &self.rows {
                md.push_str(&format!(
                    "| {} | {} | {} | {} |\n",
                    row.test_id,
                    row.name,
                    row.grade.map(format_grade).unwrap_or_else(|| "-".into()),
                    format_grade(row.max_grade)
                ));
            }
            md.push('\n');
        }

        md.push_str(&format!("**{}**\n", self.totals_line()));
        md
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("failed to serialize grade sheet")
    }
}

/// Render a grade without a trailing `.0` for whole numbers.
pub fn format_grade(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}
