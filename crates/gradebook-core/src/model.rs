//! Core data model types for gradebook.
//!
//! Tests carry the bounds every grade is clamped to; the [`Gradebook`]
//! document holds tests, students and stored grades and acts as the
//! application store for the editor.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::GradebookError;
use crate::traits::GradeStore;

/// Grade values keyed by test id.
pub type Grades = BTreeMap<String, f64>;

/// A graded test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Test {
    /// Unique identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Highest grade a student can receive on this test.
    pub max_grade: f64,
}

impl Test {
    pub fn new(id: impl Into<String>, name: impl Into<String>, max_grade: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            max_grade,
        }
    }

    /// Upper bound used for clamping.
    ///
    /// A negative or non-finite `max_grade` collapses the range to `[0, 0]`.
    pub fn upper_bound(&self) -> f64 {
        if self.max_grade.is_finite() && self.max_grade > 0.0 {
            self.max_grade
        } else {
            0.0
        }
    }

    /// Restrict `value` to `[0, upper_bound]`. NaN clamps to 0.
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return 0.0;
        }
        value.clamp(0.0, self.upper_bound())
    }
}

/// A student whose grades live in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A single grade write issued against a store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeUpdate {
    pub student_id: String,
    pub test_id: String,
    pub value: f64,
    pub at: DateTime<Utc>,
}

/// A gradebook document: tests, students and the grades stored for them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Gradebook {
    /// Human-readable name (e.g. the course).
    #[serde(default)]
    pub name: String,
    /// Tests in display order.
    #[serde(default)]
    pub tests: Vec<Test>,
    /// Enrolled students.
    #[serde(default)]
    pub students: Vec<Student>,
    /// Stored grades: student id → test id → value.
    #[serde(default)]
    pub grades: BTreeMap<String, Grades>,
    /// When the last grade update was accepted.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Gradebook {
    /// Load a gradebook from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        crate::parser::parse_gradebook(path)
    }

    /// Write the gradebook to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = crate::parser::to_toml_string(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create directory {}", parent.display())
                })?;
            }
        }
        std::fs::write(path, content)
            .with_context(|| format!("failed to write gradebook to {}", path.display()))?;
        Ok(())
    }

    /// Look up a student by id.
    pub fn student(&self, id: &str) -> Result<&Student, GradebookError> {
        self.students
            .iter()
            .find(|s| s.id == id)
            .ok_or_else(|| GradebookError::UnknownStudent(id.to_string()))
    }

    /// Look up a test by id.
    pub fn test(&self, id: &str) -> Option<&Test> {
        self.tests.iter().find(|t| t.id == id)
    }

    /// Grades stored for a student, empty if none were recorded yet.
    pub fn grades_for(&self, student_id: &str) -> Grades {
        self.grades.get(student_id).cloned().unwrap_or_default()
    }
}

impl GradeStore for Gradebook {
    fn tests(&self) -> &[Test] {
        &self.tests
    }

    fn update_grade(&mut self, student_id: &str, test_id: &str, value: f64) {
        self.grades
            .entry(student_id.to_string())
            .or_default()
            .insert(test_id.to_string(), value);
        self.updated_at = Some(Utc::now());
        tracing::debug!("stored {student_id}/{test_id} = {value}");
    }
}
