//! TOML gradebook parser and raw grade input parsing.
//!
//! Loads gradebooks from TOML files, writes them back, and validates them.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GradeInputError, GradebookError};
use crate::model::{Gradebook, Grades, Student, Test};

/// Read raw text input as a grade value.
///
/// Surrounding whitespace is ignored. Infinities are accepted (they clamp
/// like any other value); `NaN` is rejected.
pub fn parse_grade_input(input: &str) -> Result<f64, GradeInputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(GradeInputError::Empty);
    }
    match trimmed.parse::<f64>() {
        Ok(v) if !v.is_nan() => Ok(v),
        _ => Err(GradeInputError::NotANumber(trimmed.to_string())),
    }
}

/// On-disk layout of a gradebook file.
#[derive(Debug, Default, Serialize, Deserialize)]
struct TomlGradebookFile {
    #[serde(default)]
    gradebook: TomlGradebookHeader,
    #[serde(default)]
    tests: Vec<Test>,
    #[serde(default)]
    students: Vec<Student>,
    #[serde(default)]
    grades: BTreeMap<String, Grades>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct TomlGradebookHeader {
    #[serde(default)]
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

/// Parse a TOML file into a `Gradebook`.
pub fn parse_gradebook(path: &Path) -> Result<Gradebook> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read gradebook file: {}", path.display()))?;

    parse_gradebook_str(&content, path)
}

/// Parse a TOML string into a `Gradebook` (useful for testing).
pub fn parse_gradebook_str(content: &str, source_path: &Path) -> Result<Gradebook> {
    let parsed: TomlGradebookFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    Ok(Gradebook {
        name: parsed.gradebook.name,
        tests: parsed.tests,
        students: parsed.students,
        grades: parsed.grades,
        updated_at: parsed.gradebook.updated_at,
    })
}

/// Serialize a gradebook in the same layout `parse_gradebook_str` reads.
pub fn to_toml_string(book: &Gradebook) -> Result<String, GradebookError> {
    let file = TomlGradebookFile {
        gradebook: TomlGradebookHeader {
            name: book.name.clone(),
            updated_at: book.updated_at,
        },
        tests: book.tests.clone(),
        students: book.students.clone(),
        grades: book.grades.clone(),
    };
    Ok(toml::to_string_pretty(&file)?)
}

/// A warning from gradebook validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The student involved (if applicable).
    pub student_id: Option<String>,
    /// The test involved (if applicable).
    pub test_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a gradebook for common issues.
pub fn validate_gradebook(book: &Gradebook) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    let mut seen_tests = HashSet::new();
    for test in &book.tests {
        if !seen_tests.insert(test.id.as_str()) {
            warnings.push(ValidationWarning {
                student_id: None,
                test_id: Some(test.id.clone()),
                message: format!("duplicate test ID: {}", test.id),
            });
        }
        if !test.max_grade.is_finite() || test.max_grade < 0.0 {
            warnings.push(ValidationWarning {
                student_id: None,
                test_id: Some(test.id.clone()),
                message: format!(
                    "max_grade must be a non-negative number, got {}",
                    test.max_grade
                ),
            });
        }
    }

    let mut seen_students = HashSet::new();
    for student in &book.students {
        if !seen_students.insert(student.id.as_str()) {
            warnings.push(ValidationWarning {
                student_id: Some(student.id.clone()),
                test_id: None,
                message: format!("duplicate student ID: {}", student.id),
            });
        }
    }

    for (student_id, grades) in &book.grades {
        if !seen_students.contains(student_id.as_str()) {
            warnings.push(ValidationWarning {
                student_id: Some(student_id.clone()),
                test_id: None,
                message: format!("grades recorded for unknown student: {student_id}"),
            });
        }
        for (test_id, &value) in grades {
            let Some(test) = book.test(test_id) else {
                warnings.push(ValidationWarning {
                    student_id: Some(student_id.clone()),
                    test_id: Some(test_id.clone()),
                    message: format!("grade recorded for unknown test: {test_id}"),
                });
                continue;
            };
            if test.clamp(value) != value {
                warnings.push(ValidationWarning {
                    student_id: Some(student_id.clone()),
                    test_id: Some(test_id.clone()),
                    message: format!(
                        "grade {value} is outside 0..={} and will be clamped",
                        test.upper_bound()
                    ),
                });
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[gradebook]
name = "Algebra I"

[[tests]]
id = "t1"
name = "Quiz 1"
max_grade = 10

[[tests]]
id = "t2"
name = "Midterm"
max_grade = 20.5

[[students]]
id = "s1"
name = "Ada"

[[students]]
id = "s2"
name = "Grace"

[grades.s1]
t1 = 8
t2 = 17.5
"#;

    #[test]
    fn parse_valid_toml() {
        let book = parse_gradebook_str(VALID_TOML, &PathBuf::from("grades.toml")).unwrap();
        assert_eq!(book.name, "Algebra I");
        assert_eq!(book.tests.len(), 2);
        assert_eq!(book.tests[0].max_grade, 10.0);
        assert_eq!(book.tests[1].max_grade, 20.5);
        assert_eq!(book.students[1].name, "Grace");
        assert_eq!(book.grades_for("s1").get("t2"), Some(&17.5));
        assert!(book.grades_for("s2").is_empty());
        assert!(book.updated_at.is_none());
        assert!(validate_gradebook(&book).is_empty());
    }

    #[test]
    fn parse_minimal_toml() {
        let book = parse_gradebook_str("", &PathBuf::from("empty.toml")).unwrap();
        assert!(book.name.is_empty());
        assert!(book.tests.is_empty());
        assert!(book.students.is_empty());
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        let result = parse_gradebook_str(bad, &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn grade_input_parsing() {
        assert_eq!(parse_grade_input("7"), Ok(7.0));
        assert_eq!(parse_grade_input("  7.5 "), Ok(7.5));
        assert_eq!(parse_grade_input("-5"), Ok(-5.0));
        assert_eq!(parse_grade_input("1e1"), Ok(10.0));
        assert_eq!(parse_grade_input("inf"), Ok(f64::INFINITY));
        assert_eq!(parse_grade_input(""), Err(GradeInputError::Empty));
        assert_eq!(parse_grade_input("   "), Err(GradeInputError::Empty));
        assert_eq!(
            parse_grade_input("ten"),
            Err(GradeInputError::NotANumber("ten".into()))
        );
        assert!(parse_grade_input("NaN").is_err());
        assert!(parse_grade_input("7 points").is_err());
    }

    #[test]
    fn save_and_reload_preserves_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grades.toml");

        let mut book = parse_gradebook_str(VALID_TOML, &path).unwrap();
        book.updated_at = Some(Utc::now());
        book.save(&path).unwrap();

        let reloaded = Gradebook::load(&path).unwrap();
        assert_eq!(reloaded, book);
    }

    #[test]
    fn validate_duplicate_ids() {
        let toml = r#"
[[tests]]
id = "same"
max_grade = 5

[[tests]]
id = "same"
max_grade = 5

[[students]]
id = "s1"

[[students]]
id = "s1"
"#;
        let book = parse_gradebook_str(toml, &PathBuf::from("dupes.toml")).unwrap();
        let warnings = validate_gradebook(&book);
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("duplicate test ID")));
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("duplicate student ID")));
    }

    #[test]
    fn validate_negative_max_grade() {
        let toml = r#"
[[tests]]
id = "broken"
max_grade = -4
"#;
        let book = parse_gradebook_str(toml, &PathBuf::from("neg.toml")).unwrap();
        let warnings = validate_gradebook(&book);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].test_id.as_deref(), Some("broken"));
    }

    #[test]
    fn validate_stray_and_out_of_range_grades() {
        let toml = r#"
[[tests]]
id = "t1"
max_grade = 10

[[students]]
id = "s1"

[grades.s1]
t1 = 12
ghost = 3

[grades.nobody]
t1 = 1
"#;
        let book = parse_gradebook_str(toml, &PathBuf::from("stray.toml")).unwrap();
        let warnings = validate_gradebook(&book);
        assert!(warnings.iter().any(|w| w.message.contains("unknown test")));
        assert!(warnings.iter().any(|w| w.message.contains("unknown student")));
        assert!(warnings.iter().any(|w| w.message.contains("will be clamped")));
        assert_eq!(warnings.len(), 3);
    }
}
