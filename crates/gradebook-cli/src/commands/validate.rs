//! The `gradebook validate` command.

use anyhow::Result;

use super::{load_gradebook, Target};
use crate::config::load_config_from;

pub fn execute(target: Target) -> Result<()> {
    let config = load_config_from(target.config.as_deref())?;
    let path = target.gradebook.unwrap_or(config.default_gradebook);
    let book = load_gradebook(&path)?;

    let name = if book.name.is_empty() {
        path.display().to_string()
    } else {
        book.name.clone()
    };
    println!(
        "Gradebook: {} ({} tests, {} students)",
        name,
        book.tests.len(),
        book.students.len()
    );

    let warnings = gradebook_core::parser::validate_gradebook(&book);
    for w in &warnings {
        let prefix = match (&w.student_id, &w.test_id) {
            (Some(s), Some(t)) => format!("  [{s}/{t}]"),
            (Some(id), None) | (None, Some(id)) => format!("  [{id}]"),
            (None, None) => "  ".to_string(),
        };
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Gradebook valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
