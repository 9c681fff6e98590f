//! The `gradebook set`, `gradebook inc` and `gradebook dec` commands.

use anyhow::Result;

use gradebook_core::report::format_grade;
use gradebook_core::GradeEditor;

use super::{open_session, print_sheet, Target};

/// A single user action against one test.
#[derive(Debug, Clone)]
pub enum Edit {
    /// Set from raw text input.
    Set(String),
    /// Step up this many times.
    Increment(u32),
    /// Step down this many times.
    Decrement(u32),
}

pub fn execute(student: String, test_id: String, edit: Edit, target: Target) -> Result<()> {
    let mut session = open_session(target)?;

    let student_name = session.book.student(&student)?.name.clone();
    if session.book.test(&test_id).is_none() {
        eprintln!("note: unknown test '{test_id}', nothing changed");
    }
    let initial = session.book.grades_for(&student);

    let mut editor = GradeEditor::open(&mut session.book, student.as_str(), Some(initial));
    let before = editor.record().get(&test_id);

    let applied = match &edit {
        Edit::Set(raw) => editor.set_grade(&test_id, raw).map(|_| 1),
        Edit::Increment(times) => steps(*times, || editor.increment_grade(&test_id)),
        Edit::Decrement(times) => steps(*times, || editor.decrement_grade(&test_id)),
    };

    let after = editor.record().get(&test_id);
    let sheet = editor.sheet(&student_name);
    drop(editor);

    match (applied, before, after) {
        (Some(_), Some(b), Some(a)) => {
            eprintln!("{test_id}: {} -> {}", format_grade(b), format_grade(a))
        }
        (Some(_), None, Some(a)) => eprintln!("{test_id}: {}", format_grade(a)),
        (None, Some(b), _) => {
            eprintln!("{test_id}: unchanged at {}", format_grade(b))
        }
        _ => {}
    }

    if applied.is_some() {
        session.book.save(&session.path)?;
        tracing::info!("saved {}", session.path.display());
    }

    print_sheet(&sheet, session.format)
}

/// Run `step` up to `times` times, stopping at the first refusal.
///
/// Returns the number of accepted steps, or `None` if none were accepted.
fn steps(times: u32, mut step: impl FnMut() -> Option<f64>) -> Option<u32> {
    let mut accepted = 0;
    for _ in 0..times {
        if step().is_none() {
            break;
        }
        accepted += 1;
    }
    (accepted > 0).then_some(accepted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_stops_at_first_refusal() {
        let mut remaining = 3;
        let accepted = steps(10, || {
            if remaining == 0 {
                return None;
            }
            remaining -= 1;
            Some(remaining as f64)
        });
        assert_eq!(accepted, Some(3));
    }

    #[test]
    fn steps_none_when_nothing_accepted() {
        assert_eq!(steps(5, || None), None);
        assert_eq!(steps(0, || Some(1.0)), None);
    }
}
