//! The `gradebook show` command.

use anyhow::Result;

use gradebook_core::GradeEditor;

use super::{open_session, print_sheet, Target};

pub fn execute(student: String, target: Target) -> Result<()> {
    let mut session = open_session(target)?;

    let student_name = session.book.student(&student)?.name.clone();
    let initial = session.book.grades_for(&student);

    // Read-only: the editor is dropped without any edits, so nothing is written.
    let editor = GradeEditor::open(&mut session.book, student, Some(initial));
    print_sheet(&editor.sheet(&student_name), session.format)
}
