//! gradebook-core — Grade record model, editor, and store contract.
//!
//! This crate defines the data model, the bounds-checked grade editor, and
//! the derived aggregates that the gradebook CLI builds on.

pub mod editor;
pub mod error;
pub mod mock;
pub mod model;
pub mod parser;
pub mod record;
pub mod report;
pub mod statistics;
pub mod traits;

pub use editor::GradeEditor;
pub use model::{Gradebook, Grades, Student, Test};
pub use record::GradeRecord;
pub use traits::GradeStore;
