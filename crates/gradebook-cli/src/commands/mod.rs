//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use gradebook_core::report::GradeSheet;
use gradebook_core::Gradebook;

use crate::config::{load_config_from, OutputFormat};

pub mod edit;
pub mod init;
pub mod show;
pub mod validate;

/// Options shared by every command that reads a gradebook.
pub struct Target {
    pub gradebook: Option<PathBuf>,
    pub config: Option<PathBuf>,
    pub format: Option<String>,
}

/// A loaded gradebook plus where it came from and how to print it.
pub(crate) struct Session {
    pub path: PathBuf,
    pub book: Gradebook,
    pub format: OutputFormat,
}

pub(crate) fn open_session(target: Target) -> Result<Session> {
    let config = load_config_from(target.config.as_deref())?;

    let path = target.gradebook.unwrap_or(config.default_gradebook);
    let format = match target.format {
        Some(f) => f
            .parse::<OutputFormat>()
            .map_err(|e| anyhow::anyhow!("{}", e))?,
        None => config.default_format,
    };

    let book = load_gradebook(&path)?;
    Ok(Session { path, book, format })
}

pub(crate) fn load_gradebook(path: &Path) -> Result<Gradebook> {
    if !path.exists() {
        anyhow::bail!(
            "gradebook not found: {} (run `gradebook init` to create one)",
            path.display()
        );
    }
    Gradebook::load(path).with_context(|| format!("failed to load {}", path.display()))
}

pub(crate) fn print_sheet(sheet: &GradeSheet, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", sheet.to_json()?),
        OutputFormat::Markdown => print!("{}", sheet.to_markdown()),
        OutputFormat::Text => {
            use comfy_table::{Cell, Table};
            use gradebook_core::report::format_grade;

            println!("{}", sheet.title());

            if sheet.rows.is_empty() {
                println!("No tests.");
            } else {
                let mut table = Table::new();
                table.set_header(vec!["Test", "Name", "Grade", "Max"]);

                for row in &sheet.rows {
                    table.add_row(vec![
                        Cell::new(&row.test_id),
                        Cell::new(&row.name),
                        Cell::new(row.grade.map(format_grade).unwrap_or_else(|| "-".into())),
                        Cell::new(format_grade(row.max_grade)),
                    ]);
                }

                println!("{table}");
            }

            println!("{}", sheet.totals_line());
        }
    }
    Ok(())
}
