//! The `gradebook init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create gradebook.toml
    if std::path::Path::new("gradebook.toml").exists() {
        println!("gradebook.toml already exists, skipping.");
    } else {
        std::fs::write("gradebook.toml", SAMPLE_CONFIG)?;
        println!("Created gradebook.toml");
    }

    // Create example gradebook
    if std::path::Path::new("grades.toml").exists() {
        println!("grades.toml already exists, skipping.");
    } else {
        std::fs::write("grades.toml", EXAMPLE_GRADEBOOK)?;
        println!("Created grades.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit grades.toml with your tests and students");
    println!("  2. Run: gradebook validate");
    println!("  3. Run: gradebook show --student s1");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# gradebook configuration

default_gradebook = "grades.toml"
default_format = "text"
"#;

const EXAMPLE_GRADEBOOK: &str = r#"[gradebook]
name = "Example Course"

[[tests]]
id = "t1"
name = "Quiz 1"
max_grade = 10

[[tests]]
id = "t2"
name = "Midterm"
max_grade = 20

[[students]]
id = "s1"
name = "Ada Lovelace"

[[students]]
id = "s2"
name = "Alan Turing"

[grades.s1]
t1 = 8
"#;
