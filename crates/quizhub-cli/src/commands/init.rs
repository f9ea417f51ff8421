//! The `quizhub init` command.

use std::path::Path;

use anyhow::Result;

pub fn execute() -> Result<()> {
    write_if_missing(Path::new("quizhub.toml"), SAMPLE_SETTINGS)?;

    std::fs::create_dir_all("quizzes")?;
    write_if_missing(Path::new("quizzes/example.json"), EXAMPLE_QUIZ)?;

    println!("\nNext steps:");
    println!("  1. Run: quizhub validate --file quizzes/example.json");
    println!("  2. Run: quizhub admin --username admin --password <password> import --file quizzes/example.json");
    println!("  3. Run: quizhub play");

    Ok(())
}

fn write_if_missing(path: &Path, content: &str) -> Result<()> {
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, content)?;
        println!("Created {}", path.display());
    }
    Ok(())
}

const SAMPLE_SETTINGS: &str = r#"# quizhub settings

# Directory holding the app config, quiz catalog and result history.
# ${VAR} references are expanded; QUIZHUB_DATA_DIR overrides this value.
data_dir = "./quizhub-data"
"#;

const EXAMPLE_QUIZ: &str = r#"{
  "title": "Solar System Basics",
  "questions": [
    {
      "id": "planets-1",
      "question": "Which planet is closest to the Sun?",
      "options": ["Venus", "Mercury", "Earth", "Mars"],
      "correctIndex": 1,
      "explanation": "Mercury orbits the Sun at about 58 million km."
    },
    {
      "id": "planets-2",
      "question": "Which planet is known as the Red Planet?",
      "options": ["Jupiter", "Saturn", "Mars"],
      "correctIndex": 2,
      "explanation": "Iron oxide on its surface gives Mars its red colour."
    },
    {
      "id": "planets-3",
      "text": "What is the largest planet in the Solar System?",
      "options": ["Jupiter", "Neptune"],
      "correctIndex": 0
    }
  ]
}
"#;
