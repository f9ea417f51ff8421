//! The `quizhub validate` command.

use std::path::PathBuf;

use anyhow::Result;

use quizhub_core::import::{lint_quiz, parse_quiz};

use super::read_quiz_file;

pub async fn execute(path: PathBuf) -> Result<()> {
    let content = read_quiz_file(&path).await?;
    let quiz = parse_quiz(&content)?;

    println!("Quiz: {} ({} questions)", quiz.title, quiz.questions.len());

    let warnings = lint_quiz(&quiz);
    for w in &warnings {
        let prefix = w
            .question_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Quiz file valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
