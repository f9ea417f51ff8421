//! The `quizhub history` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use super::{open_app, DataLocation};

pub fn execute(location: &DataLocation, limit: Option<usize>) -> Result<()> {
    let app = open_app(location)?;
    let results = app.history().results();

    if results.is_empty() {
        println!("No completed quizzes yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Completed", "User", "Quiz", "Score", "%"]);
    for result in results.iter().take(limit.unwrap_or(usize::MAX)) {
        table.add_row(vec![
            Cell::new(result.completed_at.format("%Y-%m-%d %H:%M:%S")),
            Cell::new(&result.username),
            Cell::new(&result.quiz_title),
            Cell::new(format!("{}/{}", result.score, result.total_questions)),
            Cell::new(format!("{}%", result.percentage())),
        ]);
    }

    println!("{table}");
    Ok(())
}
