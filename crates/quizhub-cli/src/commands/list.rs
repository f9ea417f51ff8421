//! The `quizhub list` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use super::{open_app, DataLocation};

pub fn execute(location: &DataLocation) -> Result<()> {
    let app = open_app(location)?;
    let quizzes = app.catalog().quizzes();

    println!("{}", app.config().app_name);

    if quizzes.is_empty() {
        println!("No quizzes available. Ask admin to upload one.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["#", "ID", "Title", "Questions", "Created"]);
    for (i, quiz) in quizzes.iter().enumerate() {
        table.add_row(vec![
            Cell::new(i + 1),
            Cell::new(&quiz.id),
            Cell::new(&quiz.title),
            Cell::new(quiz.questions.len()),
            Cell::new(quiz.created_at.format("%Y-%m-%d %H:%M")),
        ]);
    }

    println!("{table}");
    Ok(())
}
