//! The `quizhub admin` command: scripted catalog and config management.

use std::io;

use anyhow::Result;

use quizhub_core::import::lint_quiz;
use quizhub_core::model::ConfigPatch;

use super::{open_app, read_quiz_file, DataLocation};
use crate::terminal::Terminal;
use crate::AdminAction;

pub async fn execute(
    location: &DataLocation,
    username: &str,
    password: &str,
    action: AdminAction,
) -> Result<()> {
    let mut app = open_app(location)?;
    app.enter_admin()?;
    app.login(username, password)?;

    match action {
        AdminAction::Import { file } => {
            let content = read_quiz_file(&file).await?;
            let quiz = app.import_quiz(&content)?;
            println!("Quiz \"{}\" added successfully!", quiz.title);
            println!("  id: {}  questions: {}", quiz.id, quiz.questions.len());
            for w in lint_quiz(&quiz) {
                match &w.question_id {
                    Some(id) => println!("  [{id}] WARNING: {}", w.message),
                    None => println!("  WARNING: {}", w.message),
                }
            }
        }
        AdminAction::Delete { id, yes } => {
            let mut term = Terminal::new(io::stdin().lock(), io::stdout());
            let mut confirm = |message: &str| yes || term.confirm_or_decline(message);
            match app.delete_quiz(&id, &mut confirm)? {
                Some(quiz) => println!("Deleted \"{}\".", quiz.title),
                None => println!("Nothing deleted."),
            }
        }
        AdminAction::SetName { name } => {
            app.update_config(ConfigPatch {
                app_name: Some(name),
            })?;
            println!("App name updated!");
        }
    }

    app.exit_admin();
    Ok(())
}
