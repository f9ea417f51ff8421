//! The `quizhub play` command: the interactive welcome, quiz, result, and
//! admin screens.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use chrono::Datelike;

use quizhub_core::model::ConfigPatch;
use quizhub_core::session::SessionState;
use quizhub_core::traits::KeyValueStore;
use quizhub_core::{App, QuizError, Screen};

use super::{open_app, read_quiz_file, DataLocation};
use crate::terminal::{parse_choice, progress_bar, Terminal};

pub async fn execute(location: &DataLocation, name: Option<String>) -> Result<()> {
    let mut app = open_app(location)?;
    if let Some(name) = name {
        app.set_username(name);
    }

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut term = Terminal::new(stdin.lock(), stdout.lock());
    run(&mut app, &mut term).await
}

/// Drive the screens until the user quits or input ends.
pub async fn run<S, R, W>(app: &mut App<S>, term: &mut Terminal<R, W>) -> Result<()>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    loop {
        let keep_going = match app.screen() {
            Screen::Welcome => welcome(app, term)?,
            Screen::Playing => playing(app, term)?,
            Screen::Result => result(app, term)?,
            Screen::Admin => admin(app, term).await?,
        };
        if !keep_going {
            break;
        }
    }

    term.say(format!(
        "\n© {} {}. All rights reserved.",
        chrono::Local::now().year(),
        app.config().app_name
    ))
}

/// Show a domain error inline; anything else is fatal.
fn show_error<R: BufRead, W: Write>(term: &mut Terminal<R, W>, err: anyhow::Error) -> Result<()> {
    match err.downcast_ref::<QuizError>() {
        Some(e) => term.say(format!("! {e}")),
        None => Err(err),
    }
}

fn welcome<S, R, W>(app: &mut App<S>, term: &mut Terminal<R, W>) -> Result<bool>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    term.say(format!("\n=== {} ===", app.config().app_name))?;
    term.say("Test your knowledge and challenge yourself.")?;

    if app.username().trim().is_empty() {
        let Some(name) = term.ask("Enter your name: ")? else {
            return Ok(false);
        };
        app.set_username(name.trim());
    }

    term.say("\nSelect a quiz")?;
    let quizzes = app.catalog().quizzes();
    if quizzes.is_empty() {
        term.say("  No quizzes available. Ask admin to upload one.")?;
    }
    for (i, quiz) in quizzes.iter().enumerate() {
        term.say(format!(
            "  {}. {} ({} Questions)",
            i + 1,
            quiz.title,
            quiz.questions.len()
        ))?;
    }

    let Some(choice) = term.ask("Quiz number, [n]ame, [a]dmin panel, [q]uit: ")? else {
        return Ok(false);
    };
    match choice.trim() {
        "q" | "quit" => return Ok(false),
        "a" | "admin" => app.enter_admin()?,
        "n" | "name" => app.set_username(""),
        other => match parse_choice(other, app.catalog().len()) {
            Some(index) => {
                let id = app.catalog().quizzes()[index].id.clone();
                if let Err(e) = app.start_quiz(&id) {
                    show_error(term, e)?;
                }
            }
            None => term.say("Unknown choice.")?,
        },
    }
    Ok(true)
}

fn playing<S, R, W>(app: &mut App<S>, term: &mut Terminal<R, W>) -> Result<bool>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    let Some(session) = app.session() else {
        app.back_to_welcome();
        return Ok(true);
    };

    let question = session.current_question();
    let option_count = question.options.len();
    let last = session.is_last_question();

    match session.state() {
        SessionState::AwaitingSelection { selected, .. } => {
            if selected.is_none() {
                term.say(format!(
                    "\n{}  Question {} of {}  {}",
                    session.quiz().title,
                    session.current_index() + 1,
                    session.total_questions(),
                    progress_bar(session.progress_percent())
                ))?;
                term.say(&question.text)?;
                for (i, option) in question.options.iter().enumerate() {
                    term.say(format!("  {}) {}", i + 1, option))?;
                }
            }

            let prompt = format!("Select 1-{option_count}, Enter to submit, [q]uit quiz: ");
            let Some(input) = term.ask(&prompt)? else {
                return Ok(false);
            };
            match input.trim() {
                "q" | "quit" => app.quit_quiz(),
                "" => match app.submit_answer() {
                    Some(feedback) => {
                        let options = &app
                            .session()
                            .map(|s| s.current_question().options.clone())
                            .unwrap_or_default();
                        let answer = options
                            .get(feedback.correct_index)
                            .map(String::as_str)
                            .unwrap_or("(none)");
                        if feedback.correct {
                            term.say("Correct!")?;
                        } else {
                            term.say(format!("Incorrect. The correct answer is: {answer}"))?;
                        }
                        term.say(format!("Explanation: {}", feedback.explanation))?;
                    }
                    None => term.say("Select an option first.")?,
                },
                other => match parse_choice(other, option_count) {
                    Some(index) if app.select_option(index) => {
                        term.say(format!("Selected: {}", question_option(app, index)))?;
                    }
                    _ => term.say(format!("Pick an option between 1 and {option_count}."))?,
                },
            }
        }
        SessionState::Answered { .. } => {
            let prompt = if last {
                "Press Enter to finish, [q]uit quiz: "
            } else {
                "Press Enter for the next question, [q]uit quiz: "
            };
            let Some(input) = term.ask(prompt)? else {
                return Ok(false);
            };
            if matches!(input.trim(), "q" | "quit") {
                app.quit_quiz();
            } else if let Err(e) = app.advance() {
                // Result not saved; the answered question stays up for a retry.
                term.say(format!("! {e:#}"))?;
            }
        }
        SessionState::Finished => app.back_to_welcome(),
    }
    Ok(true)
}

fn question_option<S: KeyValueStore>(app: &App<S>, index: usize) -> String {
    app.session()
        .and_then(|s| s.current_question().options.get(index).cloned())
        .unwrap_or_default()
}

fn result<S, R, W>(app: &mut App<S>, term: &mut Terminal<R, W>) -> Result<bool>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    if let Some(result) = app.last_result() {
        term.say(format!("\n{}", result.rating().message()))?;
        term.say(format!(
            "{}, here is your result for {}",
            result.username, result.quiz_title
        ))?;
        term.say(format!(
            "  Correct: {}   Total: {}   Score: {}%",
            result.score,
            result.total_questions,
            result.percentage()
        ))?;
    }

    let Some(input) = term.ask("Press Enter to go back home, [q]uit: ")? else {
        return Ok(false);
    };
    if matches!(input.trim(), "q" | "quit") {
        return Ok(false);
    }
    app.back_to_welcome();
    Ok(true)
}

async fn admin<S, R, W>(app: &mut App<S>, term: &mut Terminal<R, W>) -> Result<bool>
where
    S: KeyValueStore,
    R: BufRead,
    W: Write,
{
    if !app.is_admin() {
        term.say("\n=== Admin Login ===")?;
        let Some(username) = term.ask("Username (empty to go back): ")? else {
            return Ok(false);
        };
        if username.is_empty() {
            app.exit_admin();
            return Ok(true);
        }
        let Some(password) = term.ask("Password: ")? else {
            return Ok(false);
        };
        if let Err(e) = app.login(&username, &password) {
            term.say(format!("! {e}"))?;
        }
        return Ok(true);
    }

    term.say(format!("\n=== Admin Dashboard: {} ===", app.config().app_name))?;
    let quizzes = app.catalog().quizzes();
    if quizzes.is_empty() {
        term.say("  No quizzes in the catalog.")?;
    }
    for (i, quiz) in quizzes.iter().enumerate() {
        term.say(format!(
            "  {}. {} [{}] ({} Questions)",
            i + 1,
            quiz.title,
            quiz.id,
            quiz.questions.len()
        ))?;
    }

    let Some(input) =
        term.ask("[r]ename app, [i]mport <file>, [d]elete <number>, [l]ogout, [b]ack: ")?
    else {
        return Ok(false);
    };
    let input = input.trim();
    let (command, arg) = input.split_once(' ').unwrap_or((input, ""));
    let arg = arg.trim();

    match command {
        "r" | "rename" => {
            let Some(name) = term.ask("New app name: ")? else {
                return Ok(false);
            };
            match app.update_config(ConfigPatch {
                app_name: Some(name),
            }) {
                Ok(()) => term.say("App name updated!")?,
                Err(e) => show_error(term, e)?,
            }
        }
        "i" | "import" => {
            if arg.is_empty() {
                term.say("Usage: i <path to quiz .json>")?;
                return Ok(true);
            }
            let content = match read_quiz_file(Path::new(arg)).await {
                Ok(content) => content,
                Err(e) => {
                    term.say(format!("! {e:#}"))?;
                    return Ok(true);
                }
            };
            match app.import_quiz(&content) {
                Ok(quiz) => term.say(format!("Quiz \"{}\" added successfully!", quiz.title))?,
                Err(e) => show_error(term, e)?,
            }
        }
        "d" | "delete" => match parse_choice(arg, app.catalog().len()) {
            Some(index) => {
                let id = app.catalog().quizzes()[index].id.clone();
                let mut confirm = |msg: &str| term.confirm_or_decline(msg);
                match app.delete_quiz(&id, &mut confirm) {
                    Ok(Some(quiz)) => term.say(format!("Deleted \"{}\".", quiz.title))?,
                    Ok(None) => term.say("Nothing deleted.")?,
                    Err(e) => show_error(term, e)?,
                }
            }
            None => term.say("Usage: d <quiz number>")?,
        },
        "l" | "logout" => app.logout(),
        "b" | "back" => app.exit_admin(),
        _ => term.say("Unknown choice.")?,
    }
    Ok(true)
}
