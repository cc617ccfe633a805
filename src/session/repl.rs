//! Interactive form: one command per line, last result kept in a
//! `SessionSlot` that is threaded through the loop by value.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::completion::CompletionBackend;
use crate::error::AppError;
use crate::output::{Presenter, export_path, write_export};
use crate::syllabus::CourseDuration;

use super::{SessionSlot, submit};

const HELP: &str = "Commands:
  new            fill in the form and generate a syllabus
  show           show the last generated syllabus again
  save [PATH]    save the last syllabus as a text file
  help           show this list
  quit           leave the session";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    New,
    Show,
    Save(Option<PathBuf>),
    Help,
    Quit,
    Unknown(String),
}

fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };
    let command = match word.to_ascii_lowercase().as_str() {
        "new" | "generate" | "g" => Command::New,
        "show" | "s" => Command::Show,
        "save" | "download" => {
            Command::Save((!rest.is_empty()).then(|| PathBuf::from(rest)))
        }
        "help" | "h" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Unknown(word.to_string()),
    };
    Some(command)
}

/// Read one line after printing `label`; `None` on end of input
fn ask(input: &mut impl BufRead, out: &mut impl Write, label: &str) -> Result<Option<String>, AppError> {
    write!(out, "{label}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// Run the interactive session until `quit` or end of input.
///
/// Returns the final slot so callers (and tests) can inspect it.
pub(crate) fn run_session(
    backend: &dyn CompletionBackend,
    input: &mut impl BufRead,
    out: &mut impl Write,
    presenter: Presenter,
    output_dir: Option<&Path>,
) -> Result<SessionSlot, AppError> {
    let mut slot = SessionSlot::default();

    presenter.note(out, "👋 Welcome to the Course Syllabus Generator!")?;
    writeln!(
        out,
        "Select a subject and duration to generate a detailed, structured course syllabus."
    )?;
    writeln!(out, "{HELP}")?;

    loop {
        let Some(line) = ask(input, out, "\n> ")? else {
            break;
        };
        let Some(command) = parse_command(&line) else {
            continue;
        };

        match command {
            Command::New => {
                let Some(subject) = ask(input, out, "Subject (name or #N from `options`): ")? else {
                    break;
                };
                let default = CourseDuration::default();
                let Some(raw_duration) = ask(input, out, &format!("Duration [{default}]: "))?
                else {
                    break;
                };
                let duration = if raw_duration.trim().is_empty() {
                    default
                } else {
                    match raw_duration.parse::<CourseDuration>() {
                        Ok(duration) => duration,
                        Err(e) => {
                            writeln!(out, "{e}")?;
                            continue;
                        }
                    }
                };

                presenter.note(out, "🎯 Crafting your syllabus...")?;
                let outcome = submit(backend, &subject, duration);
                presenter.outcome(out, &outcome)?;
                slot = slot.record(&outcome);
            }
            Command::Show => match slot.last() {
                Some(syllabus) => presenter.previous(out, syllabus)?,
                None => writeln!(out, "{}", AppError::NoResult)?,
            },
            Command::Save(path) => match slot.last() {
                Some(syllabus) => {
                    let target = export_path(path.as_deref(), output_dir, syllabus.subject.as_str());
                    match write_export(&target, syllabus) {
                        Ok(()) => writeln!(out, "📥 Saved syllabus to {}", target.display())?,
                        Err(e) => writeln!(out, "{e}")?,
                    }
                }
                None => writeln!(out, "{}", AppError::NoResult)?,
            },
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
            Command::Unknown(word) => {
                writeln!(out, "Unknown command '{word}'. Type `help` for the list.")?
            }
        }
    }

    out.flush()?;
    Ok(slot)
}
