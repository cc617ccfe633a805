use std::io::{self, Write};

use crate::error::{CompletionError, InputError};
use crate::session::{Outcome, Syllabus};

const RESET: &str = "\x1b[0m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";
const BOLD: &str = "\x1b[1m";

/// Terminal presenter. Syllabus text is always written verbatim; colour only
/// touches the banners around it.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Presenter {
    use_color: bool,
}

impl Presenter {
    pub(crate) fn new(use_color: bool) -> Self {
        Self { use_color }
    }

    fn paint(&self, color: &str, text: &str) -> String {
        if self.use_color {
            format!("{color}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    pub(crate) fn outcome(&self, out: &mut impl Write, outcome: &Outcome) -> io::Result<()> {
        match outcome {
            Outcome::Generated(syllabus) => self.generated(out, syllabus),
            Outcome::Failed { error, .. } => self.failure(out, error),
            Outcome::Rejected(error) => self.warning(out, error),
        }
    }

    pub(crate) fn generated(&self, out: &mut impl Write, syllabus: &Syllabus) -> io::Result<()> {
        self.banner(out, syllabus)?;
        writeln!(out)?;
        self.body(out, syllabus)
    }

    pub(crate) fn banner(&self, out: &mut impl Write, syllabus: &Syllabus) -> io::Result<()> {
        writeln!(
            out,
            "{}",
            self.paint(GREEN, "✅ Syllabus Generated Successfully!")
        )?;
        writeln!(
            out,
            "Your {} syllabus for {} is ready below.",
            syllabus.duration,
            self.paint(BOLD, syllabus.subject.as_str())
        )
    }

    /// Re-display of the session slot
    pub(crate) fn previous(&self, out: &mut impl Write, syllabus: &Syllabus) -> io::Result<()> {
        writeln!(
            out,
            "{}",
            self.paint(CYAN, "📚 Previously Generated Syllabus")
        )?;
        writeln!(
            out,
            "📖 Last generated: {} ({}) at {}",
            self.paint(BOLD, syllabus.subject.as_str()),
            syllabus.duration,
            syllabus.generated_at.format("%Y-%m-%d %H:%M")
        )?;
        writeln!(out)?;
        self.body(out, syllabus)
    }

    pub(crate) fn body(&self, out: &mut impl Write, syllabus: &Syllabus) -> io::Result<()> {
        out.write_all(syllabus.content.as_bytes())?;
        if !syllabus.content.ends_with('\n') {
            writeln!(out)?;
        }
        Ok(())
    }

    pub(crate) fn failure(&self, out: &mut impl Write, error: &CompletionError) -> io::Result<()> {
        writeln!(out, "{}", self.paint(RED, "❌ Oops! Something went wrong"))?;
        writeln!(out, "{error}")
    }

    pub(crate) fn warning(&self, out: &mut impl Write, error: &InputError) -> io::Result<()> {
        writeln!(out, "{}", self.paint(YELLOW, "⚠️ Please Note"))?;
        writeln!(out, "{error}")
    }

    pub(crate) fn note(&self, out: &mut impl Write, message: &str) -> io::Result<()> {
        writeln!(out, "{}", self.paint(CYAN, message))
    }
}
