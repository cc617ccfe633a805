//! CLI subcommand definitions

use std::path::PathBuf;

use clap::Subcommand;

use crate::syllabus::CourseDuration;

fn parse_duration(value: &str) -> Result<CourseDuration, String> {
    value.parse().map_err(|e: crate::error::AppError| e.to_string())
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Generate one syllabus and print it
    Generate {
        /// Subject name, or #N to pick from the `options` catalog
        #[arg(value_name = "SUBJECT", allow_hyphen_values = true)]
        subject: String,
        /// Course duration in weeks: 4, 6, 8, 12 or 14
        #[arg(short, long, value_name = "WEEKS", value_parser = parse_duration, default_value = "4")]
        duration: CourseDuration,
        /// Also save the syllabus as <subject>_syllabus.txt in the output directory
        #[arg(short, long)]
        save: bool,
        /// Save the syllabus to this path
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
    /// Interactive form that remembers the last generated syllabus
    Session,
    /// Print the prompt that would be sent, without calling the API
    Prompt {
        /// Subject name, or #N to pick from the `options` catalog
        #[arg(value_name = "SUBJECT", allow_hyphen_values = true)]
        subject: String,
        /// Course duration in weeks: 4, 6, 8, 12 or 14
        #[arg(short, long, value_name = "WEEKS", value_parser = parse_duration, default_value = "4")]
        duration: CourseDuration,
    },
    /// List catalog subjects and allowed durations
    Options,
}

impl Commands {
    /// Whether the command talks to the completion API
    pub(crate) fn needs_api_key(&self) -> bool {
        matches!(self, Commands::Generate { .. } | Commands::Session)
    }
}
