//! Form inputs: subject text and course duration
//!
//! Both values are validated here so that a rejected submission never
//! reaches the completion client.

use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, InputError};

/// Allowed course lengths, in weeks
pub(crate) const DURATION_WEEKS: [u8; 5] = [4, 6, 8, 12, 14];

/// Placeholder entry of the subject selector; never a real subject
pub(crate) const SUBJECT_PLACEHOLDER: &str = "Select a subject...";

/// Predefined subjects offered alongside free-text input
pub(crate) const SUBJECT_CATALOG: &[&str] = &[
    "Data Structures and Algorithms",
    "Artificial Intelligence",
    "Machine Learning",
    "Python Programming",
    "Web Development",
    "Database Management Systems",
    "Computer Networks",
    "Operating Systems",
    "Software Engineering",
    "Project Management",
    "Mathematics",
    "Statistics",
    "Physics",
    "Chemistry",
    "Business Administration",
    "Marketing",
    "Finance",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CourseDuration(u8);

impl CourseDuration {
    pub(crate) fn weeks(self) -> u8 {
        self.0
    }

    /// Human label interpolated into the prompt, e.g. "8 Weeks"
    pub(crate) fn label(self) -> String {
        format!("{} Weeks", self.0)
    }

    pub(crate) fn all() -> impl Iterator<Item = CourseDuration> {
        DURATION_WEEKS.iter().copied().map(CourseDuration)
    }
}

impl Default for CourseDuration {
    fn default() -> Self {
        CourseDuration(DURATION_WEEKS[0])
    }
}

impl fmt::Display for CourseDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Weeks", self.0)
    }
}

impl FromStr for CourseDuration {
    type Err = AppError;

    /// Accepts "8", "8w", "8 weeks" and "8 Weeks"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::InvalidDuration {
            input: s.trim().to_string(),
        };
        let lower = s.trim().to_ascii_lowercase();
        let digits = lower
            .strip_suffix("weeks")
            .or_else(|| lower.strip_suffix("week"))
            .or_else(|| lower.strip_suffix('w'))
            .unwrap_or(&lower)
            .trim();
        let weeks: u8 = digits.parse().map_err(|_| invalid())?;
        if DURATION_WEEKS.contains(&weeks) {
            Ok(CourseDuration(weeks))
        } else {
            Err(invalid())
        }
    }
}

/// Non-empty subject text, kept verbatim apart from surrounding whitespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Subject(String);

impl Subject {
    /// Resolve form input into a subject.
    ///
    /// `#N` picks the N-th catalog entry (1-based); anything else is taken
    /// as a custom subject.
    pub(crate) fn parse(input: &str) -> Result<Self, InputError> {
        let trimmed = input.trim();
        if trimmed.is_empty() || trimmed == SUBJECT_PLACEHOLDER {
            return Err(InputError::EmptySubject);
        }
        if let Some(index) = trimmed.strip_prefix('#').and_then(|n| n.parse::<usize>().ok()) {
            return catalog_subject(index)
                .map(|name| Subject(name.to_string()))
                .ok_or(InputError::UnknownCatalogEntry { index });
        }
        Ok(Subject(trimmed.to_string()))
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn catalog_subject(index: usize) -> Option<&'static str> {
    index
        .checked_sub(1)
        .and_then(|i| SUBJECT_CATALOG.get(i))
        .copied()
}

/// A validated submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SyllabusRequest {
    pub(crate) subject: Subject,
    pub(crate) duration: CourseDuration,
}

impl SyllabusRequest {
    pub(crate) fn new(subject_input: &str, duration: CourseDuration) -> Result<Self, InputError> {
        Ok(Self {
            subject: Subject::parse(subject_input)?,
            duration,
        })
    }
}
