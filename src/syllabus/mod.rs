mod prompt;
mod request;

pub(crate) use prompt::{Prompt, build_prompt};
pub(crate) use request::{CourseDuration, SUBJECT_CATALOG, Subject, SyllabusRequest};
