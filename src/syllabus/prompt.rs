use super::request::SyllabusRequest;

const SYSTEM_PROMPT: &str = "You are an experienced university professor who designs comprehensive, structured course syllabi. Create detailed week-by-week breakdowns with clear learning objectives, topics, and outcomes.";

/// System + user message pair sent to the completion service
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Prompt {
    pub(crate) system: &'static str,
    pub(crate) user: String,
}

impl Prompt {
    pub(crate) fn size(&self) -> usize {
        self.system.len() + self.user.len()
    }
}

/// Interpolate the request into the fixed syllabus skeleton.
///
/// Inputs are inserted verbatim; the result is a natural-language
/// instruction, not markup that needs escaping.
pub(crate) fn build_prompt(request: &SyllabusRequest) -> Prompt {
    let subject = request.subject.as_str();
    let duration = request.duration.label();

    let user = format!(
        "Generate a detailed {duration} syllabus for the subject '{subject}'.

Please format the response EXACTLY as follows:

# {subject} - {duration} Course Syllabus

## Course Overview
[Brief description of the course and what students will learn]

## Course Objectives
- [Objective 1]
- [Objective 2]
- [Objective 3]

## Learning Outcomes
By the end of this course, students will be able to:
- [Outcome 1]
- [Outcome 2]
- [Outcome 3]

## Weekly Breakdown

### Week 1: [Topic Name]
**Learning Objectives:**
- [Objective 1]
- [Objective 2]

**Topics Covered:**
- [Topic 1]
- [Topic 2]
- [Topic 3]

**Activities:**
- [Activity 1]
- [Activity 2]

**Assessment:** [Brief description]

---

[Continue this format for each week]

## Assessment Methods
- **Assignments:** [Percentage]% - [Description]
- **Midterm Exam:** [Percentage]% - [Description]
- **Final Project:** [Percentage]% - [Description]
- **Participation:** [Percentage]% - [Description]

## Required Materials
- [Material 1]
- [Material 2]
- [Material 3]

## Recommended Resources
- [Resource 1]
- [Resource 2]
- [Resource 3]

## Course Policies
- **Attendance:** [Policy]
- **Late Submissions:** [Policy]
- **Academic Integrity:** [Policy]

Make sure to use this exact formatting with proper markdown headers, bullet points, and clear section divisions."
    );

    Prompt {
        system: SYSTEM_PROMPT,
        user,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syllabus::request::{CourseDuration, SUBJECT_CATALOG};

    fn request(subject: &str, weeks: &str) -> SyllabusRequest {
        SyllabusRequest::new(subject, weeks.parse().unwrap()).unwrap()
    }

    #[test]
    fn prompt_contains_subject_and_duration_verbatim() {
        let subjects = SUBJECT_CATALOG
            .iter()
            .copied()
            .chain(["C++ & Rust: <Systems> \"101\"", "Ünïcödé Studies"]);
        for subject in subjects {
            for duration in CourseDuration::all() {
                let req = SyllabusRequest::new(subject, duration).unwrap();
                let prompt = build_prompt(&req);
                assert!(prompt.user.contains(subject), "{subject}");
                assert!(prompt.user.contains(&duration.label()), "{duration}");
            }
        }
    }

    #[test]
    fn prompt_opens_with_title_line() {
        let prompt = build_prompt(&request("Physics", "12"));
        assert!(
            prompt
                .user
                .starts_with("Generate a detailed 12 Weeks syllabus for the subject 'Physics'.")
        );
        assert!(prompt.user.contains("# Physics - 12 Weeks Course Syllabus"));
    }

    #[test]
    fn prompt_lists_every_section() {
        let prompt = build_prompt(&request("Marketing", "6"));
        for section in [
            "## Course Overview",
            "## Course Objectives",
            "## Learning Outcomes",
            "## Weekly Breakdown",
            "## Assessment Methods",
            "## Required Materials",
            "## Recommended Resources",
            "## Course Policies",
        ] {
            assert!(prompt.user.contains(section), "missing {section}");
        }
        assert!(prompt.system.contains("university professor"));
    }

    #[test]
    fn prompt_is_deterministic() {
        let a = build_prompt(&request("Finance", "8"));
        let b = build_prompt(&request("Finance", "8"));
        assert_eq!(a, b);
        assert_eq!(a.size(), a.system.len() + a.user.len());
    }
}
