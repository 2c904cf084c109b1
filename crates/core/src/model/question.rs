use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// One multiple-choice placement question.
///
/// Immutable after load. The prompt is stored under the wire key `question`
/// to match the external data format:
/// `{"id": "q1", "question": "...", "options": [...], "answer": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    id: String,
    #[serde(rename = "question")]
    prompt: String,
    options: Vec<String>,
    answer: String,
}

impl Question {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        prompt: impl Into<String>,
        options: Vec<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            options,
            answer: answer.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }
}

//
// ─── QUESTION BANK ────────────────────────────────────────────────────────────
//

/// Immutable mapping from course name to its ordered question list.
///
/// Like [`super::CourseCatalog`], lookups for unknown courses return an empty
/// slice; an empty question set is a degenerate-but-valid quiz, not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionBank {
    courses: BTreeMap<String, Vec<Question>>,
}

impl QuestionBank {
    #[must_use]
    pub fn from_courses(courses: impl IntoIterator<Item = (String, Vec<Question>)>) -> Self {
        Self {
            courses: courses.into_iter().collect(),
        }
    }

    /// Questions for `course`, or an empty slice for an unknown course.
    #[must_use]
    pub fn questions(&self, course: &str) -> &[Question] {
        self.courses
            .get(course)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

//
// ─── SUBMISSION ───────────────────────────────────────────────────────────────
//

/// Answers submitted for a quiz, keyed by question id.
///
/// Request-scoped. Entries may be absent for unanswered questions; a missing
/// answer counts as incorrect during scoring, never as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Submission {
    answers: HashMap<String, String>,
}

impl Submission {
    #[must_use]
    pub fn from_answers(answers: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
        }
    }

    pub fn insert(&mut self, question_id: impl Into<String>, answer: impl Into<String>) {
        self.answers.insert(question_id.into(), answer.into());
    }

    /// The selected answer for `question_id`, if one was submitted.
    #[must_use]
    pub fn answer_for(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
