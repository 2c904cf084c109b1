use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{info, warn};

use pathway_core::model::{CourseCatalog, Question, QuestionBank};

use crate::error::DatasetError;

/// File name of the course catalog inside the data directory.
pub const COURSES_FILE: &str = "courses.json";
/// File name of the question bank inside the data directory.
pub const QUESTIONS_FILE: &str = "questions.json";

//
// ─── DATA SOURCE ──────────────────────────────────────────────────────────────
//

/// Where a loaded dataset half came from, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    File(PathBuf),
    Embedded,
}

impl DataSource {
    #[must_use]
    pub fn is_embedded(&self) -> bool {
        matches!(self, DataSource::Embedded)
    }
}

//
// ─── DATASET ──────────────────────────────────────────────────────────────────
//

/// Immutable course and question data for the process lifetime.
///
/// Loaded once at startup and handed to services as an explicit value (no
/// ambient globals), so tests can build their own datasets deterministically.
#[derive(Debug, Clone)]
pub struct Dataset {
    courses: CourseCatalog,
    questions: QuestionBank,
    courses_source: DataSource,
    questions_source: DataSource,
}

impl Dataset {
    /// Load both data files from `dir`, substituting the embedded defaults
    /// for any file that fails to read or parse.
    ///
    /// The two halves fall back independently, each substitution is logged at
    /// `warn`, and the chosen source stays readable on the returned value.
    #[must_use]
    pub fn load(dir: &Path) -> Self {
        let (courses, courses_source) =
            load_half(dir.join(COURSES_FILE), embedded_courses, "course catalog");
        let (questions, questions_source) =
            load_half(dir.join(QUESTIONS_FILE), embedded_questions, "question bank");

        Self {
            courses,
            questions,
            courses_source,
            questions_source,
        }
    }

    /// Dataset built purely from the embedded defaults.
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            courses: embedded_courses(),
            questions: embedded_questions(),
            courses_source: DataSource::Embedded,
            questions_source: DataSource::Embedded,
        }
    }

    /// Dataset over explicit data, for tests and tools.
    #[must_use]
    pub fn from_parts(courses: CourseCatalog, questions: QuestionBank) -> Self {
        Self {
            courses,
            questions,
            courses_source: DataSource::Embedded,
            questions_source: DataSource::Embedded,
        }
    }

    #[must_use]
    pub fn courses(&self) -> &CourseCatalog {
        &self.courses
    }

    #[must_use]
    pub fn questions(&self) -> &QuestionBank {
        &self.questions
    }

    #[must_use]
    pub fn courses_source(&self) -> &DataSource {
        &self.courses_source
    }

    #[must_use]
    pub fn questions_source(&self) -> &DataSource {
        &self.questions_source
    }
}

fn load_half<T: DeserializeOwned>(
    path: PathBuf,
    embedded: fn() -> T,
    what: &'static str,
) -> (T, DataSource) {
    match read_json::<T>(&path) {
        Ok(value) => {
            info!(path = %path.display(), "loaded {what} from file");
            (value, DataSource::File(path))
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "falling back to embedded {what}");
            (embedded(), DataSource::Embedded)
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DatasetError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

//
// ─── EMBEDDED DEFAULTS ────────────────────────────────────────────────────────
//

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| (*s).to_string()).collect()
}

fn embedded_courses() -> CourseCatalog {
    CourseCatalog::from_courses([
        (
            "Python".to_string(),
            strings(&[
                "Variables",
                "Data Types",
                "Conditionals",
                "Loops",
                "Functions",
                "Lists",
                "Dictionaries",
                "File I/O",
            ]),
        ),
        (
            "C".to_string(),
            strings(&[
                "Introduction",
                "Variables",
                "Data Types",
                "Control Statements",
                "Functions",
                "Arrays",
                "Pointers",
                "Strings",
            ]),
        ),
        (
            "AI".to_string(),
            strings(&[
                "Introduction",
                "Machine Learning",
                "Neural Networks",
                "Data Preprocessing",
                "Models",
                "Training",
                "Evaluation",
            ]),
        ),
    ])
}

fn embedded_questions() -> QuestionBank {
    QuestionBank::from_courses([
        (
            "C".to_string(),
            vec![
                Question::new(
                    "q1",
                    "int a=5; printf('%d', a++ + ++a);",
                    strings(&["11", "12", "13", "Undefined"]),
                    "Undefined",
                ),
                Question::new(
                    "q2",
                    "Correct pointer declaration?",
                    strings(&["int *p;", "int* p;", "int * p;", "All"]),
                    "All",
                ),
            ],
        ),
        (
            "Python".to_string(),
            vec![
                Question::new(
                    "q1",
                    "print(2**3)?",
                    strings(&["6", "8", "9", "Error"]),
                    "8",
                ),
                Question::new(
                    "q2",
                    "NOT Python keyword?",
                    strings(&["def", "class", "function", "if"]),
                    "function",
                ),
            ],
        ),
        (
            "AI".to_string(),
            vec![
                Question::new(
                    "q1",
                    "AI stands for?",
                    strings(&[
                        "Artificial Intelligence",
                        "Advanced Intelligence",
                        "Automated Intelligence",
                        "Artificial Integration",
                    ]),
                    "Artificial Intelligence",
                ),
                Question::new(
                    "q2",
                    "Machine Learning type?",
                    strings(&["Supervised", "Cloud", "Web", "Mobile"]),
                    "Supervised",
                ),
            ],
        ),
    ])
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
