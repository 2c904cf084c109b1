use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

//
// ─── COURSE TOPICS ────────────────────────────────────────────────────────────
//

/// Ordered topic lists for a single course.
///
/// Only the beginner track exists today; the wire format keeps the level key
/// so more tracks can be added without breaking existing data files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseTopics {
    beginner: Vec<String>,
}

impl CourseTopics {
    #[must_use]
    pub fn new(beginner: Vec<String>) -> Self {
        Self { beginner }
    }

    #[must_use]
    pub fn beginner(&self) -> &[String] {
        &self.beginner
    }
}

//
// ─── COURSE CATALOG ───────────────────────────────────────────────────────────
//

/// Immutable mapping from course name to its ordered topic lists.
///
/// Loaded once at startup and shared read-only across requests. Wire format:
/// `{"Python": {"beginner": ["Variables", ...]}, ...}`.
///
/// Lookups for unknown courses return an empty slice rather than failing, so
/// downstream consumers must tolerate empty topic lists (see
/// [`crate::planner::generate_plan`] and [`crate::quiz::score_and_level`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseCatalog {
    courses: BTreeMap<String, CourseTopics>,
}

impl CourseCatalog {
    #[must_use]
    pub fn from_courses(courses: impl IntoIterator<Item = (String, Vec<String>)>) -> Self {
        Self {
            courses: courses
                .into_iter()
                .map(|(name, topics)| (name, CourseTopics::new(topics)))
                .collect(),
        }
    }

    /// Course names in stable (sorted) order, for selection UIs.
    pub fn course_names(&self) -> impl Iterator<Item = &str> {
        self.courses.keys().map(String::as_str)
    }

    /// Beginner topics for `course`, or an empty slice for an unknown course.
    #[must_use]
    pub fn beginner_topics(&self, course: &str) -> &[String] {
        self.courses
            .get(course)
            .map(CourseTopics::beginner)
            .unwrap_or(&[])
    }

    #[must_use]
    pub fn contains(&self, course: &str) -> bool {
        self.courses.contains_key(course)
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
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
