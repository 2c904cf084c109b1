use std::sync::Arc;

use tracing::debug;

use pathway_core::model::{Question, Submission};
use pathway_core::planner::{PlanEntry, generate_plan};
use pathway_core::quiz::{SkillLevel, score_and_level};

use crate::dataset::Dataset;
use crate::error::RecommenderError;

//
// ─── VIEWS ────────────────────────────────────────────────────────────────────
//

/// A beginner study plan over a fixed number of days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudyPlan {
    pub course: String,
    pub days: u32,
    pub entries: Vec<PlanEntry>,
}

/// A quiz-derived roadmap with its level and score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roadmap {
    pub course: String,
    pub level: SkillLevel,
    pub score: usize,
    pub total: usize,
    pub entries: Vec<PlanEntry>,
}

impl Roadmap {
    /// Number of days covered; zero for degenerate roadmaps.
    #[must_use]
    pub fn days(&self) -> usize {
        self.entries.len()
    }
}

//
// ─── RECOMMENDER ──────────────────────────────────────────────────────────────
//

/// Read-only recommendation facade over the loaded dataset.
///
/// Holds the dataset behind an `Arc` so request handlers can share it without
/// locking; every method only reads catalog data and builds request-local
/// results.
#[derive(Clone)]
pub struct RecommenderService {
    dataset: Arc<Dataset>,
}

impl RecommenderService {
    #[must_use]
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    /// Course names offered by the catalog, in stable order.
    #[must_use]
    pub fn course_names(&self) -> Vec<String> {
        self.dataset
            .courses()
            .course_names()
            .map(str::to_string)
            .collect()
    }

    /// Placement questions for `course`; empty for an unknown course.
    #[must_use]
    pub fn quiz_questions(&self, course: &str) -> &[Question] {
        self.dataset.questions().questions(course)
    }

    /// Build a cyclic beginner plan for `course` over `days` days.
    ///
    /// # Errors
    ///
    /// Returns `RecommenderError::Plan` when `days` is zero or the course is
    /// unknown (its topic list is empty, which the plan generator rejects).
    pub fn beginner_plan(&self, course: &str, days: u32) -> Result<StudyPlan, RecommenderError> {
        let topics = self.dataset.courses().beginner_topics(course);
        let entries = generate_plan(topics, days)?;

        debug!(course, days, "built beginner plan");
        Ok(StudyPlan {
            course: course.to_string(),
            days,
            entries,
        })
    }

    /// Score a quiz submission and derive the matching roadmap.
    ///
    /// Never fails: an unknown course has empty question and topic lists,
    /// which degrade to a zero-day `NeedsRevision` roadmap.
    #[must_use]
    pub fn quiz_roadmap(&self, course: &str, submission: &Submission) -> Roadmap {
        let questions = self.dataset.questions().questions(course);
        let topics = self.dataset.courses().beginner_topics(course);
        let outcome = score_and_level(questions, submission, topics);

        debug!(
            course,
            score = outcome.score,
            total = outcome.total,
            level = ?outcome.level,
            "scored quiz submission"
        );

        Roadmap {
            course: course.to_string(),
            level: outcome.level,
            score: outcome.score,
            total: outcome.total,
            entries: outcome.roadmap,
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use pathway_core::planner::PlanError;

    use super::*;

    fn service() -> RecommenderService {
        RecommenderService::new(Arc::new(Dataset::embedded()))
    }

    #[test]
    fn course_names_come_from_catalog() {
        let names = service().course_names();
        assert_eq!(names, ["AI", "C", "Python"]);
    }

    #[test]
    fn beginner_plan_cycles_catalog_topics() {
        let plan = service().beginner_plan("AI", 9).unwrap();
        assert_eq!(plan.entries.len(), 9);
        // AI has 7 topics, so day 8 wraps back to the first
        assert_eq!(plan.entries[7].topic, "Introduction");
    }

    #[test]
    fn beginner_plan_rejects_unknown_course() {
        let err = service().beginner_plan("Rust", 5).unwrap_err();
        assert!(matches!(err, RecommenderError::Plan(PlanError::EmptyTopics)));
    }

    #[test]
    fn beginner_plan_rejects_zero_days() {
        let err = service().beginner_plan("Python", 0).unwrap_err();
        assert!(matches!(
            err,
            RecommenderError::Plan(PlanError::InvalidDayCount(0))
        ));
    }

    #[test]
    fn perfect_quiz_yields_upper_half_roadmap() {
        let submission = Submission::from_answers([
            ("q1".to_string(), "8".to_string()),
            ("q2".to_string(), "function".to_string()),
        ]);

        let roadmap = service().quiz_roadmap("Python", &submission);
        assert_eq!(roadmap.score, 2);
        assert_eq!(roadmap.level, SkillLevel::Intermediate);
        // Python has 8 beginner topics; the upper half starts at "Functions"
        assert_eq!(roadmap.days(), 4);
        assert_eq!(roadmap.entries[0].topic, "Functions");
    }

    #[test]
    fn failed_quiz_yields_lower_half_roadmap() {
        let roadmap = service().quiz_roadmap("Python", &Submission::default());
        assert_eq!(roadmap.score, 0);
        assert_eq!(roadmap.level, SkillLevel::NeedsRevision);
        assert_eq!(roadmap.days(), 4);
        assert_eq!(roadmap.entries[0].topic, "Variables");
    }

    #[test]
    fn unknown_course_quiz_degrades_to_zero_days() {
        let roadmap = service().quiz_roadmap("Rust", &Submission::default());
        assert_eq!(roadmap.total, 0);
        assert_eq!(roadmap.level, SkillLevel::NeedsRevision);
        assert_eq!(roadmap.days(), 0);
    }
}
