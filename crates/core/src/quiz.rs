use serde::Serialize;

use crate::model::{Question, Submission};
use crate::planner::PlanEntry;

//
// ─── SKILL LEVEL ──────────────────────────────────────────────────────────────
//

/// Outcome level of a placement quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SkillLevel {
    /// Passed the quiz; the roadmap covers the upper half of the topic list.
    Intermediate,
    /// Failed the quiz; the roadmap revisits the lower half of the topic list.
    NeedsRevision,
}

impl SkillLevel {
    #[must_use]
    pub fn is_intermediate(self) -> bool {
        matches!(self, SkillLevel::Intermediate)
    }
}

//
// ─── SCORING ──────────────────────────────────────────────────────────────────
//

/// Counts questions whose submitted answer matches the correct one.
///
/// A missing submission entry counts as incorrect, never as an error. The
/// result is always in `0..=questions.len()`.
#[must_use]
pub fn score_submission(questions: &[Question], submission: &Submission) -> usize {
    questions
        .iter()
        .filter(|q| submission.answer_for(q.id()) == Some(q.answer()))
        .count()
}

/// Maps a score to a level using the floor-division pass threshold.
///
/// A score passes when `score >= total / 2 + 1`, i.e. strictly more than
/// half, with the exact-majority boundary on odd totals counting as a pass.
/// With `total == 0` the threshold is 1 and a zero score fails, so an empty
/// quiz degenerates to `NeedsRevision`. Both edges are intentional and pinned
/// by tests; do not "simplify" the arithmetic.
#[must_use]
pub fn level_for_score(score: usize, total: usize) -> SkillLevel {
    if score >= total / 2 + 1 {
        SkillLevel::Intermediate
    } else {
        SkillLevel::NeedsRevision
    }
}

//
// ─── ROADMAP DERIVATION ───────────────────────────────────────────────────────
//

/// The half of the beginner topic list matching a quiz outcome.
///
/// The midpoint uses floor division: with an odd count the middle topic
/// belongs to the upper (Intermediate) half only. With one topic or fewer,
/// one of the halves is empty; callers must tolerate an empty slice.
#[must_use]
pub fn topic_slice(topics: &[String], level: SkillLevel) -> &[String] {
    let mid = topics.len() / 2;
    match level {
        SkillLevel::Intermediate => &topics[mid..],
        SkillLevel::NeedsRevision => &topics[..mid],
    }
}

/// Direct 1-based enumeration of a topic slice, one day per topic.
///
/// Unlike [`crate::planner::generate_plan`] this never cycles: the slice
/// already has exactly as many topics as the roadmap has days, and an empty
/// slice yields an empty roadmap.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn build_roadmap(topics: &[String]) -> Vec<PlanEntry> {
    topics
        .iter()
        .enumerate()
        .map(|(i, topic)| PlanEntry::new(i as u32 + 1, topic.clone()))
        .collect()
}

//
// ─── QUIZ OUTCOME ─────────────────────────────────────────────────────────────
//

/// Result bundle for a scored quiz: score, level, and the derived roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizOutcome {
    pub score: usize,
    pub total: usize,
    pub level: SkillLevel,
    pub roadmap: Vec<PlanEntry>,
}

/// Scores a submission and derives the level-appropriate roadmap.
///
/// `topics` is the course's full beginner topic list; the roadmap enumerates
/// the half of it selected by the level. Empty question sets and empty topic
/// lists degrade to a zero-day `NeedsRevision` roadmap rather than failing,
/// which is how unknown courses are handled end to end. Idempotent for
/// identical inputs.
#[must_use]
pub fn score_and_level(
    questions: &[Question],
    submission: &Submission,
    topics: &[String],
) -> QuizOutcome {
    let score = score_submission(questions, submission);
    let total = questions.len();
    let level = level_for_score(score, total);
    let roadmap = build_roadmap(topic_slice(topics, level));

    QuizOutcome {
        score,
        total,
        level,
        roadmap,
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn topics(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| (*s).to_string()).collect()
    }

    fn two_questions() -> Vec<Question> {
        vec![
            Question::new("q1", "print(2**3)?", topics(&["6", "8", "9", "Error"]), "8"),
            Question::new(
                "q2",
                "NOT Python keyword?",
                topics(&["def", "class", "function", "if"]),
                "function",
            ),
        ]
    }

    #[test]
    fn full_marks_pass_as_intermediate() {
        let questions = two_questions();
        let submission = Submission::from_answers([
            ("q1".to_string(), "8".to_string()),
            ("q2".to_string(), "function".to_string()),
        ]);

        let outcome = score_and_level(&questions, &submission, &topics(&["A", "B"]));
        assert_eq!(outcome.score, 2);
        assert_eq!(outcome.total, 2);
        assert_eq!(outcome.level, SkillLevel::Intermediate);
    }

    #[test]
    fn zero_marks_need_revision() {
        let questions = two_questions();
        let submission = Submission::from_answers([
            ("q1".to_string(), "6".to_string()),
            ("q2".to_string(), "def".to_string()),
        ]);

        let outcome = score_and_level(&questions, &submission, &topics(&["A", "B"]));
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.level, SkillLevel::NeedsRevision);
    }

    #[test]
    fn missing_answers_count_as_incorrect() {
        let questions = two_questions();
        let submission = Submission::from_answers([("q1".to_string(), "8".to_string())]);

        assert_eq!(score_submission(&questions, &submission), 1);
    }

    #[test]
    fn score_is_bounded_by_total() {
        let questions = two_questions();
        let mut submission = Submission::default();
        submission.insert("q1", "8");
        submission.insert("q2", "function");
        // stray entries for unknown question ids must not inflate the score
        submission.insert("q99", "8");

        let score = score_submission(&questions, &submission);
        assert!(score <= questions.len());
        assert_eq!(score, 2);
    }

    #[test]
    fn threshold_requires_strict_majority() {
        // total 2: threshold 2, so 1/2 fails
        assert_eq!(level_for_score(1, 2), SkillLevel::NeedsRevision);
        assert_eq!(level_for_score(2, 2), SkillLevel::Intermediate);
        // total 3: threshold 2, the exact majority passes
        assert_eq!(level_for_score(2, 3), SkillLevel::Intermediate);
        assert_eq!(level_for_score(1, 3), SkillLevel::NeedsRevision);
    }

    #[test]
    fn empty_quiz_defaults_to_needs_revision() {
        // total 0: threshold is still 1, so the degenerate result is a fail
        assert_eq!(level_for_score(0, 0), SkillLevel::NeedsRevision);

        let outcome = score_and_level(&[], &Submission::default(), &topics(&["A", "B", "C", "D"]));
        assert_eq!(outcome.total, 0);
        assert_eq!(outcome.level, SkillLevel::NeedsRevision);
        // lower half of four topics
        assert_eq!(outcome.roadmap.len(), 2);
    }

    #[test]
    fn odd_topic_count_puts_middle_topic_in_upper_half_only() {
        let list = topics(&["T1", "T2", "T3", "T4", "T5", "T6", "T7"]);

        let upper = topic_slice(&list, SkillLevel::Intermediate);
        assert_eq!(upper, ["T4", "T5", "T6", "T7"]);

        let lower = topic_slice(&list, SkillLevel::NeedsRevision);
        assert_eq!(lower, ["T1", "T2", "T3"]);
    }

    #[test]
    fn single_topic_leaves_lower_half_empty() {
        let list = topics(&["Only"]);
        assert!(topic_slice(&list, SkillLevel::NeedsRevision).is_empty());
        assert_eq!(topic_slice(&list, SkillLevel::Intermediate), ["Only"]);
    }

    #[test]
    fn roadmap_enumerates_without_cycling() {
        let roadmap = build_roadmap(&topics(&["A", "B", "C"]));
        assert_eq!(roadmap.len(), 3);
        assert_eq!(roadmap[0], PlanEntry::new(1, "A"));
        assert_eq!(roadmap[2], PlanEntry::new(3, "C"));
    }

    #[test]
    fn empty_slice_yields_empty_roadmap() {
        assert!(build_roadmap(&[]).is_empty());
    }

    #[test]
    fn unknown_course_degrades_to_zero_day_roadmap() {
        // unknown course: both the question set and the topic list are empty
        let outcome = score_and_level(&[], &Submission::default(), &[]);
        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.level, SkillLevel::NeedsRevision);
        assert!(outcome.roadmap.is_empty());
    }

    #[test]
    fn scoring_is_idempotent() {
        let questions = two_questions();
        let submission = Submission::from_answers([("q1".to_string(), "8".to_string())]);
        let list = topics(&["A", "B", "C"]);

        assert_eq!(
            score_and_level(&questions, &submission, &list),
            score_and_level(&questions, &submission, &list)
        );
    }
}
