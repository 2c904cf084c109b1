use serde::Serialize;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlanError {
    #[error("cannot build a plan from an empty topic list")]
    EmptyTopics,
    #[error("day count must be at least 1, got {0}")]
    InvalidDayCount(u32),
}

//
// ─── PLAN ENTRY ───────────────────────────────────────────────────────────────
//

/// A single day's assignment in a plan or roadmap.
///
/// Day numbers are 1-based and contiguous within a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanEntry {
    pub day: u32,
    pub topic: String,
}

impl PlanEntry {
    #[must_use]
    pub fn new(day: u32, topic: impl Into<String>) -> Self {
        Self {
            day,
            topic: topic.into(),
        }
    }
}

//
// ─── PLAN GENERATOR ───────────────────────────────────────────────────────────
//

/// Builds a day-by-topic beginner plan by cycling through `topics`.
///
/// Day `i` (1-based) is assigned `topics[(i - 1) % topics.len()]`, so the
/// topic list repeats when `days` exceeds its length. Deterministic for the
/// same inputs and free of side effects.
///
/// # Errors
///
/// - `PlanError::EmptyTopics` if `topics` is empty (the cyclic index would
///   divide by zero); callers looking up an unknown course hit this case.
/// - `PlanError::InvalidDayCount` if `days` is zero.
///
/// # Examples
///
/// ```
/// # use pathway_core::planner::generate_plan;
/// let topics = vec!["A".to_string(), "B".to_string(), "C".to_string()];
/// let plan = generate_plan(&topics, 5)?;
/// assert_eq!(plan.len(), 5);
/// assert_eq!(plan[3].topic, "A");
/// # Ok::<(), pathway_core::planner::PlanError>(())
/// ```
pub fn generate_plan(topics: &[String], days: u32) -> Result<Vec<PlanEntry>, PlanError> {
    if topics.is_empty() {
        return Err(PlanError::EmptyTopics);
    }
    if days == 0 {
        return Err(PlanError::InvalidDayCount(days));
    }

    Ok((1..=days)
        .map(|day| PlanEntry::new(day, topics[(day as usize - 1) % topics.len()].clone()))
        .collect())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
