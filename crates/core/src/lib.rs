#![forbid(unsafe_code)]

pub mod model;
pub mod planner;
pub mod quiz;

pub use model::{CourseCatalog, CourseTopics, Question, QuestionBank, Submission};
pub use planner::{PlanEntry, PlanError, generate_plan};
pub use quiz::{QuizOutcome, SkillLevel, score_and_level};
