mod catalog;
mod question;

pub use catalog::{CourseCatalog, CourseTopics};
pub use question::{Question, QuestionBank, Submission};
