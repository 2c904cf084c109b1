#![forbid(unsafe_code)]

pub mod compression;
pub mod dataset;
pub mod error;
pub mod recommender;

pub use compression::{
    CompressedPrompt, CompressionConfig, CompressionService, CompressionStatus,
};
pub use dataset::{DataSource, Dataset};
pub use error::{CompressionError, DatasetError, RecommenderError};
pub use recommender::{RecommenderService, Roadmap, StudyPlan};
