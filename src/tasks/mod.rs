mod batch_classification;

pub use batch_classification::{BatchClassification, TaskReport};
