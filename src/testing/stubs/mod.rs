mod fixed_label_classifier;

pub use fixed_label_classifier::FixedLabelClassifier;
