use thiserror::Error;

/// Precondition failures of the statistical model. Out-of-range count
/// lookups during scoring are not errors; they are zero-evidence signals
/// handled inside the scorer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("cannot compute class priors: no training instances were observed")]
    EmptyTrainingSet,

    #[error("instance carries {found} attribute values but the header declares {expected}")]
    ColumnCountMismatch { expected: usize, found: usize },

    #[error("training instance has no class label")]
    MissingClassLabel,
}
