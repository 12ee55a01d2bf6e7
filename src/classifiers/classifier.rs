use crate::core::dataset_header::DatasetHeader;
use crate::core::instance::Instance;
use crate::model::{ModelError, ModelSummary};
use std::sync::Arc;

/// The seam between the task runner and a learner. Training must complete
/// before the first prediction is requested; there is no re-entrant
/// training.
pub trait Classifier {
    /// Resets the learner to an untrained model over the given schema.
    fn set_model_context(&mut self, header: Arc<DatasetHeader>);

    /// Ingests one labeled training instance. Fails fast on rows that do
    /// not match the schema instead of skipping them.
    fn train_on_instance(&mut self, instance: &Instance) -> Result<(), ModelError>;

    /// Unnormalized per-class likelihoods for a row of attribute values,
    /// in class-index order.
    fn votes_for_instance(&self, values: &[String]) -> Result<Vec<f64>, ModelError>;

    /// The predicted class label for a row of attribute values.
    fn predicted_label(&self, values: &[String]) -> Result<String, ModelError>;

    fn calc_memory_size(&self) -> usize;

    /// Inspection snapshot of the trained model, when the learner has one.
    fn model_summary(&self) -> Option<ModelSummary> {
        None
    }
}
