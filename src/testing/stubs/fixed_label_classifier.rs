use crate::classifiers::Classifier;
use crate::core::dataset_header::DatasetHeader;
use crate::core::instance::Instance;
use crate::model::ModelError;
use std::mem::size_of;
use std::sync::Arc;

/// Always predicts the configured label; training is a no-op.
pub struct FixedLabelClassifier {
    label: String,
}

impl FixedLabelClassifier {
    pub fn new(label: &str) -> FixedLabelClassifier {
        FixedLabelClassifier {
            label: label.to_string(),
        }
    }
}

impl Classifier for FixedLabelClassifier {
    fn set_model_context(&mut self, _header: Arc<DatasetHeader>) {}

    fn train_on_instance(&mut self, _instance: &Instance) -> Result<(), ModelError> {
        Ok(())
    }

    fn votes_for_instance(&self, _values: &[String]) -> Result<Vec<f64>, ModelError> {
        Ok(vec![1.0])
    }

    fn predicted_label(&self, _values: &[String]) -> Result<String, ModelError> {
        Ok(self.label.clone())
    }

    fn calc_memory_size(&self) -> usize {
        size_of::<Self>()
    }
}
