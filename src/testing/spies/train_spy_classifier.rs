use crate::classifiers::Classifier;
use crate::core::dataset_header::DatasetHeader;
use crate::core::instance::Instance;
use crate::model::ModelError;
use std::mem::size_of;
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

pub struct TrainSpyHandle(Arc<AtomicU64>);
impl TrainSpyHandle {
    pub fn count(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

/// Counts how often `train_on_instance` is invoked.
pub struct TrainSpyClassifier {
    count: Arc<AtomicU64>,
}

impl TrainSpyClassifier {
    pub fn new() -> (Self, TrainSpyHandle) {
        let counter = Arc::new(AtomicU64::new(0));
        (
            Self {
                count: counter.clone(),
            },
            TrainSpyHandle(counter),
        )
    }
}

impl Classifier for TrainSpyClassifier {
    fn set_model_context(&mut self, _header: Arc<DatasetHeader>) {}

    fn train_on_instance(&mut self, _instance: &Instance) -> Result<(), ModelError> {
        self.count.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn votes_for_instance(&self, _values: &[String]) -> Result<Vec<f64>, ModelError> {
        Ok(vec![1.0])
    }

    fn predicted_label(&self, _values: &[String]) -> Result<String, ModelError> {
        Ok("spy".to_string())
    }

    fn calc_memory_size(&self) -> usize {
        size_of::<Self>()
    }
}
