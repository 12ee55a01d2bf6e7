use crate::classifiers::Classifier;
use crate::model::ModelSummary;
use crate::streams::Stream;
use anyhow::{Context, Result};
use cpu_time::ThreadTime;
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;
use std::sync::Arc;

/// Counters and timings of one completed run.
#[derive(Clone, Copy, Debug)]
pub struct TaskReport {
    pub instances_trained: u64,
    pub instances_classified: u64,
    pub seconds: f64,
    pub model_bytes: usize,
}

/// Two-phase batch run: drain the labeled stream into the learner, then
/// classify every row of the unlabeled stream against the frozen model,
/// keeping predictions in input order.
///
/// Training completes in full before the first prediction; the learner is
/// never trained again afterwards.
pub struct BatchClassification {
    learner: Box<dyn Classifier>,
    train_stream: Box<dyn Stream>,
    test_stream: Box<dyn Stream>,
    predictions: Vec<String>,
    instances_trained: u64,
    instances_classified: u64,
    seconds: f64,
    model_bytes: usize,
}

impl BatchClassification {
    pub fn new(
        mut learner: Box<dyn Classifier>,
        train_stream: Box<dyn Stream>,
        test_stream: Box<dyn Stream>,
    ) -> Self {
        let header = Arc::new(train_stream.header().clone());
        learner.set_model_context(header);

        Self {
            learner,
            train_stream,
            test_stream,
            predictions: Vec::new(),
            instances_trained: 0,
            instances_classified: 0,
            seconds: 0.0,
            model_bytes: 0,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let start = ThreadTime::now();

        while let Some(next) = self.train_stream.next_instance() {
            let instance = next
                .with_context(|| format!("invalid training row {}", self.instances_trained + 1))?;
            self.learner
                .train_on_instance(&instance)
                .with_context(|| format!("failed to train on row {}", self.instances_trained + 1))?;
            self.instances_trained += 1;
        }

        self.model_bytes = self.learner.calc_memory_size();

        while let Some(next) = self.test_stream.next_instance() {
            let instance = next
                .with_context(|| format!("invalid test row {}", self.instances_classified + 1))?;
            let label = self
                .learner
                .predicted_label(instance.values())
                .with_context(|| format!("failed to classify row {}", self.instances_classified + 1))?;
            self.predictions.push(label);
            self.instances_classified += 1;
        }

        self.seconds = start.elapsed().as_secs_f64();
        Ok(())
    }

    pub fn predictions(&self) -> &[String] {
        &self.predictions
    }

    /// Writes one predicted label per line, in test-row input order.
    pub fn write_predictions(&self, path: &Path) -> Result<(), Error> {
        let mut writer = BufWriter::new(File::create(path)?);
        for label in &self.predictions {
            writeln!(writer, "{label}")?;
        }
        writer.flush()
    }

    pub fn model_summary(&self) -> Option<ModelSummary> {
        self.learner.model_summary()
    }

    pub fn report(&self) -> TaskReport {
        TaskReport {
            instances_trained: self.instances_trained,
            instances_classified: self.instances_classified,
            seconds: self.seconds,
            model_bytes: self.model_bytes,
        }
    }
}
