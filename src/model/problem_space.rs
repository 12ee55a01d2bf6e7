use crate::model::attribute_model::AttributeModel;
use crate::model::error::ModelError;
use crate::model::summary::{AttributeSummary, ClassSummary, ModelSummary, ValueSummary};
use crate::utils::memory::{MemoryMeter, MemorySized};
use std::fmt;
use std::mem::size_of;

/// The entire trained model: global class statistics plus one
/// `AttributeModel` per column, in header order.
///
/// Constructed once from the attribute-name list, mutated exclusively by the
/// training phase, then read as frozen statistics by the classification
/// phase. Class indices are assigned in first-seen order and are stable for
/// the lifetime of the run.
pub struct ProblemSpace {
    total_training_instances: u64,
    class_names: Vec<String>,
    class_counts: Vec<u64>,
    attributes: Vec<AttributeModel>,
}

impl ProblemSpace {
    pub fn new(attribute_names: &[String]) -> ProblemSpace {
        ProblemSpace {
            total_training_instances: 0,
            class_names: Vec::new(),
            class_counts: Vec::new(),
            attributes: attribute_names
                .iter()
                .map(|name| AttributeModel::new(name.clone()))
                .collect(),
        }
    }

    /// Resolves `class_name` to its stable index, assigning the next free
    /// index on first sight. This is the only place class indices come from.
    pub fn class_index_for(&mut self, class_name: &str) -> usize {
        match self.class_names.iter().position(|n| n == class_name) {
            Some(index) => index,
            None => {
                self.class_names.push(class_name.to_string());
                self.class_counts.push(0);
                self.class_names.len() - 1
            }
        }
    }

    /// Counts one training instance of `class_name` and returns the class
    /// index for the caller to reuse against the attribute updates of the
    /// same instance.
    pub fn register_instance(&mut self, class_name: &str) -> usize {
        self.total_training_instances += 1;
        let class_index = self.class_index_for(class_name);
        self.class_counts[class_index] += 1;
        class_index
    }

    /// Records `value_label` for the attribute at `column_index`. The column
    /// index must be in range; row arity is validated before training
    /// reaches this point.
    pub fn update_attribute(&mut self, column_index: usize, value_label: &str, class_index: usize) {
        self.attributes[column_index].observe(value_label, class_index);
    }

    /// Class constitution for `value_label` at `column_index`. A column
    /// beyond the trained attributes yields an empty slice, so every class
    /// index reads as out of range (zero evidence) in the scorer.
    pub fn conditional_counts(&self, column_index: usize, value_label: &str) -> &[u64] {
        self.attributes
            .get(column_index)
            .map(|attribute| attribute.counts_for(value_label))
            .unwrap_or(&[])
    }

    /// Per-class prior weights: the raw frequency ratios
    /// `class_counts[c] / total_training_instances`.
    ///
    /// The ratios are not rescaled by their sum; they happen to sum to one
    /// here, but callers rank them against each other and no further
    /// scaling is applied anywhere.
    pub fn class_priors(&self) -> Result<Vec<f64>, ModelError> {
        if self.total_training_instances == 0 {
            return Err(ModelError::EmptyTrainingSet);
        }
        let total = self.total_training_instances as f64;
        Ok(self
            .class_counts
            .iter()
            .map(|&count| count as f64 / total)
            .collect())
    }

    pub fn total_training_instances(&self) -> u64 {
        self.total_training_instances
    }

    pub fn class_names(&self) -> &[String] {
        &self.class_names
    }

    pub fn class_counts(&self) -> &[u64] {
        &self.class_counts
    }

    pub fn number_of_classes(&self) -> usize {
        self.class_names.len()
    }

    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn attributes(&self) -> &[AttributeModel] {
        &self.attributes
    }

    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            total_training_instances: self.total_training_instances,
            classes: self
                .class_names
                .iter()
                .zip(&self.class_counts)
                .map(|(name, &count)| ClassSummary {
                    name: name.clone(),
                    count,
                })
                .collect(),
            attributes: self
                .attributes
                .iter()
                .map(|attribute| AttributeSummary {
                    name: attribute.name().to_string(),
                    values: attribute
                        .value_counters()
                        .iter()
                        .map(|counter| ValueSummary {
                            label: counter.label().to_string(),
                            class_constitution: counter.counts().to_vec(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

impl fmt::Debug for ProblemSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProblemSpace")
            .field("total_training_instances", &self.total_training_instances)
            .field("n_classes", &self.class_names.len())
            .field("n_attributes", &self.attributes.len())
            .finish()
    }
}

impl MemorySized for ProblemSpace {
    fn inline_size(&self) -> usize {
        size_of::<Self>()
    }

    fn extra_heap_size(&self, meter: &mut MemoryMeter) -> usize {
        let mut total = 0;
        total += meter.measure_field(&self.class_names);
        total += meter.measure_field(&self.class_counts);
        total += meter.measure_field(&self.attributes);
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn class_index_for_is_first_seen_order_and_idempotent() {
        let mut space = ProblemSpace::new(&names(&["a"]));
        assert_eq!(space.class_index_for("yes"), 0);
        assert_eq!(space.class_index_for("no"), 1);
        assert_eq!(space.class_index_for("yes"), 0);
        assert_eq!(space.class_index_for("maybe"), 2);
        assert_eq!(space.class_names(), &["yes", "no", "maybe"]);
    }

    #[test]
    fn register_instance_keeps_counts_in_sync_with_total() {
        let mut space = ProblemSpace::new(&names(&["a"]));
        space.register_instance("yes");
        space.register_instance("no");
        space.register_instance("yes");

        assert_eq!(space.total_training_instances(), 3);
        assert_eq!(space.class_counts(), &[2, 1]);
        assert_eq!(
            space.class_counts().iter().sum::<u64>(),
            space.total_training_instances()
        );
    }

    #[test]
    fn register_instance_returns_the_index_for_attribute_updates() {
        let mut space = ProblemSpace::new(&names(&["a", "b"]));
        let idx = space.register_instance("spam");
        space.update_attribute(0, "low", idx);
        space.update_attribute(1, "high", idx);

        assert_eq!(space.conditional_counts(0, "low"), &[1]);
        assert_eq!(space.conditional_counts(1, "high"), &[1]);
    }

    #[test]
    fn conditional_counts_for_unseen_value_is_the_sentinel() {
        let mut space = ProblemSpace::new(&names(&["a"]));
        let idx = space.register_instance("yes");
        space.update_attribute(0, "v", idx);
        assert_eq!(space.conditional_counts(0, "unseen"), &[1]);
    }

    #[test]
    fn conditional_counts_beyond_trained_attributes_is_empty() {
        let space = ProblemSpace::new(&names(&["a"]));
        assert_eq!(space.conditional_counts(5, "v"), &[] as &[u64]);
    }

    #[test]
    fn priors_are_raw_ratios_not_rescaled() {
        let mut space = ProblemSpace::new(&names(&["a"]));
        space.register_instance("yes");
        space.register_instance("yes");
        space.register_instance("no");

        let priors = space.class_priors().unwrap();
        // Raw count/total ratios, in class-index order. No rescaling pass
        // runs after this; these exact values reach the scorer.
        assert_eq!(priors, vec![2.0 / 3.0, 1.0 / 3.0]);
    }

    #[test]
    fn priors_on_empty_training_set_error() {
        let space = ProblemSpace::new(&names(&["a"]));
        assert_eq!(space.class_priors(), Err(ModelError::EmptyTrainingSet));
    }

    #[test]
    fn summary_reflects_the_counting_state() {
        let mut space = ProblemSpace::new(&names(&["a", "b"]));
        let yes = space.register_instance("yes");
        space.update_attribute(0, "1", yes);
        space.update_attribute(1, "x", yes);
        let no = space.register_instance("no");
        space.update_attribute(0, "1", no);
        space.update_attribute(1, "y", no);

        let summary = space.summary();
        assert_eq!(summary.total_training_instances, 2);
        assert_eq!(summary.classes.len(), 2);
        assert_eq!(summary.classes[0].name, "yes");
        assert_eq!(summary.attributes[0].values[0].label, "1");
        assert_eq!(summary.attributes[0].values[0].class_constitution, vec![1, 1]);
        assert_eq!(summary.attributes[1].values[1].class_constitution, vec![0, 1]);
    }
}
