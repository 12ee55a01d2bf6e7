use crate::classifiers::classifier::Classifier;
use crate::core::dataset_header::DatasetHeader;
use crate::core::instance::Instance;
use crate::model::{ModelError, ModelSummary, ProblemSpace};
use crate::utils::memory::{MemoryMeter, MemorySized};
use std::mem::size_of;
use std::sync::Arc;

/// Naive Bayes over categorical attributes, estimated from raw frequency
/// counts. Training accumulates counts into a `ProblemSpace`; prediction
/// ranks classes by prior-seeded likelihood products read from the frozen
/// counts.
pub struct NaiveBayes {
    header: Option<Arc<DatasetHeader>>,
    space: ProblemSpace,
}

impl NaiveBayes {
    pub fn new() -> Self {
        Self {
            header: None,
            space: ProblemSpace::new(&[]),
        }
    }

    pub fn problem_space(&self) -> &ProblemSpace {
        &self.space
    }

    /// Likelihood per class for one row of attribute values.
    ///
    /// Seeds each class with its raw prior ratio, then per column multiplies
    /// by `counts[z] / class_counts[z]`. A class index that is out of range
    /// for the column's counts is zero evidence and zeroes the class. The
    /// unseen-value sentinel `[1]` only covers index 0, so an unseen value
    /// zeroes every class except class 0, which keeps the multiplier
    /// `1 / class_counts[0]`.
    fn do_naive_bayes_prediction(
        space: &ProblemSpace,
        values: &[String],
    ) -> Result<Vec<f64>, ModelError> {
        let mut likelihoods = space.class_priors()?;
        let class_counts = space.class_counts();

        for (column, value) in values.iter().enumerate() {
            let counts = space.conditional_counts(column, value);
            for z in 0..likelihoods.len() {
                match counts.get(z) {
                    Some(&count) => likelihoods[z] *= count as f64 / class_counts[z] as f64,
                    None => likelihoods[z] = 0.0,
                }
            }
        }
        Ok(likelihoods)
    }
}

impl Classifier for NaiveBayes {
    fn set_model_context(&mut self, header: Arc<DatasetHeader>) {
        self.space = ProblemSpace::new(header.attribute_names());
        self.header = Some(header);
    }

    fn train_on_instance(&mut self, instance: &Instance) -> Result<(), ModelError> {
        let expected = self.space.number_of_attributes();
        let found = instance.number_of_attributes();
        if found != expected {
            return Err(ModelError::ColumnCountMismatch { expected, found });
        }
        let class_label = instance.class_label().ok_or(ModelError::MissingClassLabel)?;

        let class_index = self.space.register_instance(class_label);
        for (column, value) in instance.values().iter().enumerate() {
            self.space.update_attribute(column, value, class_index);
        }
        Ok(())
    }

    fn votes_for_instance(&self, values: &[String]) -> Result<Vec<f64>, ModelError> {
        NaiveBayes::do_naive_bayes_prediction(&self.space, values)
    }

    fn predicted_label(&self, values: &[String]) -> Result<String, ModelError> {
        let likelihoods = self.votes_for_instance(values)?;

        // Left-to-right scan with `>=` against a running maximum that starts
        // at zero: exact ties, including the all-zero case, resolve to the
        // highest class index that attains the maximum.
        let mut maximum_likelihood = 0.0;
        let mut index_of_max = None;
        for (index, &likelihood) in likelihoods.iter().enumerate() {
            if likelihood >= maximum_likelihood {
                maximum_likelihood = likelihood;
                index_of_max = Some(index);
            }
        }

        // votes_for_instance errs on an empty training set, so at least one
        // class exists and the scan always lands on an index.
        index_of_max
            .map(|index| self.space.class_names()[index].clone())
            .ok_or(ModelError::EmptyTrainingSet)
    }

    fn calc_memory_size(&self) -> usize {
        MemoryMeter::measure_root(self)
    }

    fn model_summary(&self) -> Option<ModelSummary> {
        Some(self.space.summary())
    }
}

impl MemorySized for NaiveBayes {
    fn inline_size(&self) -> usize {
        size_of::<Self>()
    }

    fn extra_heap_size(&self, meter: &mut MemoryMeter) -> usize {
        let mut total = 0;
        total += meter.measure_field(&self.header);
        total += meter.measure_field(&self.space);
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn approx(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn row(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn trained(attributes: &[&str], rows: &[(&[&str], &str)]) -> NaiveBayes {
        let header = Arc::new(DatasetHeader::new(row(attributes)));
        let mut nb = NaiveBayes::new();
        nb.set_model_context(header);
        for (values, label) in rows {
            let inst = Instance::labeled(row(values), label.to_string());
            nb.train_on_instance(&inst).unwrap();
        }
        nb
    }

    #[test]
    fn worked_example_votes_and_prediction() {
        let nb = trained(
            &["A", "B"],
            &[(&["1", "x"], "yes"), (&["1", "y"], "no"), (&["2", "x"], "yes")],
        );

        let votes = nb.votes_for_instance(&row(&["1", "x"])).unwrap();
        // yes: 2/3 * 1/2 * 2/2; no: 1/3 * 1/1 * (x never seen for no -> 0)
        assert!(approx(votes[0], 1.0 / 3.0, EPS), "votes={votes:?}");
        assert!(approx(votes[1], 0.0, EPS), "votes={votes:?}");

        assert_eq!(nb.predicted_label(&row(&["1", "x"])).unwrap(), "yes");
    }

    #[test]
    fn exact_tie_goes_to_the_higher_class_index() {
        let nb = trained(&["A"], &[(&["v"], "a"), (&["v"], "b")]);

        let votes = nb.votes_for_instance(&row(&["v"])).unwrap();
        assert!(approx(votes[0], votes[1], EPS), "votes={votes:?}");
        assert_eq!(nb.predicted_label(&row(&["v"])).unwrap(), "b");
    }

    #[test]
    fn unseen_value_keeps_only_class_zero_alive() {
        let nb = trained(&["A"], &[(&["v"], "a"), (&["w"], "b")]);

        let votes = nb.votes_for_instance(&row(&["Z"])).unwrap();
        assert!(approx(votes[0], 0.5, EPS), "votes={votes:?}");
        assert!(approx(votes[1], 0.0, EPS), "votes={votes:?}");
        assert_eq!(nb.predicted_label(&row(&["Z"])).unwrap(), "a");
    }

    #[test]
    fn lazily_short_constitution_zeroes_the_missing_class() {
        // "p" was only ever seen for class 0, so its constitution is [1]
        // and class 1 reads out of range.
        let nb = trained(&["A"], &[(&["p"], "a"), (&["q"], "b")]);

        let votes = nb.votes_for_instance(&row(&["p"])).unwrap();
        assert!(approx(votes[0], 0.5, EPS), "votes={votes:?}");
        assert!(approx(votes[1], 0.0, EPS), "votes={votes:?}");
    }

    #[test]
    fn all_zero_votes_resolve_to_the_last_class() {
        let nb = trained(&["A", "B"], &[(&["v", "p"], "a"), (&["w", "q"], "b")]);

        // Column A's unseen value zeroes class 1; column B's "q" was never
        // seen for class 0 and zeroes it too.
        let votes = nb.votes_for_instance(&row(&["Z", "q"])).unwrap();
        assert!(votes.iter().all(|&l| l == 0.0), "votes={votes:?}");
        assert_eq!(nb.predicted_label(&row(&["Z", "q"])).unwrap(), "b");
    }

    #[test]
    fn no_attributes_ranks_by_raw_priors() {
        let nb = trained(&[], &[(&[], "a"), (&[], "a"), (&[], "b")]);

        let votes = nb.votes_for_instance(&row(&[])).unwrap();
        assert!(approx(votes[0], 2.0 / 3.0, EPS));
        assert!(approx(votes[1], 1.0 / 3.0, EPS));
        assert_eq!(nb.predicted_label(&row(&[])).unwrap(), "a");
    }

    #[test]
    fn empty_training_set_is_an_explicit_error() {
        let nb = trained(&["A"], &[]);

        assert_eq!(
            nb.votes_for_instance(&row(&["v"])).unwrap_err(),
            ModelError::EmptyTrainingSet
        );
        assert_eq!(
            nb.predicted_label(&row(&["v"])).unwrap_err(),
            ModelError::EmptyTrainingSet
        );
    }

    #[test]
    fn training_row_with_wrong_arity_fails_fast() {
        let header = Arc::new(DatasetHeader::new(row(&["A", "B"])));
        let mut nb = NaiveBayes::new();
        nb.set_model_context(header);

        let short = Instance::labeled(row(&["1"]), "yes".into());
        assert_eq!(
            nb.train_on_instance(&short).unwrap_err(),
            ModelError::ColumnCountMismatch {
                expected: 2,
                found: 1
            }
        );
        assert_eq!(nb.problem_space().total_training_instances(), 0);
    }

    #[test]
    fn unlabeled_training_row_is_rejected() {
        let header = Arc::new(DatasetHeader::new(row(&["A"])));
        let mut nb = NaiveBayes::new();
        nb.set_model_context(header);

        let unlabeled = Instance::unlabeled(row(&["1"]));
        assert_eq!(
            nb.train_on_instance(&unlabeled).unwrap_err(),
            ModelError::MissingClassLabel
        );
    }

    #[test]
    fn set_model_context_resets_the_model() {
        let mut nb = trained(&["A"], &[(&["v"], "a")]);
        nb.set_model_context(Arc::new(DatasetHeader::new(row(&["A"]))));

        assert_eq!(nb.problem_space().total_training_instances(), 0);
        assert_eq!(
            nb.votes_for_instance(&row(&["v"])).unwrap_err(),
            ModelError::EmptyTrainingSet
        );
    }

    #[test]
    fn round_trip_recovers_dominant_labels() {
        let rows: &[(&[&str], &str)] = &[
            (&["sunny"], "yes"),
            (&["sunny"], "yes"),
            (&["sunny"], "yes"),
            (&["rainy"], "no"),
            (&["rainy"], "no"),
        ];
        let nb = trained(&["outlook"], rows);

        for (values, label) in rows {
            assert_eq!(nb.predicted_label(&row(values)).unwrap(), *label);
        }
    }

    #[test]
    fn model_summary_reports_trained_counts() {
        let nb = trained(&["A"], &[(&["v"], "a"), (&["v"], "b")]);
        let summary = nb.model_summary().unwrap();
        assert_eq!(summary.total_training_instances, 2);
        assert_eq!(summary.attributes[0].values[0].class_constitution, vec![1, 1]);
    }
}
