use crate::model::value_counter::ValueCounter;
use crate::utils::memory::{MemoryMeter, MemorySized};
use std::mem::size_of;

/// Counts returned for a value label no counter has ever observed.
///
/// This is the single-element `[1]`, not a zero vector: the scorer reads it
/// per class index, so class 0 keeps a nonzero multiplier while every other
/// class falls out of range and is zeroed. Downstream ranking depends on
/// that exact shape.
const UNSEEN_VALUE_COUNTS: &[u64] = &[1];

/// Per-attribute collection of value counters, unique by value label and
/// kept in first-seen order. Lookup is a linear scan; value domains here are
/// small literal token sets.
pub struct AttributeModel {
    name: String,
    values: Vec<ValueCounter>,
}

impl AttributeModel {
    pub fn new(name: String) -> AttributeModel {
        AttributeModel {
            name,
            values: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Records one observation of `value_label` for class `class_index`,
    /// creating the counter on first sight of the label.
    pub fn observe(&mut self, value_label: &str, class_index: usize) {
        for counter in self.values.iter_mut() {
            if counter.label() == value_label {
                counter.increment(class_index);
                return;
            }
        }
        let mut counter = ValueCounter::new(value_label.to_string());
        counter.increment(class_index);
        self.values.push(counter);
    }

    /// The class constitution for `value_label`, or the unseen-value
    /// sentinel when no counter carries that label.
    pub fn counts_for(&self, value_label: &str) -> &[u64] {
        self.values
            .iter()
            .find(|counter| counter.label() == value_label)
            .map(ValueCounter::counts)
            .unwrap_or(UNSEEN_VALUE_COUNTS)
    }

    pub fn value_counters(&self) -> &[ValueCounter] {
        &self.values
    }
}

impl MemorySized for AttributeModel {
    fn inline_size(&self) -> usize {
        size_of::<Self>()
    }

    fn extra_heap_size(&self, meter: &mut MemoryMeter) -> usize {
        let mut total = 0;
        total += meter.measure_field(&self.name);
        total += meter.measure_field(&self.values);
        total
    }
}
