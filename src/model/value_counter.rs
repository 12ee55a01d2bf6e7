use crate::utils::memory::{MemoryMeter, MemorySized};
use std::mem::size_of;

/// Frequency vector for a single attribute value: how many training
/// instances of each class carried this value for the owning attribute.
///
/// `class_constitution` is indexed by class index and grows lazily: it is
/// zero-filled only up to the highest class index that has been incremented.
/// A trailing index that was never needed stays unmaterialized and reads as
/// zero downstream.
pub struct ValueCounter {
    label: String,
    class_constitution: Vec<u64>,
}

impl ValueCounter {
    pub fn new(label: String) -> ValueCounter {
        ValueCounter {
            label,
            class_constitution: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Counts one more instance of class `class_index` carrying this value,
    /// growing the constitution with zeros so the index becomes valid.
    pub fn increment(&mut self, class_index: usize) {
        if class_index >= self.class_constitution.len() {
            self.class_constitution.resize(class_index + 1, 0);
        }
        self.class_constitution[class_index] += 1;
    }

    pub fn counts(&self) -> &[u64] {
        &self.class_constitution
    }
}

impl MemorySized for ValueCounter {
    fn inline_size(&self) -> usize {
        size_of::<Self>()
    }

    fn extra_heap_size(&self, meter: &mut MemoryMeter) -> usize {
        let mut total = 0;
        total += meter.measure_field(&self.label);
        total += meter.measure_field(&self.class_constitution);
        total
    }
}
