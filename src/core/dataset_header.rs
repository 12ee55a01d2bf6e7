use crate::utils::memory::{MemoryMeter, MemorySized};
use std::fmt;
use std::mem::size_of;

/// Schema of one dataset: the attribute (column) names in file order.
///
/// Built once from the training file's header row, before any instance is
/// processed. Column index `x` refers to the same attribute for the whole
/// run; the class column is not part of this list.
#[derive(Clone)]
pub struct DatasetHeader {
    attribute_names: Vec<String>,
}

impl DatasetHeader {
    pub fn new(attribute_names: Vec<String>) -> DatasetHeader {
        DatasetHeader { attribute_names }
    }

    pub fn attribute_names(&self) -> &[String] {
        &self.attribute_names
    }

    pub fn number_of_attributes(&self) -> usize {
        self.attribute_names.len()
    }

    pub fn attribute_name_at(&self, index: usize) -> Option<&str> {
        self.attribute_names.get(index).map(String::as_str)
    }

    pub fn index_of_attribute(&self, name: &str) -> Option<usize> {
        self.attribute_names.iter().position(|n| n == name)
    }
}

impl MemorySized for DatasetHeader {
    fn inline_size(&self) -> usize {
        size_of::<Self>()
    }

    fn extra_heap_size(&self, meter: &mut MemoryMeter) -> usize {
        meter.measure_field(&self.attribute_names)
    }
}

impl fmt::Debug for DatasetHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatasetHeader")
            .field("n_attributes", &self.attribute_names.len())
            .finish()
    }
}
