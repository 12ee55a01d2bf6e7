use crate::core::dataset_header::DatasetHeader;
use crate::core::instance::Instance;
use crate::streams::Stream;
use std::io::Error;

/// In-memory stream over a fixed list of instances.
pub struct VecStream {
    header: DatasetHeader,
    instances: Vec<Instance>,
    position: usize,
}

impl VecStream {
    pub fn new(header: DatasetHeader, instances: Vec<Instance>) -> VecStream {
        VecStream {
            header,
            instances,
            position: 0,
        }
    }
}

impl Stream for VecStream {
    fn header(&self) -> &DatasetHeader {
        &self.header
    }

    fn has_more_instances(&self) -> bool {
        self.position < self.instances.len()
    }

    fn next_instance(&mut self) -> Option<Result<Instance, Error>> {
        let instance = self.instances.get(self.position)?.clone();
        self.position += 1;
        Some(Ok(instance))
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.position = 0;
        Ok(())
    }
}
