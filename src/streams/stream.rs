use crate::core::dataset_header::DatasetHeader;
use crate::core::instance::Instance;
use std::io::Error;

/// Pull-based source of instances sharing one schema.
///
/// A malformed row surfaces as `Some(Err(..))` and ends the stream; rows are
/// validated at this boundary, never skipped.
pub trait Stream {
    fn header(&self) -> &DatasetHeader;

    fn has_more_instances(&self) -> bool;

    fn next_instance(&mut self) -> Option<Result<Instance, Error>>;

    fn restart(&mut self) -> Result<(), Error>;
}
