mod spies;
mod stubs;
mod vec_stream;

pub use spies::{TrainSpyClassifier, TrainSpyHandle};
pub use stubs::FixedLabelClassifier;
pub use vec_stream::VecStream;
