mod stream;
pub mod tabular;

pub use stream::Stream;
pub use tabular::TabularFileStream;
