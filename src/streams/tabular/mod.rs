mod parser;
mod tabular_file_stream;

pub use tabular_file_stream::TabularFileStream;
