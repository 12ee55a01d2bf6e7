use crate::core::dataset_header::DatasetHeader;
use crate::core::instance::Instance;
use crate::streams::stream::Stream;
use crate::streams::tabular::parser::{
    is_blank, parse_attribute_names, parse_labeled_row, parse_unlabeled_row,
};
use std::fs::File;
use std::io::{BufRead, BufReader, Error, ErrorKind, Seek, SeekFrom};
use std::path::PathBuf;
use std::sync::Arc;

/// File-backed stream of whitespace-delimited instances.
///
/// Labeled mode reads the attribute-name header row first and yields rows
/// whose final token is the class label. Unlabeled mode is given the schema
/// up front and yields value-only rows; the file has no header row.
#[derive(Debug)]
pub struct TabularFileStream {
    path: PathBuf,
    reader: BufReader<File>,
    header: Arc<DatasetHeader>,
    labeled: bool,
    data_start_pos: u64,
    next_line: Option<String>,
    finished: bool,
}

impl Stream for TabularFileStream {
    fn header(&self) -> &DatasetHeader {
        &self.header
    }

    fn has_more_instances(&self) -> bool {
        !self.finished
    }

    fn next_instance(&mut self) -> Option<Result<Instance, Error>> {
        if self.finished {
            return None;
        }

        let line = self.next_line.take()?;
        if self.fill_next_line().is_err() {
            self.finished = true;
        }

        let parsed = if self.labeled {
            parse_labeled_row(&self.header, &line)
        } else {
            parse_unlabeled_row(&self.header, &line)
        };

        match parsed {
            Ok(instance) => Some(Ok(instance)),
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.reader = BufReader::new(File::open(&self.path)?);
        self.reader.seek(SeekFrom::Start(self.data_start_pos))?;
        self.finished = false;
        self.next_line = None;
        self.fill_next_line()?;
        Ok(())
    }
}

impl TabularFileStream {
    /// Opens a labeled training file: the first non-blank row is the
    /// whitespace-delimited attribute-name header (its last token captions
    /// the class column and is dropped).
    pub fn open_labeled(path: PathBuf) -> Result<Self, Error> {
        let file = File::open(&path)?;
        let mut reader = BufReader::new(file);

        let mut line = String::new();
        let header = loop {
            line.clear();
            let n = reader.read_line(&mut line)?;
            if n == 0 {
                return Err(Error::new(
                    ErrorKind::UnexpectedEof,
                    "file ended before the header row",
                ));
            }
            if !is_blank(&line) {
                break parse_attribute_names(&line)?;
            }
        };
        let data_start_pos = reader.stream_position()?;

        let mut stream = TabularFileStream {
            path,
            reader,
            header: Arc::new(DatasetHeader::new(header)),
            labeled: true,
            data_start_pos,
            next_line: None,
            finished: false,
        };
        stream.fill_next_line()?;
        Ok(stream)
    }

    /// Opens an unlabeled test file against a schema taken from training.
    pub fn open_unlabeled(path: PathBuf, header: Arc<DatasetHeader>) -> Result<Self, Error> {
        let file = File::open(&path)?;
        let reader = BufReader::new(file);

        let mut stream = TabularFileStream {
            path,
            reader,
            header,
            labeled: false,
            data_start_pos: 0,
            next_line: None,
            finished: false,
        };
        stream.fill_next_line()?;
        Ok(stream)
    }

    pub fn header_arc(&self) -> Arc<DatasetHeader> {
        Arc::clone(&self.header)
    }

    fn fill_next_line(&mut self) -> Result<(), Error> {
        if self.finished {
            self.next_line = None;
            return Ok(());
        }
        let mut line = String::new();
        loop {
            line.clear();
            let n = self.reader.read_line(&mut line)?;
            if n == 0 {
                self.finished = true;
                self.next_line = None;
                return Ok(());
            }
            if !is_blank(&line) {
                self.next_line = Some(line.trim().to_string());
                return Ok(());
            }
        }
    }
}
