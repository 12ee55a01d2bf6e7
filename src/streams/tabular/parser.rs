use crate::core::dataset_header::DatasetHeader;
use crate::core::instance::Instance;
use std::io::{Error, ErrorKind};

pub(super) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Parses the training file's first row into the attribute-name list.
///
/// The row is whitespace-delimited; the last token captions the class
/// column and is not an attribute name slot, so it is dropped. A header
/// consisting of only the class caption declares zero attributes, which is
/// legal (classification then ranks by priors alone).
pub(super) fn parse_attribute_names(line: &str) -> Result<Vec<String>, Error> {
    let mut tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    if tokens.is_empty() {
        return Err(Error::new(
            ErrorKind::InvalidData,
            "header row carries no tokens",
        ));
    }
    tokens.pop();
    Ok(tokens)
}

/// Parses one labeled row: attribute values in header order, then the class
/// label as the final token.
pub(super) fn parse_labeled_row(header: &DatasetHeader, line: &str) -> Result<Instance, Error> {
    let mut tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    let expected = header.number_of_attributes() + 1;
    if tokens.len() != expected {
        return Err(Error::new(
            ErrorKind::InvalidData,
            format!(
                "labeled row carries {} tokens but the header declares {} ({} values + class label)",
                tokens.len(),
                expected,
                header.number_of_attributes()
            ),
        ));
    }
    let class_label = tokens.pop().expect("arity checked above");
    Ok(Instance::labeled(tokens, class_label))
}

/// Parses one unlabeled row: attribute values only, same column order as
/// training.
pub(super) fn parse_unlabeled_row(header: &DatasetHeader, line: &str) -> Result<Instance, Error> {
    let tokens: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    if tokens.len() != header.number_of_attributes() {
        return Err(Error::new(
            ErrorKind::InvalidData,
            format!(
                "unlabeled row carries {} tokens but the header declares {} attributes",
                tokens.len(),
                header.number_of_attributes()
            ),
        ));
    }
    Ok(Instance::unlabeled(tokens))
}
