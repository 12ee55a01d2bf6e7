use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;
use strum_macros::{Display as StrumDisplay, EnumString};

/// Snapshot of a trained model, exportable for inspection. This is a
/// diagnostic dump, not a reloadable artifact.
#[derive(Clone, Debug, Serialize)]
pub struct ModelSummary {
    pub total_training_instances: u64,
    pub classes: Vec<ClassSummary>,
    pub attributes: Vec<AttributeSummary>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ClassSummary {
    pub name: String,
    pub count: u64,
}

#[derive(Clone, Debug, Serialize)]
pub struct AttributeSummary {
    pub name: String,
    pub values: Vec<ValueSummary>,
}

#[derive(Clone, Debug, Serialize)]
pub struct ValueSummary {
    pub label: String,
    pub class_constitution: Vec<u64>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, EnumString, StrumDisplay)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DumpFormat {
    #[default]
    Json,
    Text,
}

impl ModelSummary {
    pub fn export(&self, path: &Path, format: DumpFormat) -> Result<(), Error> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        match format {
            DumpFormat::Json => {
                serde_json::to_writer_pretty(&mut writer, self)?;
                writeln!(writer)?;
            }
            DumpFormat::Text => write!(writer, "{self}")?,
        }
        writer.flush()
    }
}

impl Display for ModelSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        writeln!(
            f,
            "Total Number of Training Instances: {}",
            self.total_training_instances
        )?;
        for (index, class) in self.classes.iter().enumerate() {
            writeln!(
                f,
                "Class {}: {} - {}/{}",
                index, class.name, class.count, self.total_training_instances
            )?;
        }
        for attribute in &self.attributes {
            writeln!(f, "{}", attribute.name)?;
            for value in &attribute.values {
                writeln!(f, "  {} {:?}", value.label, value.class_constitution)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn sample() -> ModelSummary {
        ModelSummary {
            total_training_instances: 3,
            classes: vec![
                ClassSummary {
                    name: "yes".into(),
                    count: 2,
                },
                ClassSummary {
                    name: "no".into(),
                    count: 1,
                },
            ],
            attributes: vec![AttributeSummary {
                name: "A".into(),
                values: vec![ValueSummary {
                    label: "1".into(),
                    class_constitution: vec![1, 1],
                }],
            }],
        }
    }

    #[test]
    fn dump_format_parses_case_insensitively() {
        assert_eq!("json".parse::<DumpFormat>().unwrap(), DumpFormat::Json);
        assert_eq!("TEXT".parse::<DumpFormat>().unwrap(), DumpFormat::Text);
        assert!("yaml".parse::<DumpFormat>().is_err());
    }

    #[test]
    fn json_export_is_valid_and_ordered() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.json");
        sample().export(&path, DumpFormat::Json).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed["total_training_instances"], 3);
        assert_eq!(parsed["classes"][0]["name"], "yes");
        assert_eq!(parsed["attributes"][0]["values"][0]["class_constitution"][1], 1);
    }

    #[test]
    fn text_export_lists_classes_and_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("model.txt");
        sample().export(&path, DumpFormat::Text).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("Total Number of Training Instances: 3"));
        assert!(raw.contains("Class 0: yes - 2/3"));
        assert!(raw.contains("  1 [1, 1]"));
    }
}
