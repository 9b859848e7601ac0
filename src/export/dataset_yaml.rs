//! The `dataset.yaml` index written next to the split folders.

use std::fs;
use std::path::{Path, PathBuf};

use super::class_index::ClassIndex;
use super::emit::Split;
use crate::error::YoloExportError;

pub const DATASET_YAML: &str = "dataset.yaml";

/// Splits whose directory exists under `output_dir`, in index order.
///
/// Whatever is on disk counts, including split folders that predate the
/// export or received no annotations.
pub fn present_splits(output_dir: &Path) -> Vec<Split> {
    Split::ALL
        .into_iter()
        .filter(|split| output_dir.join(split.dir_name()).exists())
        .collect()
}

/// Renders the index document for the given splits and classes.
pub fn render_dataset_yaml(splits: &[Split], class_index: &ClassIndex) -> String {
    let mut yaml = String::new();

    for split in Split::ALL {
        if !splits.contains(&split) {
            continue;
        }
        match split {
            Split::Train => yaml.push_str("train: ../train/images\n"),
            Split::Valid => yaml.push_str("val: ../valid/images\n"),
            Split::Test => yaml.push_str("test: ../test/images\n\n"),
        }
    }

    let names: Vec<String> = class_index.names().map(yaml_single_quoted).collect();
    yaml.push_str(&format!("nc: {}\n", class_index.len()));
    yaml.push_str(&format!("names: [{}]\n", names.join(", ")));
    yaml
}

/// Writes `<output_dir>/dataset.yaml` and returns its path.
///
/// Must run after every label file is written: the split lines are driven
/// by which split directories exist at this point.
pub fn write_dataset_yaml(
    output_dir: &Path,
    class_index: &ClassIndex,
) -> Result<PathBuf, YoloExportError> {
    let splits = present_splits(output_dir);
    let path = output_dir.join(DATASET_YAML);

    fs::write(&path, render_dataset_yaml(&splits, class_index)).map_err(|source| {
        YoloExportError::WriteDatasetYaml {
            path: path.clone(),
            source,
        }
    })?;

    Ok(path)
}

fn yaml_single_quoted(raw: &str) -> String {
    format!("'{}'", raw.replace('\'', "''"))
}
