//! Per-file label emission and split routing.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use super::class_index::ClassIndex;
use super::normalize::{normalize_annotation, Outcome, PolygonMode, YoloLine};
use super::report::{ExportIssue, ExportIssueCode, ExportReport};
use crate::error::YoloExportError;
use crate::ir::AnnotationFile;

const LABEL_EXTENSION: &str = "txt";
const LABELS_DIR: &str = "labels";

/// Dataset partition a label file is written into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Split {
    Train,
    Valid,
    Test,
}

impl Split {
    /// All splits, in the order the dataset index lists them.
    pub const ALL: [Split; 3] = [Split::Train, Split::Valid, Split::Test];

    /// Directory name of the split under the output root.
    pub fn dir_name(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Valid => "valid",
            Split::Test => "test",
        }
    }

    /// Picks the split from an annotation file's remote path.
    ///
    /// Only the exact root folders `/train`, `/valid` and `/test` are
    /// recognised; anything else, nested folders included, lands in train.
    pub fn from_remote_path(remote_path: Option<&str>) -> Split {
        match remote_path {
            Some("/valid") => Split::Valid,
            Some("/test") => Split::Test,
            _ => Split::Train,
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}

/// Returns `<output_dir>/<split>/labels/<filename with .txt extension>`.
pub fn label_path(output_dir: &Path, file: &AnnotationFile) -> PathBuf {
    let split = Split::from_remote_path(file.remote_path.as_deref());
    output_dir
        .join(split.dir_name())
        .join(LABELS_DIR)
        .join(&file.filename)
        .with_extension(LABEL_EXTENSION)
}

/// Converts the annotations of one file, in order.
///
/// Files without both image dimensions produce no lines. A geometry fault
/// ends the file: it is logged and reported, and the lines built before it
/// are returned.
pub fn build_label_lines(
    file: &AnnotationFile,
    class_index: &ClassIndex,
    polygon_mode: PolygonMode,
    report: &mut ExportReport,
) -> Vec<YoloLine> {
    let Some(image_size) = file.image_size() else {
        debug!("{}: no image dimensions, writing empty labels", file.filename);
        report.add(ExportIssue::info(
            ExportIssueCode::MissingImageDimensions,
            &file.filename,
            "image width or height missing; label file left empty",
        ));
        return Vec::new();
    };

    let mut lines = Vec::with_capacity(file.annotations.len());
    for annotation in &file.annotations {
        match normalize_annotation(annotation, image_size, class_index, polygon_mode) {
            Ok(Outcome::Line(line)) => lines.push(line),
            Ok(Outcome::NoPayload) => report.skipped_without_payload += 1,
            Ok(Outcome::UnknownType(tag)) => {
                warn!("{}: not a known annotation type {}", file.filename, tag);
                report.add(ExportIssue::warning(
                    ExportIssueCode::UnknownAnnotationType,
                    &file.filename,
                    format!("skipped '{}' annotation of unknown type {}", annotation.name(), tag),
                ));
            }
            Err(err) => {
                warn!("{}: {}", file.filename, err);
                report.add(ExportIssue::warning(
                    ExportIssueCode::FileFault,
                    &file.filename,
                    format!(
                        "{err}; kept {} line(s), dropped the remaining annotations",
                        lines.len()
                    ),
                ));
                break;
            }
        }
    }

    lines
}

/// Renders label lines as file contents: newline-joined, no trailing
/// newline.
pub fn render_label_text(lines: &[YoloLine]) -> String {
    lines
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Writes the label file for one annotation file and returns its path.
///
/// A label file is always written, empty when nothing was converted.
pub fn export_file(
    file: &AnnotationFile,
    class_index: &ClassIndex,
    output_dir: &Path,
    polygon_mode: PolygonMode,
    report: &mut ExportReport,
) -> Result<PathBuf, YoloExportError> {
    let lines = build_label_lines(file, class_index, polygon_mode, report);
    let path = label_path(output_dir, file);

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| YoloExportError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(&path, render_label_text(&lines)).map_err(|source| {
        YoloExportError::WriteLabel {
            path: path.clone(),
            source,
        }
    })?;

    debug!("wrote {} line(s) to {}", lines.len(), path.display());
    report.label_files += 1;
    report.lines += lines.len();

    Ok(path)
}
