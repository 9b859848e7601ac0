//! YOLO export pipeline.
//!
//! An export runs in three steps over a corpus of annotation files:
//!
//! 1. build the [`ClassIndex`] from the whole corpus;
//! 2. write one label file per annotation file, under
//!    `<output>/<split>/labels/`;
//! 3. write `<output>/dataset.yaml` describing the splits on disk and the
//!    class names in id order.
//!
//! Geometry problems are contained per file and recorded in the returned
//! [`ExportReport`]; only filesystem failures abort the export.

mod class_index;
mod dataset_yaml;
mod emit;
mod normalize;
mod report;

pub use class_index::ClassIndex;
pub use dataset_yaml::{present_splits, render_dataset_yaml, write_dataset_yaml, DATASET_YAML};
pub use emit::{build_label_lines, export_file, label_path, render_label_text, Split};
pub use normalize::{
    normalize_annotation, GeometryError, Outcome, PolygonMode, YoloBox, YoloLine,
};
pub use report::{ExportIssue, ExportIssueCode, ExportReport, ExportSeverity};

use std::path::Path;

use log::info;

use crate::error::YoloExportError;
use crate::ir::AnnotationFile;

/// Options for export behavior.
#[derive(Clone, Debug, Default)]
pub struct ExportOptions {
    /// How polygons are written. Defaults to their enclosing box.
    pub polygon_mode: PolygonMode,
}

/// Exports a corpus into `output_dir`, which must already exist.
///
/// The corpus may be any iterable; it is collected once because it is read
/// twice (for the class index, then per file).
pub fn export_yolo<I>(
    files: I,
    output_dir: &Path,
    opts: &ExportOptions,
) -> Result<ExportReport, YoloExportError>
where
    I: IntoIterator<Item = AnnotationFile>,
{
    let files: Vec<AnnotationFile> = files.into_iter().collect();
    export_corpus(&files, output_dir, opts)
}

/// Exports an already materialized corpus into `output_dir`.
pub fn export_corpus(
    files: &[AnnotationFile],
    output_dir: &Path,
    opts: &ExportOptions,
) -> Result<ExportReport, YoloExportError> {
    let mut report = ExportReport::new();
    report.files = files.len();

    info!("Building class index over {} file(s)...", files.len());
    let class_index = ClassIndex::build(files);
    report.classes = class_index.len();
    info!("Found {} class(es).", class_index.len());

    info!("Writing label files to {}...", output_dir.display());
    for file in files {
        export_file(
            file,
            &class_index,
            output_dir,
            opts.polygon_mode,
            &mut report,
        )?;
    }

    let yaml_path = write_dataset_yaml(output_dir, &class_index)?;
    info!(
        "Wrote {} label file(s) and {}.",
        report.label_files,
        yaml_path.display()
    );

    Ok(report)
}
