//! Export report types.
//!
//! Nothing recorded here fails an export. The report exists so that
//! skipped annotations and files cut short by a fault are visible after
//! the run, in the same way the log shows them during it.

use serde::Serialize;
use std::fmt;

/// Summary of one export run.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ExportReport {
    /// Annotation files in the corpus.
    pub files: usize,
    /// Label files written (one per annotation file).
    pub label_files: usize,
    /// YOLO lines written across all label files.
    pub lines: usize,
    /// Annotations skipped because they carried no payload.
    pub skipped_without_payload: usize,
    /// Size of the class vocabulary.
    pub classes: usize,
    pub issues: Vec<ExportIssue>,
}

impl ExportReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, issue: ExportIssue) {
        self.issues.push(issue);
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == ExportSeverity::Warning)
            .count()
    }

    pub fn info_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|i| i.severity == ExportSeverity::Info)
            .count()
    }

    /// Issues carrying the given code.
    pub fn issues_with(&self, code: ExportIssueCode) -> impl Iterator<Item = &ExportIssue> {
        self.issues.iter().filter(move |i| i.code == code)
    }
}

impl fmt::Display for ExportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "  {} files, {} label files, {} lines, {} classes",
            self.files, self.label_files, self.lines, self.classes
        )?;

        if self.skipped_without_payload > 0 {
            writeln!(
                f,
                "  skipped {} annotation(s) without geometry",
                self.skipped_without_payload
            )?;
        }

        for (severity, title, count) in [
            (ExportSeverity::Warning, "Warnings", self.warning_count()),
            (ExportSeverity::Info, "Notes", self.info_count()),
        ] {
            if count == 0 {
                continue;
            }
            writeln!(f)?;
            writeln!(f, "{} ({}):", title, count)?;
            for issue in self.issues.iter().filter(|i| i.severity == severity) {
                writeln!(f, "  - {}: {}", issue.file, issue.message)?;
            }
        }

        Ok(())
    }
}

/// A single diagnostic tied to one annotation file.
#[derive(Clone, Debug, Serialize)]
pub struct ExportIssue {
    pub severity: ExportSeverity,
    pub code: ExportIssueCode,
    /// Filename of the annotation file the issue belongs to.
    pub file: String,
    pub message: String,
}

impl ExportIssue {
    pub fn warning(
        code: ExportIssueCode,
        file: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: ExportSeverity::Warning,
            code,
            file: file.into(),
            message: message.into(),
        }
    }

    pub fn info(code: ExportIssueCode, file: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ExportSeverity::Info,
            code,
            file: file.into(),
            message: message.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportSeverity {
    Warning,
    Info,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportIssueCode {
    /// The file lacks a width or height; its label file is left empty.
    MissingImageDimensions,
    /// An annotation type with no YOLO representation was skipped.
    UnknownAnnotationType,
    /// A geometry fault stopped the file early; earlier lines were kept.
    FileFault,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_split_by_severity() {
        let mut report = ExportReport::new();
        report.add(ExportIssue::warning(
            ExportIssueCode::FileFault,
            "a.jpg",
            "boom",
        ));
        report.add(ExportIssue::info(
            ExportIssueCode::MissingImageDimensions,
            "b.jpg",
            "no size",
        ));

        assert_eq!(report.warning_count(), 1);
        assert_eq!(report.info_count(), 1);
        assert_eq!(report.issues_with(ExportIssueCode::FileFault).count(), 1);
    }

    #[test]
    fn display_lists_warnings_before_notes() {
        let mut report = ExportReport {
            files: 2,
            label_files: 2,
            lines: 3,
            classes: 1,
            ..Default::default()
        };
        report.add(ExportIssue::info(
            ExportIssueCode::MissingImageDimensions,
            "b.jpg",
            "no size",
        ));
        report.add(ExportIssue::warning(
            ExportIssueCode::UnknownAnnotationType,
            "a.jpg",
            "tag",
        ));

        let text = report.to_string();
        assert!(text.contains("2 files, 2 label files, 3 lines, 1 classes"));
        let warnings_at = text.find("Warnings (1):").expect("warnings section");
        let notes_at = text.find("Notes (1):").expect("notes section");
        assert!(warnings_at < notes_at);
        assert!(text.contains("  - a.jpg: tag"));
    }

    #[test]
    fn serializes_codes_in_snake_case() {
        let issue = ExportIssue::warning(ExportIssueCode::FileFault, "a.jpg", "boom");
        let json = serde_json::to_string(&issue).expect("serialize issue");
        assert!(json.contains("\"file_fault\""));
        assert!(json.contains("\"warning\""));
    }
}
