//! JSON loading for the annotation model.
//!
//! This reads the serde serialization of [`AnnotationFile`] itself, not any
//! upstream annotation tool's format. A document holds either a single
//! annotation file or an array of them; a directory is read as the
//! concatenation of every `.json` document beneath it.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use walkdir::WalkDir;

use super::model::AnnotationFile;
use crate::error::YoloExportError;

const CORPUS_EXTENSION: &str = "json";

#[derive(Deserialize)]
#[serde(untagged)]
enum CorpusDocument {
    Many(Vec<AnnotationFile>),
    One(Box<AnnotationFile>),
}

impl From<CorpusDocument> for Vec<AnnotationFile> {
    fn from(doc: CorpusDocument) -> Self {
        match doc {
            CorpusDocument::Many(files) => files,
            CorpusDocument::One(file) => vec![*file],
        }
    }
}

/// Reads a corpus from a JSON file, or from every `.json` file under a
/// directory.
///
/// Directory entries are visited in order of their relative path so that
/// the resulting corpus order does not depend on the filesystem.
pub fn read_corpus(path: &Path) -> Result<Vec<AnnotationFile>, YoloExportError> {
    if !path.is_dir() {
        return read_corpus_json(path);
    }

    let mut documents = collect_json_files(path)?;
    documents.sort_by_cached_key(|doc| rel_string(path, doc));

    let mut corpus = Vec::new();
    for doc in documents {
        corpus.extend(read_corpus_json(&doc)?);
    }
    Ok(corpus)
}

/// Reads a single corpus JSON document.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn read_corpus_json(path: &Path) -> Result<Vec<AnnotationFile>, YoloExportError> {
    let file = File::open(path).map_err(YoloExportError::Io)?;
    let reader = BufReader::new(file);

    let doc: CorpusDocument =
        serde_json::from_reader(reader).map_err(|source| YoloExportError::CorpusJsonParse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(doc.into())
}

/// Parses a corpus from a JSON string.
///
/// Useful for testing without file I/O.
pub fn from_json_str(json: &str) -> Result<Vec<AnnotationFile>, serde_json::Error> {
    serde_json::from_str::<CorpusDocument>(json).map(Into::into)
}

fn collect_json_files(root: &Path) -> Result<Vec<PathBuf>, YoloExportError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry.map_err(|source| YoloExportError::CorpusDiscovery {
            path: root.to_path_buf(),
            message: format!("failed while traversing directory: {source}"),
        })?;

        let is_json = entry
            .path()
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(CORPUS_EXTENSION));

        if entry.file_type().is_file() && is_json {
            files.push(entry.path().to_path_buf());
        }
    }

    Ok(files)
}

fn rel_string(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.to_string_lossy().replace('\\', "/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const ONE_FILE: &str = r#"{
        "filename": "a.jpg",
        "remote_path": "/valid",
        "image_width": 640,
        "image_height": 480,
        "annotations": [
            {
                "annotation_class": {"name": "car", "annotation_type": "bounding_box"},
                "data": {"x": 10, "y": 20, "w": 30, "h": 40}
            }
        ]
    }"#;

    #[test]
    fn single_object_and_array_documents_both_parse() {
        let one = from_json_str(ONE_FILE).expect("parse single file");
        assert_eq!(one.len(), 1);
        assert_eq!(one[0].remote_path.as_deref(), Some("/valid"));

        let many = from_json_str(&format!("[{ONE_FILE}, {ONE_FILE}]")).expect("parse array");
        assert_eq!(many.len(), 2);
    }

    #[test]
    fn directory_is_read_in_relative_path_order() {
        let temp = tempfile::tempdir().expect("create temp dir");
        fs::create_dir_all(temp.path().join("nested")).expect("create nested dir");
        fs::write(
            temp.path().join("nested/b.json"),
            r#"{"filename": "b.jpg"}"#,
        )
        .expect("write b");
        fs::write(temp.path().join("a.json"), r#"[{"filename": "a.jpg"}]"#).expect("write a");
        fs::write(temp.path().join("notes.txt"), "ignored").expect("write txt");

        let corpus = read_corpus(temp.path()).expect("read corpus dir");
        let names: Vec<&str> = corpus.iter().map(|f| f.filename.as_str()).collect();
        assert_eq!(names, vec!["a.jpg", "b.jpg"]);
    }

    #[test]
    fn malformed_document_reports_its_path() {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = temp.path().join("broken.json");
        fs::write(&path, "{not json").expect("write broken json");

        let err = read_corpus(&path).unwrap_err();
        match err {
            YoloExportError::CorpusJsonParse { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected CorpusJsonParse, got {other:?}"),
        }
    }
}
