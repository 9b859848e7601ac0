#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use yoloexport::ir::AnnotationFile;

pub const SAMPLE_CORPUS: &str = "tests/fixtures/sample_corpus.json";

pub fn sample_corpus() -> Vec<AnnotationFile> {
    yoloexport::ir::io_json::read_corpus(Path::new(SAMPLE_CORPUS)).expect("read sample corpus")
}

pub fn read(path: impl AsRef<Path>) -> String {
    fs::read_to_string(path.as_ref())
        .unwrap_or_else(|err| panic!("read {}: {err}", path.as_ref().display()))
}

/// Every file under `root`, relative to it, with its contents, sorted by path.
pub fn snapshot(root: &Path) -> Vec<(PathBuf, String)> {
    let mut entries: Vec<(PathBuf, String)> = walk(root)
        .into_iter()
        .map(|path| {
            let rel = path.strip_prefix(root).expect("inside root").to_path_buf();
            let contents = read(&path);
            (rel, contents)
        })
        .collect();
    entries.sort();
    entries
}

fn walk(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).expect("read dir") {
        let path = entry.expect("dir entry").path();
        if path.is_dir() {
            files.extend(walk(&path));
        } else {
            files.push(path);
        }
    }
    files
}
