//! Class vocabulary shared by every label file of one export.

use std::collections::{BTreeMap, BTreeSet};

use crate::ir::AnnotationFile;

/// Maps class names to YOLO class ids.
///
/// Ids are dense (`0..len`) and follow the byte-wise ascending order of the
/// names, so the mapping depends only on which names occur, never on the
/// order files are visited in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClassIndex {
    ids: BTreeMap<String, usize>,
}

impl ClassIndex {
    /// Collects every class used by a box or polygon annotation anywhere in
    /// the corpus. Classes used only by other annotation types are left out.
    pub fn build(files: &[AnnotationFile]) -> Self {
        let names: BTreeSet<&str> = files
            .iter()
            .flat_map(|file| &file.annotations)
            .filter(|ann| ann.annotation_type().is_exportable())
            .map(|ann| ann.name())
            .collect();

        let ids = names
            .into_iter()
            .enumerate()
            .map(|(id, name)| (name.to_string(), id))
            .collect();

        Self { ids }
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Class names in id order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        // Ids were assigned in key order, so key order is id order.
        self.ids.keys().map(String::as_str)
    }
}
