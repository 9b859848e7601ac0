//! The in-memory annotation model consumed by the exporter.
//!
//! An upstream reader resolves its source format into these types; the
//! exporter only ever reads them.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::bbox::BoundingBox;
use super::coord::Point;
use super::space::Pixel;

/// One annotated image: its name, where it lives remotely, its size, and
/// the annotations drawn on it in their original order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AnnotationFile {
    /// File name of the image, e.g. `"frame_0001.jpg"`.
    pub filename: String,

    /// Remote folder of the image (`"/train"`, `"/valid"`, ...). Only used
    /// to pick the output split.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_path: Option<String>,

    /// Image width in pixels, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_width: Option<u32>,

    /// Image height in pixels, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_height: Option<u32>,

    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl AnnotationFile {
    /// Creates a file with no remote path, no dimensions and no annotations.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            remote_path: None,
            image_width: None,
            image_height: None,
            annotations: Vec::new(),
        }
    }

    pub fn with_remote_path(mut self, remote_path: impl Into<String>) -> Self {
        self.remote_path = Some(remote_path.into());
        self
    }

    pub fn with_image_size(mut self, width: u32, height: u32) -> Self {
        self.image_width = Some(width);
        self.image_height = Some(height);
        self
    }

    pub fn with_annotation(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    /// Returns `(width, height)` only when both are present.
    pub fn image_size(&self) -> Option<(u32, u32)> {
        Some((self.image_width?, self.image_height?))
    }
}

/// A single labelled shape.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Annotation {
    pub annotation_class: AnnotationClass,

    /// Geometry payload. Annotations without one are skipped on export.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<AnnotationData>,
}

impl Annotation {
    pub fn new(annotation_class: AnnotationClass, data: Option<AnnotationData>) -> Self {
        Self {
            annotation_class,
            data,
        }
    }

    /// A `bounding_box` annotation with a top-left pixel rectangle.
    pub fn bounding_box(name: impl Into<String>, x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::new(
            AnnotationClass::new(name, AnnotationType::BoundingBox),
            Some(AnnotationData::BoundingBox(BoundingBox::from_xywh(
                x, y, w, h,
            ))),
        )
    }

    /// A `polygon` annotation with its enclosing rectangle and vertex list.
    pub fn polygon(
        name: impl Into<String>,
        bounding_box: Option<BoundingBox<Pixel>>,
        path: Vec<Point<Pixel>>,
    ) -> Self {
        Self::new(
            AnnotationClass::new(name, AnnotationType::Polygon),
            Some(AnnotationData::Polygon(PolygonData {
                bounding_box,
                path: Some(path),
            })),
        )
    }

    pub fn name(&self) -> &str {
        &self.annotation_class.name
    }

    pub fn annotation_type(&self) -> &AnnotationType {
        &self.annotation_class.annotation_type
    }
}

/// The label of an annotation together with the kind of shape it labels.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnnotationClass {
    pub name: String,
    pub annotation_type: AnnotationType,
}

impl AnnotationClass {
    pub fn new(name: impl Into<String>, annotation_type: AnnotationType) -> Self {
        Self {
            name: name.into(),
            annotation_type,
        }
    }
}

/// Kind of shape an annotation class describes.
///
/// Serialized as its snake_case tag (`"bounding_box"`, `"polygon"`,
/// `"complex_polygon"`); any other tag is kept verbatim in `Other`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AnnotationType {
    BoundingBox,
    Polygon,
    ComplexPolygon,
    Other(String),
}

impl AnnotationType {
    pub fn as_str(&self) -> &str {
        match self {
            AnnotationType::BoundingBox => "bounding_box",
            AnnotationType::Polygon => "polygon",
            AnnotationType::ComplexPolygon => "complex_polygon",
            AnnotationType::Other(tag) => tag,
        }
    }

    /// True for the shape kinds that become YOLO lines and therefore enter
    /// the class vocabulary.
    pub fn is_exportable(&self) -> bool {
        !matches!(self, AnnotationType::Other(_))
    }
}

impl From<String> for AnnotationType {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "bounding_box" => AnnotationType::BoundingBox,
            "polygon" => AnnotationType::Polygon,
            "complex_polygon" => AnnotationType::ComplexPolygon,
            _ => AnnotationType::Other(tag),
        }
    }
}

impl From<&str> for AnnotationType {
    fn from(tag: &str) -> Self {
        AnnotationType::from(tag.to_string())
    }
}

impl From<AnnotationType> for String {
    fn from(kind: AnnotationType) -> Self {
        match kind {
            AnnotationType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for AnnotationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geometry payload of an annotation.
///
/// The payload shape is decoded independently of the class's type tag; a
/// disagreement between the two is reported by the exporter, not here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnnotationData {
    BoundingBox(BoundingBox<Pixel>),
    Polygon(PolygonData),
    /// Any payload that is not a JSON object (tags, text, ...).
    Other(serde_json::Value),
}

/// Payload of `polygon` and `complex_polygon` annotations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PolygonData {
    /// Enclosing rectangle precomputed by the annotation source.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox<Pixel>>,

    /// Vertices in drawing order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Point<Pixel>>>,
}
