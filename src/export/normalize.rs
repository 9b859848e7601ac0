//! Geometry normalization: one annotation in, at most one YOLO line out.
//!
//! YOLO lines carry the class id followed by geometry divided by the image
//! size. Boxes are written center-relative (`cx cy w h`); polygons are
//! written either as their enclosing box or as a flat vertex list,
//! depending on [`PolygonMode`].

use std::fmt;

use thiserror::Error;

use super::class_index::ClassIndex;
use crate::ir::{Annotation, AnnotationData, AnnotationType, BoundingBox, Normalized, Pixel, Point};

/// How `polygon` and `complex_polygon` annotations are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum PolygonMode {
    /// Write the enclosing rectangle stored alongside the polygon.
    #[default]
    #[value(name = "bbox")]
    BoundingBox,
    /// Write every vertex as `x y`, normalized by width and height.
    #[value(name = "vertices")]
    Vertices,
}

/// A box in YOLO's center-relative normalized form.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YoloBox {
    pub cx: f64,
    pub cy: f64,
    pub w: f64,
    pub h: f64,
}

impl YoloBox {
    /// Converts a top-left pixel rectangle.
    ///
    /// Width and height are capped at `1.0`. The center is left alone, so a
    /// box overhanging the image edge keeps a center beyond `1.0`, and
    /// nothing is raised to a lower bound.
    pub fn from_pixel_box(bbox: &BoundingBox<Pixel>, image_width: f64, image_height: f64) -> Self {
        let center = bbox.center().to_normalized(image_width, image_height);
        let size = bbox.to_normalized(image_width, image_height);

        Self {
            cx: center.x,
            cy: center.y,
            w: cap_at_full_scale(size.w),
            h: cap_at_full_scale(size.h),
        }
    }
}

// NaN passes through untouched.
fn cap_at_full_scale(value: f64) -> f64 {
    if value > 1.0 {
        1.0
    } else {
        value
    }
}

/// One line of a YOLO label file.
#[derive(Clone, Debug, PartialEq)]
pub enum YoloLine {
    Box {
        class_id: usize,
        bbox: YoloBox,
    },
    Polygon {
        class_id: usize,
        points: Vec<Point<Normalized>>,
    },
}

impl YoloLine {
    pub fn class_id(&self) -> usize {
        match self {
            YoloLine::Box { class_id, .. } | YoloLine::Polygon { class_id, .. } => *class_id,
        }
    }
}

impl fmt::Display for YoloLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YoloLine::Box { class_id, bbox } => write!(
                f,
                "{} {} {} {} {}",
                class_id, bbox.cx, bbox.cy, bbox.w, bbox.h
            ),
            YoloLine::Polygon { class_id, points } => {
                let coords: Vec<String> =
                    points.iter().map(|p| format!("{} {}", p.x, p.y)).collect();
                write!(f, "{} {}", class_id, coords.join(" "))
            }
        }
    }
}

/// What became of one annotation.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Line(YoloLine),
    /// The annotation had no geometry payload.
    NoPayload,
    /// The annotation's type has no YOLO representation.
    UnknownType(String),
}

/// A fault that stops the remaining annotations of a file from being
/// converted.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum GeometryError {
    #[error("class '{class}' has no entry in the class index")]
    UnindexedClass { class: String },

    #[error("image size {width}x{height} has a zero dimension")]
    ZeroImageDimension { width: u32, height: u32 },

    #[error("'{class}' is tagged {tag} but its payload is not a {expected}")]
    PayloadMismatch {
        class: String,
        tag: AnnotationType,
        expected: &'static str,
    },

    #[error("polygon '{class}' has no enclosing bounding_box")]
    MissingBoundingBox { class: String },

    #[error("polygon '{class}' has no vertex path")]
    MissingPath { class: String },
}

/// Converts one annotation of an image of the given pixel size.
pub fn normalize_annotation(
    annotation: &Annotation,
    image_size: (u32, u32),
    class_index: &ClassIndex,
    polygon_mode: PolygonMode,
) -> Result<Outcome, GeometryError> {
    let Some(data) = &annotation.data else {
        return Ok(Outcome::NoPayload);
    };

    let tag = annotation.annotation_type();
    if !tag.is_exportable() {
        return Ok(Outcome::UnknownType(tag.to_string()));
    }

    let class = annotation.name();
    let class_id = class_index
        .get(class)
        .ok_or_else(|| GeometryError::UnindexedClass {
            class: class.to_string(),
        })?;

    let (width, height) = image_size;
    if width == 0 || height == 0 {
        return Err(GeometryError::ZeroImageDimension { width, height });
    }
    let (imw, imh) = (f64::from(width), f64::from(height));

    let mismatch = |expected| GeometryError::PayloadMismatch {
        class: class.to_string(),
        tag: tag.clone(),
        expected,
    };

    let line = match (tag, data) {
        (AnnotationType::BoundingBox, AnnotationData::BoundingBox(bbox)) => YoloLine::Box {
            class_id,
            bbox: YoloBox::from_pixel_box(bbox, imw, imh),
        },
        (AnnotationType::BoundingBox, _) => return Err(mismatch("bounding box")),
        (
            AnnotationType::Polygon | AnnotationType::ComplexPolygon,
            AnnotationData::Polygon(polygon),
        ) => match polygon_mode {
            PolygonMode::BoundingBox => {
                let bbox = polygon.bounding_box.as_ref().ok_or_else(|| {
                    GeometryError::MissingBoundingBox {
                        class: class.to_string(),
                    }
                })?;
                YoloLine::Box {
                    class_id,
                    bbox: YoloBox::from_pixel_box(bbox, imw, imh),
                }
            }
            PolygonMode::Vertices => {
                let path = polygon
                    .path
                    .as_ref()
                    .ok_or_else(|| GeometryError::MissingPath {
                        class: class.to_string(),
                    })?;
                YoloLine::Polygon {
                    class_id,
                    points: path.iter().map(|p| p.to_normalized(imw, imh)).collect(),
                }
            }
        },
        (AnnotationType::Polygon | AnnotationType::ComplexPolygon, _) => {
            return Err(mismatch("polygon"))
        }
        (AnnotationType::Other(other), _) => return Ok(Outcome::UnknownType(other.clone())),
    };

    Ok(Outcome::Line(line))
}
