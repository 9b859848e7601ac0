//! In-memory annotation model.
//!
//! These types describe a corpus of annotated images as an upstream reader
//! hands it over: per image a file name, an optional remote folder, the
//! image size when known, and an ordered list of labelled shapes.
//!
//! Geometry carries its coordinate space in the type (`Pixel` vs
//! `Normalized`), so an unnormalized value cannot be written to a label
//! file by accident.
//!
//! # Example
//!
//! ```
//! use yoloexport::ir::{Annotation, AnnotationFile};
//!
//! let file = AnnotationFile::new("frame_0001.jpg")
//!     .with_remote_path("/valid")
//!     .with_image_size(1920, 1080)
//!     .with_annotation(Annotation::bounding_box("car", 100.0, 200.0, 300.0, 150.0));
//!
//! assert_eq!(file.image_size(), Some((1920, 1080)));
//! ```

mod bbox;
mod coord;
pub mod io_json;
mod model;
mod space;

pub use bbox::BoundingBox;
pub use coord::Point;
pub use model::{
    Annotation, AnnotationClass, AnnotationData, AnnotationFile, AnnotationType, PolygonData,
};
pub use space::{Normalized, Pixel};
