//! Axis-aligned rectangles in top-left XYWH form.

use serde::{Deserialize, Serialize};

use super::coord::Point;
use super::space::{Normalized, Pixel};

/// An axis-aligned rectangle given by its top-left corner and its size.
///
/// This is the shape upstream annotation sources store for boxes, and for
/// the enclosing rectangle they precompute around polygons. Negative or
/// zero sizes are representable; nothing here checks for them.
#[derive(Clone, Copy, PartialEq)]
pub struct BoundingBox<TSpace> {
    pub min: Point<TSpace>,
    pub w: f64,
    pub h: f64,
}

impl<TSpace> BoundingBox<TSpace> {
    #[inline]
    pub fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            min: Point::new(x, y),
            w,
            h,
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.min.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.min.y
    }

    /// Returns the center point `(x + w/2, y + h/2)`.
    #[inline]
    pub fn center(&self) -> Point<TSpace> {
        Point::new(self.min.x + self.w / 2.0, self.min.y + self.h / 2.0)
    }
}

impl BoundingBox<Pixel> {
    /// Divides the horizontal components by `image_width` and the vertical
    /// ones by `image_height`.
    pub fn to_normalized(&self, image_width: f64, image_height: f64) -> BoundingBox<Normalized> {
        BoundingBox::from_xywh(
            self.min.x / image_width,
            self.min.y / image_height,
            self.w / image_width,
            self.h / image_height,
        )
    }
}

impl<TSpace> std::fmt::Debug for BoundingBox<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundingBox")
            .field("x", &self.min.x)
            .field("y", &self.min.y)
            .field("w", &self.w)
            .field("h", &self.h)
            .finish()
    }
}

// Custom serde implementation to avoid TSpace: Serialize/Deserialize bounds
impl<TSpace> Serialize for BoundingBox<TSpace> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("BoundingBox", 4)?;
        state.serialize_field("x", &self.min.x)?;
        state.serialize_field("y", &self.min.y)?;
        state.serialize_field("w", &self.w)?;
        state.serialize_field("h", &self.h)?;
        state.end()
    }
}

impl<'de, TSpace> Deserialize<'de> for BoundingBox<TSpace> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct BoxData {
            x: f64,
            y: f64,
            w: f64,
            h: f64,
        }
        let data = BoxData::deserialize(deserializer)?;
        Ok(BoundingBox::from_xywh(data.x, data.y, data.w, data.h))
    }
}
