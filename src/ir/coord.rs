//! Polygon vertices tagged with their coordinate space.

use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

use super::space::{Normalized, Pixel};

/// A 2D point. `TSpace` is [`Pixel`] or [`Normalized`].
#[derive(Clone, Copy, PartialEq)]
pub struct Point<TSpace> {
    pub x: f64,
    pub y: f64,
    _space: PhantomData<TSpace>,
}

impl<TSpace> Point<TSpace> {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            _space: PhantomData,
        }
    }
}

impl Point<Pixel> {
    /// Divides x by the image width and y by the image height.
    #[inline]
    pub fn to_normalized(&self, image_width: f64, image_height: f64) -> Point<Normalized> {
        Point::new(self.x / image_width, self.y / image_height)
    }
}

impl<TSpace> std::fmt::Debug for Point<TSpace> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Point")
            .field("x", &self.x)
            .field("y", &self.y)
            .finish()
    }
}

// Hand-written so that TSpace needs no serde bounds.
impl<TSpace> Serialize for Point<TSpace> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("Point", 2)?;
        state.serialize_field("x", &self.x)?;
        state.serialize_field("y", &self.y)?;
        state.end()
    }
}

impl<'de, TSpace> Deserialize<'de> for Point<TSpace> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct PointData {
            x: f64,
            y: f64,
        }
        let data = PointData::deserialize(deserializer)?;
        Ok(Point::new(data.x, data.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_each_axis_by_its_own_dimension() {
        let p: Point<Pixel> = Point::new(320.0, 120.0);
        let n = p.to_normalized(640.0, 480.0);
        assert_eq!(n.x, 0.5);
        assert_eq!(n.y, 0.25);
    }

    #[test]
    fn deserializes_from_xy_object() {
        let p: Point<Pixel> = serde_json::from_str(r#"{"x": 1.5, "y": 2}"#).expect("parse point");
        assert_eq!(p, Point::new(1.5, 2.0));
    }
}
