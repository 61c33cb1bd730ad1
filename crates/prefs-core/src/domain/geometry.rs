//! 2D point and bounds quadrilateral value types.
//!
//! The bounds are four independent corner points describing the calibrated
//! region of the owning application (e.g., the part of a camera image that
//! maps onto a projection surface).  No relationship between the corners is
//! enforced: they may be in any order and need not form a convex shape.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A point (or vector) in 2D space with `f32` components.
///
/// Serialises as `{"x": .., "y": ..}`.  Because serde also allows structs to
/// be deserialised from a sequence, a two-element array `[x, y]` is accepted
/// on input as well.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Vector2 {
    /// The origin `(0, 0)`.
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };

    /// Creates a point from its two components.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the X component.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Returns the Y component.
    pub fn y(&self) -> f32 {
        self.y
    }
}

impl From<(f32, f32)> for Vector2 {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// The four corners of the calibrated region, clockwise from the top-left.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    pub top_left: Vector2,
    pub top_right: Vector2,
    pub bottom_right: Vector2,
    pub bottom_left: Vector2,
}

impl Bounds {
    /// Creates bounds from the four corners in clockwise order.
    pub const fn new(
        top_left: Vector2,
        top_right: Vector2,
        bottom_right: Vector2,
        bottom_left: Vector2,
    ) -> Self {
        Self {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// Returns the corners as an array in clockwise order starting at the top-left.
    pub fn corners(&self) -> [Vector2; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector2_default_is_origin() {
        assert_eq!(Vector2::default(), Vector2::ZERO);
    }

    #[test]
    fn test_vector2_accessors_return_components() {
        let v = Vector2::new(1.5, -2.0);
        assert_eq!(v.x(), 1.5);
        assert_eq!(v.y(), -2.0);
    }

    #[test]
    fn test_vector2_from_tuple() {
        let v: Vector2 = (3.0, 4.0).into();
        assert_eq!(v, Vector2::new(3.0, 4.0));
    }

    #[test]
    fn test_vector2_display_matches_log_format() {
        assert_eq!(Vector2::new(10.0, 20.5).to_string(), "(10,20.5)");
    }

    #[test]
    fn test_vector2_serializes_as_object() {
        // Arrange
        let v = Vector2::new(1.0, 2.0);

        // Act
        let json = serde_json::to_value(v).expect("serialize");

        // Assert
        assert_eq!(json, serde_json::json!({ "x": 1.0, "y": 2.0 }));
    }

    #[test]
    fn test_vector2_deserializes_from_two_element_array() {
        let v: Vector2 = serde_json::from_str("[5.0, 6.0]").expect("deserialize");
        assert_eq!(v, Vector2::new(5.0, 6.0));
    }

    #[test]
    fn test_vector2_rejects_three_element_array() {
        let result: Result<Vector2, _> = serde_json::from_str("[1.0, 2.0, 3.0]");
        assert!(result.is_err());
    }

    #[test]
    fn test_bounds_corners_are_clockwise_from_top_left() {
        // Arrange
        let bounds = Bounds::new(
            Vector2::new(0.0, 0.0),
            Vector2::new(1.0, 0.0),
            Vector2::new(1.0, 1.0),
            Vector2::new(0.0, 1.0),
        );

        // Act
        let corners = bounds.corners();

        // Assert
        assert_eq!(corners[0], bounds.top_left);
        assert_eq!(corners[1], bounds.top_right);
        assert_eq!(corners[2], bounds.bottom_right);
        assert_eq!(corners[3], bounds.bottom_left);
    }

    #[test]
    fn test_bounds_accept_non_convex_corners() {
        // No ordering or convexity invariant is enforced.
        let bounds = Bounds::new(
            Vector2::new(5.0, 5.0),
            Vector2::new(-1.0, 3.0),
            Vector2::new(5.0, 5.0),
            Vector2::new(100.0, -7.0),
        );
        assert_eq!(bounds.top_left, bounds.bottom_right);
    }
}
