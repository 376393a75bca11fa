//! Canvas geometry.
//!
//! Canvas coordinates follow screen conventions: `x` grows to the right and
//! `y` grows downward, measured from the workspace's top-left corner.

use core::ops::{Add, AddAssign, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{LabResult, ensure_finite};

/// A point on the workspace canvas.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Construct a position, rejecting NaN and infinite coordinates.
    pub fn try_new(x: f64, y: f64) -> LabResult<Self> {
        Ok(Self {
            x: ensure_finite(x, "position x")?,
            y: ensure_finite(y, "position y")?,
        })
    }

    pub fn distance_to(self, other: Position) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Midpoint between two positions (where a connection's delete handle sits).
    pub fn midpoint(self, other: Position) -> Position {
        Position::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// A displacement between two canvas positions.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Offset {
    pub const ZERO: Offset = Offset { dx: 0.0, dy: 0.0 };

    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn is_zero(self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }
}

impl Add<Offset> for Position {
    type Output = Position;

    fn add(self, rhs: Offset) -> Position {
        Position::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl AddAssign<Offset> for Position {
    fn add_assign(&mut self, rhs: Offset) {
        self.x += rhs.dx;
        self.y += rhs.dy;
    }
}

impl Sub for Position {
    type Output = Offset;

    fn sub(self, rhs: Position) -> Offset {
        Offset::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Axis-aligned rectangle, used for the workspace bounding box and hit boxes.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    pub min: Position,
    pub max: Position,
}

impl Rect {
    pub fn from_min_max(min: Position, max: Position) -> Self {
        Self {
            min: Position::new(min.x.min(max.x), min.y.min(max.y)),
            max: Position::new(min.x.max(max.x), min.y.max(max.y)),
        }
    }

    pub fn from_origin_size(origin: Position, width: f64, height: f64) -> Self {
        Self::from_min_max(origin, Position::new(origin.x + width, origin.y + height))
    }

    pub fn from_center_size(center: Position, width: f64, height: f64) -> Self {
        let half = Offset::new(width / 2.0, height / 2.0);
        Self::from_min_max(
            Position::new(center.x - half.dx, center.y - half.dy),
            center + half,
        )
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Inclusive containment test.
    pub fn contains(&self, p: Position) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Convert an absolute position into coordinates relative to this rectangle's corner.
    pub fn to_local(&self, p: Position) -> Position {
        Position::new(p.x - self.min.x, p.y - self.min.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn offset_arithmetic() {
        let a = Position::new(100.0, 50.0);
        let b = a + Offset::new(-25.0, 10.0);
        assert_eq!(b, Position::new(75.0, 60.0));
        assert_eq!(b - a, Offset::new(-25.0, 10.0));
        assert!((a - a).is_zero());
    }

    #[test]
    fn rect_normalizes_corners() {
        let r = Rect::from_min_max(Position::new(10.0, 10.0), Position::new(0.0, 0.0));
        assert_eq!(r.min, Position::ORIGIN);
        assert_eq!(r.width(), 10.0);
        assert!(r.contains(Position::new(10.0, 10.0)));
        assert!(!r.contains(Position::new(10.1, 5.0)));
    }

    #[test]
    fn rect_to_local() {
        let r = Rect::from_origin_size(Position::new(200.0, 120.0), 600.0, 350.0);
        assert_eq!(r.to_local(Position::new(250.0, 130.0)), Position::new(50.0, 10.0));
    }

    #[test]
    fn try_new_rejects_nan() {
        assert!(Position::try_new(f64::NAN, 0.0).is_err());
        assert!(Position::try_new(1.0, 2.0).is_ok());
    }

    proptest! {
        #[test]
        fn centred_box_contains_its_center(
            x in -1e4_f64..1e4,
            y in -1e4_f64..1e4,
            w in 0.0_f64..500.0,
            h in 0.0_f64..500.0,
        ) {
            let center = Position::new(x, y);
            let r = Rect::from_center_size(center, w, h);
            prop_assert!(r.contains(center));
            prop_assert!(r.width() >= 0.0 && r.height() >= 0.0);
        }

        #[test]
        fn local_coordinates_lie_within_size(
            ox in -1e3_f64..1e3,
            oy in -1e3_f64..1e3,
            fx in 0.0_f64..=1.0,
            fy in 0.0_f64..=1.0,
        ) {
            let r = Rect::from_origin_size(Position::new(ox, oy), 800.0, 400.0);
            let p = Position::new(ox + fx * 800.0, oy + fy * 400.0);
            let local = r.to_local(p);
            prop_assert!(local.x >= -1e-9 && local.x <= 800.0 + 1e-9);
            prop_assert!(local.y >= -1e-9 && local.y <= 400.0 + 1e-9);
        }
    }
}
