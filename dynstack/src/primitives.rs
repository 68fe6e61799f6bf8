//! Core geometry types for the stack engine.
//!
//! Every axis-swapped computation goes through [`Size::main`], [`Size::cross`]
//! and [`Point::from_axes`] so the layout code never branches on direction
//! to pick a field.

use crate::layout::Direction;

/// A point in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Build a point from a primary-axis and a cross-axis coordinate.
    #[inline]
    pub fn from_axes(direction: Direction, main: f32, cross: f32) -> Self {
        match direction {
            Direction::Vertical => Self { x: cross, y: main },
            Direction::Horizontal => Self { x: main, y: cross },
        }
    }

    /// Coordinate along the primary axis.
    #[inline]
    pub fn main(&self, direction: Direction) -> f32 {
        match direction {
            Direction::Vertical => self.y,
            Direction::Horizontal => self.x,
        }
    }

    /// Coordinate along the cross axis.
    #[inline]
    pub fn cross(&self, direction: Direction) -> f32 {
        match direction {
            Direction::Vertical => self.x,
            Direction::Horizontal => self.y,
        }
    }
}

/// A size in 2D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Build a size from a primary-axis and a cross-axis extent.
    #[inline]
    pub fn from_axes(direction: Direction, main: f32, cross: f32) -> Self {
        match direction {
            Direction::Vertical => Self {
                width: cross,
                height: main,
            },
            Direction::Horizontal => Self {
                width: main,
                height: cross,
            },
        }
    }

    /// Extent along the primary axis (height when vertical, width when horizontal).
    #[inline]
    pub fn main(&self, direction: Direction) -> f32 {
        match direction {
            Direction::Vertical => self.height,
            Direction::Horizontal => self.width,
        }
    }

    /// Extent along the cross axis.
    #[inline]
    pub fn cross(&self, direction: Direction) -> f32 {
        match direction {
            Direction::Vertical => self.width,
            Direction::Horizontal => self.height,
        }
    }
}

/// A rectangle in stack-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn from_origin_size(origin: Point, size: Size) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.width,
            height: size.height,
        }
    }

    #[inline]
    pub fn origin(&self) -> Point {
        Point { x: self.x, y: self.y }
    }

    #[inline]
    pub fn size(&self) -> Size {
        Size {
            width: self.width,
            height: self.height,
        }
    }

    /// Get the right edge X coordinate.
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Get the bottom edge Y coordinate.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check whether two rectangles overlap (touching edges do not count).
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_axes() {
        let size = Size::new(100.0, 40.0);
        assert_eq!(size.main(Direction::Vertical), 40.0);
        assert_eq!(size.cross(Direction::Vertical), 100.0);
        assert_eq!(size.main(Direction::Horizontal), 100.0);
        assert_eq!(size.cross(Direction::Horizontal), 40.0);
    }

    #[test]
    fn test_from_axes_swaps_for_vertical() {
        assert_eq!(Point::from_axes(Direction::Vertical, 30.0, 75.0), Point::new(75.0, 30.0));
        assert_eq!(Point::from_axes(Direction::Horizontal, 30.0, 75.0), Point::new(30.0, 75.0));
        assert_eq!(Size::from_axes(Direction::Vertical, 400.0, 250.0), Size::new(250.0, 400.0));
    }

    #[test]
    fn test_rect_intersects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
    }
}
