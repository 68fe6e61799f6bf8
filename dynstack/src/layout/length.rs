//! Stack sizing types.
//!
//! Direction, alignment and padding types shared by the config layer and the
//! layout pass.

use serde::{Deserialize, Serialize};

/// The axis items are stacked along.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Items flow top to bottom; height is the primary axis.
    #[default]
    Vertical,
    /// Items flow left to right; width is the primary axis.
    Horizontal,
}

impl Direction {
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Vertical)
    }
}

/// Placement on the cross axis (perpendicular to the stack direction).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Against the leading cross edge, inset by its padding.
    Start,
    /// Centered in the container, ignoring padding.
    #[default]
    Center,
    /// Against the trailing cross edge.
    End,
}

/// How [`Alignment::End`] accounts for trailing padding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndAlignment {
    /// Always subtracts half of the right padding, whatever the direction.
    ///
    /// Matches layouts produced by existing stacks, so it stays the default.
    #[default]
    Legacy,
    /// Subtracts the full trailing cross padding of the actual direction
    /// (right when vertical, bottom when horizontal), mirroring `Start`.
    Symmetric,
}

/// What to do when the visibility mask and the item list disagree in length.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaskPolicy {
    /// Items past the end of the mask are visible; extra mask entries are ignored.
    #[default]
    Lenient,
    /// Any length mismatch is an error.
    Strict,
}

/// Padding around the stack content.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    /// Create padding with explicit values for each side.
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top, right, bottom, left }
    }

    /// Uniform padding on all sides.
    pub fn all(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Total horizontal padding.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Total vertical padding.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Padding before the first item on the primary axis.
    pub fn leading(&self, direction: Direction) -> f32 {
        match direction {
            Direction::Vertical => self.top,
            Direction::Horizontal => self.left,
        }
    }

    /// Padding after the last item on the primary axis.
    pub fn trailing(&self, direction: Direction) -> f32 {
        match direction {
            Direction::Vertical => self.bottom,
            Direction::Horizontal => self.right,
        }
    }

    /// Leading padding on the cross axis.
    ///
    /// Same side as [`Padding::leading`]: a vertical stack insets
    /// start-aligned items by `top`.
    pub fn cross_leading(&self, direction: Direction) -> f32 {
        self.leading(direction)
    }

    /// Trailing padding on the cross axis (right when vertical, bottom when horizontal).
    pub fn cross_trailing(&self, direction: Direction) -> f32 {
        match direction {
            Direction::Vertical => self.right,
            Direction::Horizontal => self.bottom,
        }
    }
}

/// Padding as configured: one shared value, or four independent sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddingConfig {
    /// Applied to every side unless `per_side` is set.
    pub uniform: f32,
    /// Selects the per-side values over `uniform`.
    pub per_side: bool,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl PaddingConfig {
    /// Same padding on all four sides.
    pub fn uniform(value: f32) -> Self {
        Self {
            uniform: value,
            ..Self::default()
        }
    }

    /// Independent padding per side.
    pub fn per_side(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            uniform: 0.0,
            per_side: true,
            top,
            right,
            bottom,
            left,
        }
    }

    /// Resolve the configured mode into concrete four-sided padding.
    pub fn resolve(&self) -> Padding {
        if self.per_side {
            Padding::new(self.top, self.right, self.bottom, self.left)
        } else {
            Padding::all(self.uniform)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_uniform_ignores_sides() {
        let config = PaddingConfig {
            uniform: 8.0,
            per_side: false,
            top: 1.0,
            right: 2.0,
            bottom: 3.0,
            left: 4.0,
        };
        assert_eq!(config.resolve(), Padding::all(8.0));
    }

    #[test]
    fn test_resolve_per_side() {
        let padding = PaddingConfig::per_side(1.0, 2.0, 3.0, 4.0).resolve();
        assert_eq!(padding, Padding::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(padding.horizontal(), 6.0);
        assert_eq!(padding.vertical(), 4.0);
    }

    #[test]
    fn test_padding_sides_by_direction() {
        let padding = Padding::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(padding.leading(Direction::Vertical), 1.0);
        assert_eq!(padding.trailing(Direction::Vertical), 3.0);
        assert_eq!(padding.leading(Direction::Horizontal), 4.0);
        assert_eq!(padding.trailing(Direction::Horizontal), 2.0);
        assert_eq!(padding.cross_trailing(Direction::Vertical), 2.0);
        assert_eq!(padding.cross_trailing(Direction::Horizontal), 3.0);
    }

    #[test]
    fn test_enum_defaults() {
        assert_eq!(Direction::default(), Direction::Vertical);
        assert_eq!(Alignment::default(), Alignment::Center);
        assert_eq!(EndAlignment::default(), EndAlignment::Legacy);
        assert_eq!(MaskPolicy::default(), MaskPolicy::Lenient);
    }
}
