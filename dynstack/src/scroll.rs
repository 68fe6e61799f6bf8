//! Scroll viewport geometry.
//!
//! A scrollable stack keeps its configured size and lets the content frame
//! grow behind it. `ScrollViewport` holds the geometry the scroll container
//! needs: viewport size, content size and the current offset along the
//! stack direction. Drawing the scrollbar is left to the renderer.

use crate::layout::Direction;
use crate::primitives::{Point, Rect, Size};

/// An action on a scroll viewport, produced by event handling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScrollAction {
    /// Scroll by a delta (positive = scroll content towards start).
    ScrollBy(f32),
    /// Jump to an absolute offset.
    ScrollTo(f32),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollViewport {
    /// Viewport size (the configured container size).
    pub size: Size,
    /// Size of the content frame behind the viewport.
    pub content: Size,
    /// Axis the viewport scrolls along.
    pub direction: Direction,
    /// Current scroll offset (0 = start).
    offset: f32,
}

impl ScrollViewport {
    pub fn new(size: Size, content: Size, direction: Direction) -> Self {
        Self {
            size,
            content,
            direction,
            offset: 0.0,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Largest valid offset; zero when the content fits.
    pub fn max_offset(&self) -> f32 {
        (self.content.main(self.direction) - self.size.main(self.direction)).max(0.0)
    }

    /// Whether the content is larger than the viewport.
    pub fn can_scroll(&self) -> bool {
        self.max_offset() > 0.0
    }

    /// Apply a scroll action.
    pub fn apply(&mut self, action: ScrollAction) {
        match action {
            ScrollAction::ScrollBy(delta) => self.scroll_by(delta),
            ScrollAction::ScrollTo(offset) => self.scroll_to(offset),
        }
    }

    /// Scroll by a delta (positive = scroll content towards start).
    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll_to(self.offset - delta);
    }

    pub fn scroll_to(&mut self, offset: f32) {
        self.offset = offset.clamp(0.0, self.max_offset());
    }

    /// The part of the content frame currently shown, in frame coordinates.
    pub fn visible_rect(&self) -> Rect {
        Rect::from_origin_size(Point::from_axes(self.direction, self.offset, 0.0), self.size)
    }

    /// Whether any part of `rect` (in frame coordinates) is on screen.
    pub fn is_visible(&self, rect: &Rect) -> bool {
        self.visible_rect().intersects(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> ScrollViewport {
        ScrollViewport::new(
            Size::new(250.0, 400.0),
            Size::new(250.0, 1000.0),
            Direction::Vertical,
        )
    }

    #[test]
    fn test_max_offset() {
        assert_eq!(viewport().max_offset(), 600.0);
        let fits = ScrollViewport::new(Size::new(250.0, 400.0), Size::new(250.0, 400.0), Direction::Vertical);
        assert_eq!(fits.max_offset(), 0.0);
        assert!(!fits.can_scroll());
    }

    #[test]
    fn test_scroll_by_clamps() {
        let mut vp = viewport();
        vp.scroll_by(-100.0);
        assert_eq!(vp.offset(), 100.0);
        vp.scroll_by(500.0);
        assert_eq!(vp.offset(), 0.0);
        vp.apply(ScrollAction::ScrollBy(-10_000.0));
        assert_eq!(vp.offset(), 600.0);
    }

    #[test]
    fn test_scroll_to_clamps() {
        let mut vp = viewport();
        vp.apply(ScrollAction::ScrollTo(250.0));
        assert_eq!(vp.offset(), 250.0);
        vp.scroll_to(-5.0);
        assert_eq!(vp.offset(), 0.0);
    }

    #[test]
    fn test_visible_rect_follows_offset() {
        let mut vp = viewport();
        vp.scroll_to(100.0);
        assert_eq!(vp.visible_rect(), Rect::new(0.0, 100.0, 250.0, 400.0));
        assert!(vp.is_visible(&Rect::new(0.0, 450.0, 10.0, 10.0)));
        assert!(!vp.is_visible(&Rect::new(0.0, 0.0, 10.0, 50.0)));
    }

    #[test]
    fn test_horizontal_scrolls_along_x() {
        let mut vp = ScrollViewport::new(
            Size::new(250.0, 400.0),
            Size::new(900.0, 400.0),
            Direction::Horizontal,
        );
        assert_eq!(vp.max_offset(), 650.0);
        vp.scroll_to(50.0);
        assert_eq!(vp.visible_rect().origin(), Point::new(50.0, 0.0));
    }
}
