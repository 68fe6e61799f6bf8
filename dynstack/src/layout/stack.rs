//! Dynamic stack - items along one axis, hidden ones skipped.
//!
//! One layout pass reads an immutable [`StackConfig`], an ordered item list
//! and a visibility mask, and produces a [`StackLayout`]: either the
//! empty-state placeholder or a frame of positioned items. The pass keeps no
//! state between calls.
//!
//! ```text
//! resolve padding -> filter visible -> content size -> offsets per item
//! ```

use crate::config::StackConfig;
use crate::error::LayoutError;
use crate::primitives::{Point, Rect, Size};
use crate::scroll::ScrollViewport;

use super::length::{Alignment, Direction, EndAlignment, MaskPolicy, Padding};
use super::placeholder::EmptyState;

// =========================================================================
// Items
// =========================================================================

/// Anything the stack can position. Only the size is read.
pub trait StackItem {
    fn size(&self) -> Size;
}

impl StackItem for Size {
    fn size(&self) -> Size {
        *self
    }
}

impl StackItem for Rect {
    fn size(&self) -> Size {
        Rect::size(self)
    }
}

impl<T: StackItem + ?Sized> StackItem for &T {
    fn size(&self) -> Size {
        (**self).size()
    }
}

/// An opaque handle paired with its measured size.
///
/// The renderer owns whatever `handle` refers to and applies the computed
/// position to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Item<H> {
    pub handle: H,
    pub size: Size,
}

impl<H> Item<H> {
    pub fn new(handle: H, width: f32, height: f32) -> Self {
        Self {
            handle,
            size: Size::new(width, height),
        }
    }
}

impl<H> StackItem for Item<H> {
    fn size(&self) -> Size {
        self.size
    }
}

// =========================================================================
// Visibility
// =========================================================================

/// Whether the item at `index` is shown. Indices past the mask are visible.
#[inline]
pub fn is_visible(index: usize, mask: &[bool]) -> bool {
    mask.get(index).copied().unwrap_or(true)
}

/// Keep the visible items in order, paired with their index in `items`.
pub fn filter_visible<'a, T>(items: &'a [T], mask: &[bool]) -> Vec<(usize, &'a T)> {
    items
        .iter()
        .enumerate()
        .filter(|(index, _)| is_visible(*index, mask))
        .collect()
}

/// Enforce the mask length rule of `policy`.
pub fn check_mask(items: usize, mask: usize, policy: MaskPolicy) -> Result<(), LayoutError> {
    match policy {
        MaskPolicy::Strict if items != mask => Err(LayoutError::MaskLengthMismatch { items, mask }),
        _ => Ok(()),
    }
}

// =========================================================================
// Axis calculations
// =========================================================================

/// Offset of the item at `index` along the primary axis: leading padding plus
/// the size and gap of every item before it.
pub fn main_axis_offset(
    index: usize,
    sizes: &[Size],
    gap: f32,
    padding: &Padding,
    direction: Direction,
) -> f32 {
    sizes
        .iter()
        .take(index)
        .fold(padding.leading(direction), |offset, size| {
            offset + size.main(direction) + gap
        })
}

/// Primary-axis offsets of every item in one scan.
pub fn main_axis_offsets(
    sizes: &[Size],
    gap: f32,
    padding: &Padding,
    direction: Direction,
) -> Vec<f32> {
    sizes
        .iter()
        .scan(padding.leading(direction), |next, size| {
            let offset = *next;
            *next += size.main(direction) + gap;
            Some(offset)
        })
        .collect()
}

/// Offset of one item on the cross axis. Never negative.
pub fn cross_axis_offset(
    item_cross: f32,
    container_cross: f32,
    alignment: Alignment,
    padding: &Padding,
    direction: Direction,
    end_alignment: EndAlignment,
) -> f32 {
    match alignment {
        Alignment::Start => padding.cross_leading(direction),
        Alignment::Center => ((container_cross - item_cross) / 2.0).max(0.0),
        Alignment::End => {
            let trailing = match end_alignment {
                EndAlignment::Legacy => padding.right / 2.0,
                EndAlignment::Symmetric => padding.cross_trailing(direction),
            };
            (container_cross - item_cross - trailing).max(0.0)
        }
    }
}

/// Space taken by `sizes` along the primary axis, including gaps and padding.
pub fn content_size(sizes: &[Size], gap: f32, padding: &Padding, direction: Direction) -> f32 {
    let gaps = gap * sizes.len().saturating_sub(1) as f32;
    let items: f32 = sizes.iter().map(|size| size.main(direction)).sum();
    padding.leading(direction) + padding.trailing(direction) + gaps + items
}

// =========================================================================
// Layout output
// =========================================================================

/// A visible item with its computed position in frame coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedItem<'a, T> {
    /// Index of the item in the unfiltered list.
    pub source_index: usize,
    pub item: &'a T,
    /// Top-left corner (`left`, `top`).
    pub origin: Point,
    pub size: Size,
}

impl<T> PositionedItem<'_, T> {
    pub fn left(&self) -> f32 {
        self.origin.x
    }

    pub fn top(&self) -> f32 {
        self.origin.y
    }

    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}

/// The frame holding the positioned items, anchored at the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct StackFrame<'a, T> {
    pub items: Vec<PositionedItem<'a, T>>,
    /// Frame size: grown on the primary axis to fit the content.
    pub frame_size: Size,
    /// Content size along the primary axis.
    pub content_extent: f32,
    /// Present when the stack scrolls; sized to the configured container.
    pub viewport: Option<ScrollViewport>,
}

impl<T> StackFrame<'_, T> {
    /// Size the stack occupies in its parent.
    pub fn outer_size(&self) -> Size {
        match &self.viewport {
            Some(viewport) => viewport.size,
            None => self.frame_size,
        }
    }

    pub fn is_scrollable(&self) -> bool {
        self.viewport.is_some()
    }
}

/// Result of one layout pass.
#[derive(Debug, Clone, PartialEq)]
pub enum StackLayout<'a, T> {
    /// No items are connected at all.
    Placeholder(EmptyState),
    Stack(StackFrame<'a, T>),
}

impl<'a, T> StackLayout<'a, T> {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, StackLayout::Placeholder(_))
    }

    pub fn frame(&self) -> Option<&StackFrame<'a, T>> {
        match self {
            StackLayout::Stack(frame) => Some(frame),
            StackLayout::Placeholder(_) => None,
        }
    }

    pub fn into_frame(self) -> Option<StackFrame<'a, T>> {
        match self {
            StackLayout::Stack(frame) => Some(frame),
            StackLayout::Placeholder(_) => None,
        }
    }
}

// =========================================================================
// DynamicStack
// =========================================================================

/// A stack whose items can be hidden through a visibility mask.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DynamicStack {
    config: StackConfig,
}

impl DynamicStack {
    pub fn new(config: StackConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Run one layout pass.
    pub fn layout<'a, T: StackItem>(
        &self,
        items: &'a [T],
        mask: &[bool],
    ) -> Result<StackLayout<'a, T>, LayoutError> {
        let config = &self.config;
        config.validate()?;

        let container = config.container_size();
        if items.is_empty() {
            tracing::debug!("Stack has no items, showing placeholder");
            return Ok(StackLayout::Placeholder(EmptyState::new(container)));
        }

        check_mask(items.len(), mask.len(), config.mask_policy)?;

        let direction = config.direction;
        let padding = config.padding.resolve();
        let visible = filter_visible(items, mask);
        let sizes: Vec<Size> = visible.iter().map(|(_, item)| item.size()).collect();

        let content_extent = content_size(&sizes, config.gap, &padding, direction);
        let frame_size = Size::from_axes(
            direction,
            content_extent.max(container.main(direction)),
            container.cross(direction),
        );

        let container_cross = container.cross(direction);
        let offsets = main_axis_offsets(&sizes, config.gap, &padding, direction);
        let positioned: Vec<_> = visible
            .into_iter()
            .zip(sizes)
            .zip(offsets)
            .map(|(((source_index, item), size), main)| {
                let item_cross = size.cross(direction);
                if item_cross > container_cross {
                    tracing::warn!(
                        "Item {} overflows the stack cross axis ({} > {})",
                        source_index,
                        item_cross,
                        container_cross
                    );
                }
                let cross = cross_axis_offset(
                    item_cross,
                    container_cross,
                    config.alignment,
                    &padding,
                    direction,
                    config.end_alignment,
                );
                let origin = Point::from_axes(direction, main, cross);
                tracing::trace!("Item {} at ({}, {})", source_index, origin.x, origin.y);
                PositionedItem {
                    source_index,
                    item,
                    origin,
                    size,
                }
            })
            .collect();

        let viewport = config
            .scrollable
            .then(|| ScrollViewport::new(container, frame_size, direction));

        tracing::debug!(
            "Stack layout: {} of {} items visible, content {} along {:?}",
            positioned.len(),
            items.len(),
            content_extent,
            direction
        );

        Ok(StackLayout::Stack(StackFrame {
            items: positioned,
            frame_size,
            content_extent,
            viewport,
        }))
    }
}
