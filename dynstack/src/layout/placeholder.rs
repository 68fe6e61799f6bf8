//! Empty-state content shown when a stack has no connected items.

use crate::primitives::Size;

/// Background color of the placeholder panel, as RGB bytes.
pub const PLACEHOLDER_BACKGROUND: [u8; 3] = [255, 170, 34];
/// Inner padding of the placeholder panel.
pub const PLACEHOLDER_PADDING: f32 = 10.0;
/// Font size of the instruction lines.
pub const PLACEHOLDER_FONT_SIZE: f32 = 14.0;

/// Instructions shown to the designer, in order.
pub const PLACEHOLDER_LINES: [&str; 2] = [
    "1. Connect to items.",
    "2. Override the `visibleItems` prop to control which items are shown",
];

/// Static informational panel filling the configured container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmptyState {
    pub size: Size,
}

impl EmptyState {
    pub fn new(size: Size) -> Self {
        Self { size }
    }

    pub fn lines(&self) -> &'static [&'static str] {
        &PLACEHOLDER_LINES
    }
}
