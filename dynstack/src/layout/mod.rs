//! Layout system for the dynamic stack.
//!
//! The stack computes positions only. Items stay owned by the caller and the
//! renderer applies each computed origin to its own handle.

pub mod length;
pub mod placeholder;
pub mod stack;

pub use length::{Alignment, Direction, EndAlignment, MaskPolicy, Padding, PaddingConfig};
pub use placeholder::{EmptyState, PLACEHOLDER_LINES};
pub use stack::{
    DynamicStack, Item, PositionedItem, StackFrame, StackItem, StackLayout, check_mask,
    content_size, cross_axis_offset, filter_visible, is_visible, main_axis_offset,
    main_axis_offsets,
};
