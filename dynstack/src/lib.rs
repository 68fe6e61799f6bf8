//! Dynstack: a stack layout engine with hideable items.
//!
//! Arranges items along a vertical or horizontal axis, skipping the ones a
//! visibility mask hides, with configurable gap, padding and cross-axis
//! alignment. The engine is a pure function of its inputs.
//!
//! # Usage
//!
//! ```
//! use dynstack::{DynamicStack, Size, StackConfig};
//!
//! let stack = DynamicStack::new(StackConfig::new().padding(0.0));
//! let items = [Size::new(100.0, 30.0), Size::new(100.0, 40.0)];
//! let layout = stack.layout(&items, &[true, true]).unwrap();
//! let frame = layout.frame().unwrap();
//! assert_eq!(frame.items[1].top(), 40.0);
//! ```

// Core primitives
pub mod primitives;

// Configuration and errors
pub mod config;
pub mod error;

// Layout system
pub mod layout;

// Scroll geometry
pub mod scroll;

pub use config::StackConfig;
pub use error::{ConfigError, LayoutError};
pub use primitives::{Point, Rect, Size};
pub use scroll::{ScrollAction, ScrollViewport};

pub use layout::{
    Alignment, Direction, DynamicStack, EmptyState, EndAlignment, Item, MaskPolicy, Padding,
    PaddingConfig, PositionedItem, StackFrame, StackItem, StackLayout,
};
