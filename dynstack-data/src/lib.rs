//! Dynstack Data - reactive state for stack pages.
//!
//! This crate contains:
//! - An observable flag store with change broadcast
//! - The article page toggles and the visibility mask derived from them

pub mod articles;
pub mod store;

mod error;

pub use articles::{ArticleSlot, TapAction, article_store, visible_items};
pub use error::DataError;
pub use store::{Store, StoreEvent};
