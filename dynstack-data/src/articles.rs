//! Article page toggles.
//!
//! A five-item page (title, then a headline/article pair twice) where tapping
//! a headline opens its article in place and tapping the article closes it
//! again. The open state lives in a [`Store`]; the page's visibility mask is
//! derived from it.

use std::fmt;
use std::str::FromStr;

use tokio::sync::broadcast;

use crate::error::DataError;
use crate::store::{Store, StoreEvent};

/// Store key for the first article's open state.
pub const FIRST_ARTICLE_OPEN: &str = "firstArticleIsOpen";
/// Store key for the second article's open state.
pub const SECOND_ARTICLE_OPEN: &str = "secondArticleIsOpen";

/// Number of items on the article page.
pub const ARTICLE_PAGE_LEN: usize = 5;

/// Position of each item on the article page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticleSlot {
    Title,
    FirstHeadline,
    FirstArticle,
    SecondHeadline,
    SecondArticle,
}

impl ArticleSlot {
    pub const ALL: [ArticleSlot; ARTICLE_PAGE_LEN] = [
        ArticleSlot::Title,
        ArticleSlot::FirstHeadline,
        ArticleSlot::FirstArticle,
        ArticleSlot::SecondHeadline,
        ArticleSlot::SecondArticle,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ArticleSlot::Title => "page title",
            ArticleSlot::FirstHeadline => "first article headline",
            ArticleSlot::FirstArticle => "first article",
            ArticleSlot::SecondHeadline => "second article headline",
            ArticleSlot::SecondArticle => "second article",
        }
    }
}

/// A store seeded with both articles closed.
pub fn article_store() -> (Store, broadcast::Receiver<StoreEvent>) {
    Store::new([(FIRST_ARTICLE_OPEN, false), (SECOND_ARTICLE_OPEN, false)])
}

/// Visibility mask for the article page: each headline shows while its
/// article is closed, each article while it is open.
pub fn visible_items(store: &Store) -> [bool; ARTICLE_PAGE_LEN] {
    let first = store.get(FIRST_ARTICLE_OPEN);
    let second = store.get(SECOND_ARTICLE_OPEN);
    [true, !first, first, !second, second]
}

pub fn open_first_article(store: &mut Store) {
    store.set(FIRST_ARTICLE_OPEN, true);
}

pub fn open_second_article(store: &mut Store) {
    store.set(SECOND_ARTICLE_OPEN, true);
}

pub fn close_first_article(store: &mut Store) {
    store.set(FIRST_ARTICLE_OPEN, false);
}

pub fn close_second_article(store: &mut Store) {
    store.set(SECOND_ARTICLE_OPEN, false);
}

/// Tap behaviors that can be attached to page items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapAction {
    OpenFirstArticle,
    OpenSecondArticle,
    CloseFirstArticle,
    CloseSecondArticle,
}

impl TapAction {
    /// Run the tap against the store.
    pub fn apply(self, store: &mut Store) {
        tracing::debug!("Tap: {}", self);
        match self {
            TapAction::OpenFirstArticle => open_first_article(store),
            TapAction::OpenSecondArticle => open_second_article(store),
            TapAction::CloseFirstArticle => close_first_article(store),
            TapAction::CloseSecondArticle => close_second_article(store),
        }
    }

    /// The tap a page item carries, if any. Headlines open, articles close.
    pub fn for_slot(slot: ArticleSlot) -> Option<TapAction> {
        match slot {
            ArticleSlot::Title => None,
            ArticleSlot::FirstHeadline => Some(TapAction::OpenFirstArticle),
            ArticleSlot::FirstArticle => Some(TapAction::CloseFirstArticle),
            ArticleSlot::SecondHeadline => Some(TapAction::OpenSecondArticle),
            ArticleSlot::SecondArticle => Some(TapAction::CloseSecondArticle),
        }
    }
}

impl fmt::Display for TapAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TapAction::OpenFirstArticle => "open-first",
            TapAction::OpenSecondArticle => "open-second",
            TapAction::CloseFirstArticle => "close-first",
            TapAction::CloseSecondArticle => "close-second",
        };
        f.write_str(name)
    }
}

impl FromStr for TapAction {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open-first" => Ok(TapAction::OpenFirstArticle),
            "open-second" => Ok(TapAction::OpenSecondArticle),
            "close-first" => Ok(TapAction::CloseFirstArticle),
            "close-second" => Ok(TapAction::CloseSecondArticle),
            other => Err(DataError::UnknownTapAction(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_mask_shows_headlines() {
        let (store, _rx) = article_store();
        assert_eq!(visible_items(&store), [true, true, false, true, false]);
    }

    #[test]
    fn test_open_and_close_first() {
        let (mut store, _rx) = article_store();
        open_first_article(&mut store);
        assert_eq!(visible_items(&store), [true, false, true, true, false]);
        close_first_article(&mut store);
        assert_eq!(visible_items(&store), [true, true, false, true, false]);
    }

    #[test]
    fn test_articles_are_independent() {
        let (mut store, _rx) = article_store();
        open_second_article(&mut store);
        assert_eq!(visible_items(&store), [true, true, false, false, true]);
        open_first_article(&mut store);
        close_second_article(&mut store);
        assert_eq!(visible_items(&store), [true, false, true, true, false]);
    }

    #[test]
    fn test_exactly_one_of_each_pair_visible() {
        let (mut store, _rx) = article_store();
        for action in [
            TapAction::OpenFirstArticle,
            TapAction::OpenSecondArticle,
            TapAction::CloseFirstArticle,
            TapAction::CloseSecondArticle,
        ] {
            action.apply(&mut store);
            let mask = visible_items(&store);
            assert!(mask[ArticleSlot::Title.index()]);
            assert_ne!(mask[ArticleSlot::FirstHeadline.index()], mask[ArticleSlot::FirstArticle.index()]);
            assert_ne!(mask[ArticleSlot::SecondHeadline.index()], mask[ArticleSlot::SecondArticle.index()]);
        }
    }

    #[test]
    fn test_repeated_tap_emits_once() {
        let (mut store, mut rx) = article_store();
        TapAction::OpenFirstArticle.apply(&mut store);
        TapAction::OpenFirstArticle.apply(&mut store);
        assert!(rx.try_recv().is_ok());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_parse_round_trip() {
        for action in [
            TapAction::OpenFirstArticle,
            TapAction::OpenSecondArticle,
            TapAction::CloseFirstArticle,
            TapAction::CloseSecondArticle,
        ] {
            assert_eq!(action.to_string().parse::<TapAction>().unwrap(), action);
        }
        assert!(matches!(
            "open-third".parse::<TapAction>(),
            Err(DataError::UnknownTapAction(_))
        ));
    }

    #[test]
    fn test_slot_taps() {
        assert_eq!(TapAction::for_slot(ArticleSlot::Title), None);
        assert_eq!(
            TapAction::for_slot(ArticleSlot::FirstHeadline),
            Some(TapAction::OpenFirstArticle)
        );
        assert_eq!(
            TapAction::for_slot(ArticleSlot::SecondArticle),
            Some(TapAction::CloseSecondArticle)
        );
    }
}
