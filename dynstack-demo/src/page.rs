//! Article page driver.
//!
//! Lays the page out once, then applies each tap and re-runs the layout for
//! every change the store reports.

use std::path::PathBuf;

use anyhow::Context;
use dynstack::{DynamicStack, Item, StackConfig, StackLayout};
use dynstack_data::{ArticleSlot, StoreEvent, TapAction, article_store, visible_items};

/// Measured size of each page item, indexed like [`ArticleSlot::ALL`].
const ITEM_SIZES: [(f32, f32); 5] = [
    (220.0, 60.0),
    (220.0, 40.0),
    (220.0, 320.0),
    (220.0, 40.0),
    (220.0, 260.0),
];

/// Command-line options.
#[derive(Debug, Default, PartialEq)]
pub struct Options {
    pub config: Option<PathBuf>,
    pub taps: Vec<TapAction>,
}

impl Options {
    /// An optional leading `.json` path, then tap names.
    pub fn parse(args: &[String]) -> anyhow::Result<Self> {
        let mut args = args.iter().peekable();
        let config = args
            .next_if(|arg| arg.ends_with(".json"))
            .map(PathBuf::from);
        let taps = args
            .map(|arg| arg.parse::<TapAction>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { config, taps })
    }
}

pub fn article_items() -> Vec<Item<ArticleSlot>> {
    ArticleSlot::ALL
        .iter()
        .zip(ITEM_SIZES)
        .map(|(slot, (width, height))| Item::new(*slot, width, height))
        .collect()
}

pub fn run(options: Options) -> anyhow::Result<()> {
    let config = match &options.config {
        Some(path) => StackConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => StackConfig::default(),
    };
    let stack = DynamicStack::new(config);
    let items = article_items();
    let (mut store, mut rx) = article_store();

    let layout = stack.layout(&items, &visible_items(&store))?;
    log_layout(&layout);

    for tap in options.taps {
        tap.apply(&mut store);
        while let Ok(StoreEvent::Changed { key, value }) = rx.try_recv() {
            tracing::info!("{} -> {}, re-running layout", key, value);
            let layout = stack.layout(&items, &visible_items(&store))?;
            log_layout(&layout);
        }
    }
    Ok(())
}

fn log_layout(layout: &StackLayout<'_, Item<ArticleSlot>>) {
    match layout {
        StackLayout::Placeholder(empty) => {
            for line in empty.lines() {
                tracing::info!("{}", line);
            }
        }
        StackLayout::Stack(frame) => {
            let size = frame.outer_size();
            tracing::info!(
                "Stack {}x{} (content {}, scrollable: {})",
                size.width,
                size.height,
                frame.content_extent,
                frame.is_scrollable()
            );
            for positioned in &frame.items {
                tracing::info!(
                    "  {:<24} left={} top={}",
                    positioned.item.handle.name(),
                    positioned.left(),
                    positioned.top()
                );
            }
        }
    }
}
