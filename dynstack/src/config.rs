//! Stack configuration.
//!
//! A `StackConfig` is an immutable snapshot read by one layout pass. It is
//! normally filled in by a host property panel; it can also be loaded from
//! JSON, in which case every field is optional and falls back to the panel
//! defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::layout::{Alignment, Direction, EndAlignment, MaskPolicy, PaddingConfig};
use crate::primitives::Size;

/// Default gap between items.
pub const DEFAULT_GAP: f32 = 10.0;
/// Default container width.
pub const DEFAULT_WIDTH: f32 = 250.0;
/// Default container height.
pub const DEFAULT_HEIGHT: f32 = 400.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StackConfig {
    /// Space between consecutive visible items.
    pub gap: f32,
    pub direction: Direction,
    /// Cross-axis placement of each item.
    pub alignment: Alignment,
    /// Wrap the stack in a scroll viewport instead of growing the container.
    pub scrollable: bool,
    pub padding: PaddingConfig,
    /// Configured container width.
    pub width: f32,
    /// Configured container height.
    pub height: f32,
    pub end_alignment: EndAlignment,
    pub mask_policy: MaskPolicy,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            gap: DEFAULT_GAP,
            direction: Direction::Vertical,
            alignment: Alignment::Center,
            scrollable: true,
            padding: PaddingConfig::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            end_alignment: EndAlignment::Legacy,
            mask_policy: MaskPolicy::Lenient,
        }
    }
}

impl StackConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: StackConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::debug!("Loaded stack config from {}", path.display());
        Ok(config)
    }

    /// Reject negative or non-finite numbers.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("gap", self.gap),
            ("width", self.width),
            ("height", self.height),
            ("padding.uniform", self.padding.uniform),
            ("padding.top", self.padding.top),
            ("padding.right", self.padding.right),
            ("padding.bottom", self.padding.bottom),
            ("padding.left", self.padding.left),
        ];
        for (field, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }
        Ok(())
    }

    /// The configured container size.
    pub fn container_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn gap(mut self, gap: f32) -> Self {
        self.gap = gap;
        self
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn scrollable(mut self, scrollable: bool) -> Self {
        self.scrollable = scrollable;
        self
    }

    /// Set padding (uniform on all sides).
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = PaddingConfig::uniform(padding);
        self
    }

    /// Set padding per side.
    pub fn padding_per_side(mut self, top: f32, right: f32, bottom: f32, left: f32) -> Self {
        self.padding = PaddingConfig::per_side(top, right, bottom, left);
        self
    }

    /// Set the configured container size.
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn end_alignment(mut self, end_alignment: EndAlignment) -> Self {
        self.end_alignment = end_alignment;
        self
    }

    pub fn mask_policy(mut self, mask_policy: MaskPolicy) -> Self {
        self.mask_policy = mask_policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = StackConfig::default();
        assert_eq!(config.gap, 10.0);
        assert_eq!(config.direction, Direction::Vertical);
        assert_eq!(config.alignment, Alignment::Center);
        assert!(config.scrollable);
        assert_eq!(config.padding.resolve().vertical(), 0.0);
        assert_eq!(config.container_size(), Size::new(250.0, 400.0));
    }

    #[test]
    fn test_json_fills_missing_fields_with_defaults() {
        let config = StackConfig::from_json_str(
            r#"{"direction": "horizontal", "alignment": "end", "padding": {"uniform": 4}}"#,
        )
        .unwrap();
        assert_eq!(config.direction, Direction::Horizontal);
        assert_eq!(config.alignment, Alignment::End);
        assert_eq!(config.gap, DEFAULT_GAP);
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.padding.resolve().left, 4.0);
    }

    #[test]
    fn test_json_per_side_padding() {
        let config = StackConfig::from_json_str(
            r#"{"padding": {"per_side": true, "top": 1, "right": 2, "bottom": 3, "left": 4}}"#,
        )
        .unwrap();
        let padding = config.padding.resolve();
        assert_eq!((padding.top, padding.right, padding.bottom, padding.left), (1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn test_negative_gap_rejected() {
        let err = StackConfig::from_json_str(r#"{"gap": -1}"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { field: "gap", .. }));
    }

    #[test]
    fn test_non_finite_rejected() {
        let config = StackConfig::new().size(f32::INFINITY, 10.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field: "width", .. })
        ));
    }

    #[test]
    fn test_unknown_enum_value_is_json_error() {
        let err = StackConfig::from_json_str(r#"{"direction": "diagonal"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"gap": 0, "scrollable": false, "width": 320}}"#).unwrap();
        let config = StackConfig::load(file.path()).unwrap();
        assert_eq!(config.gap, 0.0);
        assert!(!config.scrollable);
        assert_eq!(config.width, 320.0);
        assert_eq!(config.height, DEFAULT_HEIGHT);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = StackConfig::load(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_builder_pattern() {
        let config = StackConfig::new()
            .gap(4.0)
            .direction(Direction::Horizontal)
            .alignment(Alignment::Start)
            .scrollable(false)
            .padding_per_side(1.0, 2.0, 3.0, 4.0)
            .size(100.0, 50.0)
            .end_alignment(EndAlignment::Symmetric)
            .mask_policy(MaskPolicy::Strict);
        assert_eq!(config.gap, 4.0);
        assert!(config.padding.per_side);
        assert_eq!(config.container_size(), Size::new(100.0, 50.0));
        assert!(config.validate().is_ok());
    }
}
