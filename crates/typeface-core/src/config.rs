// src/config.rs
use crate::constants::DEFAULT_ANCHOR_STYLE;
use crate::style::TextStyle;

#[derive(Clone, Debug, PartialEq)]
pub struct ResolverConfig {
    /// Anchor used when a scalable custom font does not name one
    pub default_anchor: TextStyle,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            default_anchor: DEFAULT_ANCHOR_STYLE,
        }
    }
}

impl ResolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_anchor(mut self, style: TextStyle) -> Self {
        self.default_anchor = style;
        self
    }
}
