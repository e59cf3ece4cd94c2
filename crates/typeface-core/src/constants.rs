// src/constants.rs
use crate::style::TextStyle;

/// Anchor style for scalable custom fonts whose request names none
pub const DEFAULT_ANCHOR_STYLE: TextStyle = TextStyle::Body;
