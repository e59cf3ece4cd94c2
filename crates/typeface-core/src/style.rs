//! Semantic text styles, weights and design variants

use std::fmt;
use std::str::FromStr;

use crate::error::FontError;

/// Semantic text style used for system fonts and as a dynamic-scaling anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextStyle {
    LargeTitle,
    Title1,
    Title2,
    Title3,
    Headline,
    Subheadline,
    Body,
    Callout,
    Footnote,
    Caption1,
    Caption2,
}

impl TextStyle {
    pub const ALL: [TextStyle; 11] = [
        TextStyle::LargeTitle,
        TextStyle::Title1,
        TextStyle::Title2,
        TextStyle::Title3,
        TextStyle::Headline,
        TextStyle::Subheadline,
        TextStyle::Body,
        TextStyle::Callout,
        TextStyle::Footnote,
        TextStyle::Caption1,
        TextStyle::Caption2,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TextStyle::LargeTitle => "largeTitle",
            TextStyle::Title1 => "title1",
            TextStyle::Title2 => "title2",
            TextStyle::Title3 => "title3",
            TextStyle::Headline => "headline",
            TextStyle::Subheadline => "subheadline",
            TextStyle::Body => "body",
            TextStyle::Callout => "callout",
            TextStyle::Footnote => "footnote",
            TextStyle::Caption1 => "caption1",
            TextStyle::Caption2 => "caption2",
        }
    }
}

impl fmt::Display for TextStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextStyle {
    type Err = FontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "title" => Ok(TextStyle::Title1),
            "caption" => Ok(TextStyle::Caption1),
            other => TextStyle::ALL
                .iter()
                .copied()
                .find(|style| style.name().eq_ignore_ascii_case(other))
                .ok_or_else(|| FontError::UnknownTextStyle(s.to_string())),
        }
    }
}

/// Font weight, lightest to heaviest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weight {
    UltraLight,
    Thin,
    Light,
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
    Black,
}

impl Weight {
    pub const ALL: [Weight; 9] = [
        Weight::UltraLight,
        Weight::Thin,
        Weight::Light,
        Weight::Regular,
        Weight::Medium,
        Weight::Semibold,
        Weight::Bold,
        Weight::Heavy,
        Weight::Black,
    ];

    /// OpenType weight class (100-900)
    pub fn numeric(self) -> u16 {
        match self {
            Weight::UltraLight => 100,
            Weight::Thin => 200,
            Weight::Light => 300,
            Weight::Regular => 400,
            Weight::Medium => 500,
            Weight::Semibold => 600,
            Weight::Bold => 700,
            Weight::Heavy => 800,
            Weight::Black => 900,
        }
    }

    /// Nearest weight for an OpenType weight class
    pub fn from_numeric(value: u16) -> Weight {
        let index = (value.clamp(100, 900) + 50) / 100 - 1;
        Weight::ALL[usize::from(index).min(Weight::ALL.len() - 1)]
    }

    pub fn name(self) -> &'static str {
        match self {
            Weight::UltraLight => "ultraLight",
            Weight::Thin => "thin",
            Weight::Light => "light",
            Weight::Regular => "regular",
            Weight::Medium => "medium",
            Weight::Semibold => "semibold",
            Weight::Bold => "bold",
            Weight::Heavy => "heavy",
            Weight::Black => "black",
        }
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weight {
    type Err = FontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Weight::ALL
            .iter()
            .copied()
            .find(|w| w.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| FontError::UnknownWeight(s.to_string()))
    }
}

/// System font design variant. Independent of the monospace trait.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Design {
    #[default]
    Default,
    Serif,
    Rounded,
    Monospaced,
}

impl Design {
    pub fn name(self) -> &'static str {
        match self {
            Design::Default => "default",
            Design::Serif => "serif",
            Design::Rounded => "rounded",
            Design::Monospaced => "monospaced",
        }
    }
}

impl fmt::Display for Design {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Design {
    type Err = FontError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "default" => Ok(Design::Default),
            "serif" => Ok(Design::Serif),
            "rounded" => Ok(Design::Rounded),
            "monospaced" => Ok(Design::Monospaced),
            _ => Err(FontError::UnknownDesign(s.to_string())),
        }
    }
}
