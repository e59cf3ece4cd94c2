//! Dynamic type metrics: default sizes per text style and user size preference

use std::fmt;
use std::str::FromStr;

use typeface_core::{TextStyle, Weight};

/// User preference for text size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum ContentSizeCategory {
    ExtraSmall,
    Small,
    Medium,
    #[default]
    Large,
    ExtraLarge,
    ExtraExtraLarge,
    ExtraExtraExtraLarge,
}

impl ContentSizeCategory {
    pub const ALL: [ContentSizeCategory; 7] = [
        ContentSizeCategory::ExtraSmall,
        ContentSizeCategory::Small,
        ContentSizeCategory::Medium,
        ContentSizeCategory::Large,
        ContentSizeCategory::ExtraLarge,
        ContentSizeCategory::ExtraExtraLarge,
        ContentSizeCategory::ExtraExtraExtraLarge,
    ];

    fn column(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            ContentSizeCategory::ExtraSmall => "extraSmall",
            ContentSizeCategory::Small => "small",
            ContentSizeCategory::Medium => "medium",
            ContentSizeCategory::Large => "large",
            ContentSizeCategory::ExtraLarge => "extraLarge",
            ContentSizeCategory::ExtraExtraLarge => "extraExtraLarge",
            ContentSizeCategory::ExtraExtraExtraLarge => "extraExtraExtraLarge",
        }
    }
}

impl fmt::Display for ContentSizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContentSizeCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ContentSizeCategory::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| format!("unknown content size category: {}", s))
    }
}

// Point sizes, columns ordered extraSmall..extraExtraExtraLarge
const SIZE_TABLE: [(TextStyle, [f32; 7]); 11] = [
    (TextStyle::LargeTitle, [31.0, 32.0, 33.0, 34.0, 36.0, 38.0, 40.0]),
    (TextStyle::Title1, [25.0, 26.0, 27.0, 28.0, 30.0, 32.0, 34.0]),
    (TextStyle::Title2, [19.0, 20.0, 21.0, 22.0, 24.0, 26.0, 28.0]),
    (TextStyle::Title3, [17.0, 18.0, 19.0, 20.0, 22.0, 24.0, 26.0]),
    (TextStyle::Headline, [14.0, 15.0, 16.0, 17.0, 19.0, 21.0, 23.0]),
    (TextStyle::Subheadline, [12.0, 13.0, 14.0, 15.0, 17.0, 19.0, 21.0]),
    (TextStyle::Body, [14.0, 15.0, 16.0, 17.0, 19.0, 21.0, 23.0]),
    (TextStyle::Callout, [13.0, 14.0, 15.0, 16.0, 18.0, 20.0, 22.0]),
    (TextStyle::Footnote, [12.0, 12.0, 12.0, 13.0, 15.0, 17.0, 19.0]),
    (TextStyle::Caption1, [11.0, 11.0, 11.0, 12.0, 14.0, 16.0, 18.0]),
    (TextStyle::Caption2, [11.0, 11.0, 11.0, 11.0, 13.0, 15.0, 17.0]),
];

fn sizes(style: TextStyle) -> &'static [f32; 7] {
    // SIZE_TABLE lists every TextStyle in declaration order
    &SIZE_TABLE[style as usize].1
}

/// Size of `style` for the given preference
pub fn point_size(style: TextStyle, category: ContentSizeCategory) -> f32 {
    sizes(style)[category.column()]
}

/// Size of `style` at the standard (large) preference
pub fn default_point_size(style: TextStyle) -> f32 {
    point_size(style, ContentSizeCategory::Large)
}

/// Weight a style renders with when the request sets none
pub fn natural_weight(style: TextStyle) -> Weight {
    match style {
        TextStyle::Headline => Weight::Semibold,
        _ => Weight::Regular,
    }
}

/// Multiplier that maps a size anchored to `anchor` from the standard
/// preference to `category`
pub fn scale_factor(anchor: TextStyle, category: ContentSizeCategory) -> f32 {
    point_size(anchor, category) / default_point_size(anchor)
}

/// Scale `points` relative to `anchor`
pub fn scaled_point_size(points: f32, anchor: TextStyle, category: ContentSizeCategory) -> f32 {
    points * scale_factor(anchor, category)
}
