//! Font requests: a base source plus an ordered list of modifications

use crate::compose::{parse_modifications, Modification};
use crate::error::FontResult;
use crate::style::{Design, TextStyle, Weight};

/// How a custom font's size behaves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scaling {
    /// Fixed size, never follows the user's text-size preference
    Fixed,
    /// Scales with `relative_to`, or with the resolver's default anchor when unset
    Dynamic { relative_to: Option<TextStyle> },
}

/// Where the base descriptor comes from
#[derive(Debug, Clone, PartialEq)]
pub enum FontSource {
    SystemStyle {
        style: TextStyle,
        design: Option<Design>,
    },
    SystemSize {
        points: f32,
        weight: Option<Weight>,
        design: Option<Design>,
    },
    Custom {
        name: String,
        points: f32,
        scaling: Scaling,
    },
}

impl FontSource {
    pub fn system_style(style: TextStyle, design: Option<Design>) -> Self {
        FontSource::SystemStyle { style, design }
    }

    pub fn system_size(points: f32, weight: Option<Weight>, design: Option<Design>) -> Self {
        FontSource::SystemSize { points, weight, design }
    }

    /// Custom font that scales with the default anchor style
    pub fn custom(name: impl Into<String>, points: f32) -> Self {
        FontSource::Custom {
            name: name.into(),
            points,
            scaling: Scaling::Dynamic { relative_to: None },
        }
    }

    pub fn custom_fixed(name: impl Into<String>, points: f32) -> Self {
        FontSource::Custom {
            name: name.into(),
            points,
            scaling: Scaling::Fixed,
        }
    }

    pub fn custom_relative(name: impl Into<String>, points: f32, style: TextStyle) -> Self {
        FontSource::Custom {
            name: name.into(),
            points,
            scaling: Scaling::Dynamic { relative_to: Some(style) },
        }
    }
}

/// A complete, self-contained font request
#[derive(Debug, Clone, PartialEq)]
pub struct FontRequest {
    pub source: FontSource,
    pub modifications: Vec<Modification>,
}

impl FontRequest {
    pub fn new(source: FontSource) -> Self {
        Self {
            source,
            modifications: Vec::new(),
        }
    }

    /// System font for a semantic style with the default design
    pub fn system(style: TextStyle) -> Self {
        Self::new(FontSource::system_style(style, None))
    }

    pub fn system_with_design(style: TextStyle, design: Design) -> Self {
        Self::new(FontSource::system_style(style, Some(design)))
    }

    pub fn system_size(points: f32) -> Self {
        Self::new(FontSource::system_size(points, None, None))
    }

    pub fn custom(name: impl Into<String>, points: f32) -> Self {
        Self::new(FontSource::custom(name, points))
    }

    pub fn custom_fixed(name: impl Into<String>, points: f32) -> Self {
        Self::new(FontSource::custom_fixed(name, points))
    }

    pub fn custom_relative(name: impl Into<String>, points: f32, style: TextStyle) -> Self {
        Self::new(FontSource::custom_relative(name, points, style))
    }

    pub fn large_title() -> Self {
        Self::system(TextStyle::LargeTitle)
    }

    pub fn title() -> Self {
        Self::system(TextStyle::Title1)
    }

    pub fn title2() -> Self {
        Self::system(TextStyle::Title2)
    }

    pub fn title3() -> Self {
        Self::system(TextStyle::Title3)
    }

    pub fn headline() -> Self {
        Self::system(TextStyle::Headline)
    }

    pub fn subheadline() -> Self {
        Self::system(TextStyle::Subheadline)
    }

    pub fn body() -> Self {
        Self::system(TextStyle::Body)
    }

    pub fn callout() -> Self {
        Self::system(TextStyle::Callout)
    }

    pub fn caption() -> Self {
        Self::system(TextStyle::Caption1)
    }

    pub fn caption2() -> Self {
        Self::system(TextStyle::Caption2)
    }

    pub fn footnote() -> Self {
        Self::system(TextStyle::Footnote)
    }

    pub fn with_modification(mut self, modification: Modification) -> Self {
        self.modifications.push(modification);
        self
    }

    /// Append modifications parsed from text such as `"italic, weight(bold)"`
    pub fn with_modifications_str(mut self, input: &str) -> FontResult<Self> {
        self.modifications.extend(parse_modifications(input)?);
        Ok(self)
    }

    pub fn weight(self, weight: Weight) -> Self {
        self.with_modification(Modification::Weight(weight))
    }

    pub fn bold(self) -> Self {
        self.with_modification(Modification::Bold)
    }

    pub fn italic(self) -> Self {
        self.with_modification(Modification::Italic)
    }

    pub fn monospaced(self) -> Self {
        self.with_modification(Modification::Monospace)
    }

    pub fn monospaced_digits(self) -> Self {
        self.with_modification(Modification::MonospacedDigits)
    }

    pub fn small_caps(self) -> Self {
        self.with_modification(Modification::SmallCaps)
    }

    pub fn lowercase_small_caps(self) -> Self {
        self.with_modification(Modification::LowercaseSmallCaps)
    }

    pub fn uppercase_small_caps(self) -> Self {
        self.with_modification(Modification::UppercaseSmallCaps)
    }

    pub fn design(self, design: Design) -> Self {
        self.with_modification(Modification::Design(design))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_records_modifications_in_order() {
        let request = FontRequest::headline().italic().weight(Weight::Heavy).small_caps();
        assert_eq!(
            request.modifications,
            vec![
                Modification::Italic,
                Modification::Weight(Weight::Heavy),
                Modification::SmallCaps,
            ]
        );
        assert_eq!(
            request.source,
            FontSource::SystemStyle { style: TextStyle::Headline, design: None }
        );
    }

    #[test]
    fn test_style_shortcuts() {
        assert_eq!(FontRequest::title(), FontRequest::system(TextStyle::Title1));
        assert_eq!(FontRequest::caption(), FontRequest::system(TextStyle::Caption1));
        assert_eq!(FontRequest::large_title(), FontRequest::system(TextStyle::LargeTitle));
        assert!(FontRequest::body().modifications.is_empty());
    }

    #[test]
    fn test_custom_sources() {
        assert_eq!(
            FontSource::custom("Helvetica", 16.0),
            FontSource::Custom {
                name: "Helvetica".into(),
                points: 16.0,
                scaling: Scaling::Dynamic { relative_to: None },
            }
        );
        assert!(matches!(
            FontSource::custom_fixed("Menlo", 11.0),
            FontSource::Custom { scaling: Scaling::Fixed, .. }
        ));
    }

    #[test]
    fn test_with_modifications_str() {
        let request = FontRequest::body()
            .bold()
            .with_modifications_str("italic design(serif)")
            .unwrap();
        assert_eq!(
            request.modifications,
            vec![Modification::Bold, Modification::Italic, Modification::Design(Design::Serif)]
        );
        assert!(FontRequest::body().with_modifications_str("wobbly").is_err());
    }
}
