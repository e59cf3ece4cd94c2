//! Immutable font descriptor produced by composition

use crate::attributes::{AttributeSet, SymbolicTraits};
use crate::error::{FontError, FontResult};
use crate::style::{Design, TextStyle, Weight};

/// How a descriptor's size is determined
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizingMode {
    /// Exact size that never follows user text-size preferences
    Fixed(f32),
    /// Size that scales with the given anchor style through the provider's
    /// dynamic-scaling metrics
    ScalableRelativeTo { style: TextStyle, points: f32 },
}

impl SizingMode {
    pub fn fixed(points: f32) -> FontResult<Self> {
        validate_points(points).map(SizingMode::Fixed)
    }

    pub fn scalable(style: TextStyle, points: f32) -> FontResult<Self> {
        validate_points(points).map(|points| SizingMode::ScalableRelativeTo { style, points })
    }

    pub fn points(&self) -> f32 {
        match *self {
            SizingMode::Fixed(points) => points,
            SizingMode::ScalableRelativeTo { points, .. } => points,
        }
    }

    /// Anchor style for scalable sizing
    pub fn anchor(&self) -> Option<TextStyle> {
        match *self {
            SizingMode::Fixed(_) => None,
            SizingMode::ScalableRelativeTo { style, .. } => Some(style),
        }
    }

    pub fn is_scalable(&self) -> bool {
        self.anchor().is_some()
    }

    pub(crate) fn validate(&self) -> FontResult<()> {
        validate_points(self.points()).map(|_| ())
    }
}

pub(crate) fn validate_points(points: f32) -> FontResult<f32> {
    if points.is_finite() && points > 0.0 {
        Ok(points)
    } else {
        Err(FontError::InvalidPointSize { points })
    }
}

/// What the descriptor names: a semantic system style, the plain system font
/// at some size and weight, or a custom font by name
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FontReference {
    SystemStyle(TextStyle),
    SystemSizeWeight,
    CustomName(String),
}

impl FontReference {
    pub fn is_custom(&self) -> bool {
        matches!(self, FontReference::CustomName(_))
    }
}

/// Complete specification of a font prior to materialization.
///
/// Values are built once per composition step and compared structurally.
#[derive(Debug, Clone, PartialEq)]
pub struct Descriptor {
    pub(crate) reference: FontReference,
    pub(crate) design: Design,
    pub(crate) sizing: SizingMode,
    pub(crate) traits: SymbolicTraits,
    pub(crate) weight: Option<Weight>,
    pub(crate) attributes: AttributeSet,
}

impl Descriptor {
    pub fn new(reference: FontReference, sizing: SizingMode) -> FontResult<Self> {
        sizing.validate()?;
        if let FontReference::CustomName(name) = &reference {
            if name.trim().is_empty() {
                return Err(FontError::InvalidTraitCombination {
                    reason: "custom font name is empty".to_string(),
                });
            }
        }
        Ok(Self {
            reference,
            design: Design::Default,
            sizing,
            traits: SymbolicTraits::empty(),
            weight: None,
            attributes: AttributeSet::default(),
        })
    }

    pub fn with_design(mut self, design: Design) -> Self {
        self.design = design;
        self
    }

    pub fn with_weight(mut self, weight: Option<Weight>) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_traits(mut self, traits: SymbolicTraits) -> Self {
        self.traits = traits;
        self
    }

    pub fn with_attributes(mut self, attributes: AttributeSet) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn reference(&self) -> &FontReference {
        &self.reference
    }

    pub fn design(&self) -> Design {
        self.design
    }

    pub fn sizing(&self) -> SizingMode {
        self.sizing
    }

    pub fn points(&self) -> f32 {
        self.sizing.points()
    }

    pub fn traits(&self) -> SymbolicTraits {
        self.traits
    }

    /// Explicit weight, `None` meaning the reference's natural weight
    pub fn weight(&self) -> Option<Weight> {
        self.weight
    }

    pub fn attributes(&self) -> AttributeSet {
        self.attributes
    }

    /// Same descriptor pointing at the system font instead of `reference`.
    /// Sizing, design, traits, weight and attributes are preserved.
    pub fn substitute_system(&self) -> Self {
        Self {
            reference: FontReference::SystemSizeWeight,
            ..self.clone()
        }
    }

    /// Checks the invariants a provider relies on
    pub fn validate(&self) -> FontResult<()> {
        self.sizing.validate()?;
        if self.traits.contains(SymbolicTraits::BOLD) && self.weight.is_some() {
            return Err(FontError::InvalidTraitCombination {
                reason: "bold trait and explicit weight both set".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizing_mode_validation() {
        assert!(SizingMode::fixed(14.0).is_ok());
        assert_eq!(
            SizingMode::fixed(0.0),
            Err(FontError::InvalidPointSize { points: 0.0 })
        );
        assert!(SizingMode::fixed(f32::NAN).is_err());
        assert!(SizingMode::scalable(TextStyle::Body, f32::INFINITY).is_err());
        assert!(SizingMode::scalable(TextStyle::Body, -3.0).is_err());
    }

    #[test]
    fn test_sizing_mode_accessors() {
        let sizing = SizingMode::scalable(TextStyle::Body, 16.0).unwrap();
        assert_eq!(sizing.points(), 16.0);
        assert_eq!(sizing.anchor(), Some(TextStyle::Body));
        assert!(sizing.is_scalable());
        assert_eq!(SizingMode::Fixed(9.0).anchor(), None);
    }

    #[test]
    fn test_new_descriptor_defaults() {
        let d = Descriptor::new(FontReference::SystemSizeWeight, SizingMode::Fixed(12.0)).unwrap();
        assert_eq!(d.design(), Design::Default);
        assert_eq!(d.weight(), None);
        assert!(d.traits().is_empty());
        assert!(d.attributes().is_empty());
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_empty_custom_name_rejected() {
        let result = Descriptor::new(FontReference::CustomName("  ".into()), SizingMode::Fixed(12.0));
        assert!(matches!(result, Err(FontError::InvalidTraitCombination { .. })));
    }

    #[test]
    fn test_substitute_system_keeps_styling() {
        let d = Descriptor::new(
            FontReference::CustomName("Avenir".into()),
            SizingMode::scalable(TextStyle::Callout, 15.0).unwrap(),
        )
        .unwrap()
        .with_design(Design::Rounded)
        .with_weight(Some(Weight::Medium))
        .with_traits(SymbolicTraits::ITALIC);

        let sub = d.substitute_system();
        assert_eq!(sub.reference(), &FontReference::SystemSizeWeight);
        assert_eq!(sub.sizing(), d.sizing());
        assert_eq!(sub.design(), Design::Rounded);
        assert_eq!(sub.weight(), Some(Weight::Medium));
        assert_eq!(sub.traits(), SymbolicTraits::ITALIC);
    }

    #[test]
    fn test_validate_rejects_unreconciled_bold() {
        let d = Descriptor::new(FontReference::SystemSizeWeight, SizingMode::Fixed(12.0))
            .unwrap()
            .with_weight(Some(Weight::Light))
            .with_traits(SymbolicTraits::BOLD);
        assert!(matches!(d.validate(), Err(FontError::InvalidTraitCombination { .. })));
    }
}
