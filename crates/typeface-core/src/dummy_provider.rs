//! Dummy provider for testing resolution without a platform font stack

use std::cell::RefCell;
use std::collections::HashMap;

use crate::attributes::SymbolicTraits;
use crate::descriptor::{Descriptor, FontReference};
use crate::error::ProviderError;
use crate::provider::{BaseDescriptor, FontProvider, RealizedFont};
use crate::style::{Design, TextStyle, Weight};

/// Default sizes at the standard content size
const STYLE_SIZES: [(TextStyle, f32); 11] = [
    (TextStyle::LargeTitle, 34.0),
    (TextStyle::Title1, 28.0),
    (TextStyle::Title2, 22.0),
    (TextStyle::Title3, 20.0),
    (TextStyle::Headline, 17.0),
    (TextStyle::Subheadline, 15.0),
    (TextStyle::Body, 17.0),
    (TextStyle::Callout, 16.0),
    (TextStyle::Footnote, 13.0),
    (TextStyle::Caption1, 12.0),
    (TextStyle::Caption2, 11.0),
];

/// In-memory provider that records every materialized descriptor
pub struct DummyProvider {
    style_sizes: HashMap<TextStyle, f32>,
    /// Available custom fonts and the traits their base descriptor carries
    custom_fonts: HashMap<String, SymbolicTraits>,
    /// Custom fonts that look up fine but fail to materialize
    vanishing_fonts: Vec<String>,
    scale_factor: f32,
    failure: Option<ProviderError>,
    materialized: RefCell<Vec<Descriptor>>,
}

impl Default for DummyProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DummyProvider {
    pub fn new() -> Self {
        DummyProvider {
            style_sizes: STYLE_SIZES.into_iter().collect(),
            custom_fonts: HashMap::new(),
            vanishing_fonts: Vec::new(),
            scale_factor: 1.0,
            failure: None,
            materialized: RefCell::new(Vec::new()),
        }
    }

    pub fn with_custom_font(self, name: &str) -> Self {
        self.with_custom_font_traits(name, SymbolicTraits::empty())
    }

    pub fn with_custom_font_traits(mut self, name: &str, traits: SymbolicTraits) -> Self {
        self.custom_fonts.insert(name.to_string(), traits);
        self
    }

    pub fn with_vanishing_font(mut self, name: &str) -> Self {
        self.custom_fonts.insert(name.to_string(), SymbolicTraits::empty());
        self.vanishing_fonts.push(name.to_string());
        self
    }

    pub fn with_style_size(mut self, style: TextStyle, points: f32) -> Self {
        self.style_sizes.insert(style, points);
        self
    }

    /// Multiplier applied by `scaled_font`
    pub fn with_scale_factor(mut self, factor: f32) -> Self {
        self.scale_factor = factor;
        self
    }

    /// Make every `materialize` call fail with `err`
    pub fn failing_with(mut self, err: ProviderError) -> Self {
        self.failure = Some(err);
        self
    }

    /// Descriptors passed to `materialize`, oldest first
    pub fn materialized(&self) -> Vec<Descriptor> {
        self.materialized.borrow().clone()
    }

    fn natural_weight(reference: &FontReference) -> Weight {
        match reference {
            FontReference::SystemStyle(TextStyle::Headline) => Weight::Semibold,
            _ => Weight::Regular,
        }
    }

    fn system_family(design: Design) -> String {
        match design {
            Design::Default => "System".to_string(),
            other => format!("System {}", other),
        }
    }
}

impl FontProvider for DummyProvider {
    fn preferred_descriptor(
        &self,
        style: TextStyle,
        design: Design,
    ) -> Result<BaseDescriptor, ProviderError> {
        let points = self
            .style_sizes
            .get(&style)
            .copied()
            .ok_or_else(|| ProviderError::Unavailable(format!("no metrics for {}", style)))?;
        Ok(BaseDescriptor::new(points).with_design(design))
    }

    fn system_font(
        &self,
        points: f32,
        weight: Option<Weight>,
        design: Design,
    ) -> Result<BaseDescriptor, ProviderError> {
        Ok(BaseDescriptor::new(points).with_weight(weight).with_design(design))
    }

    fn lookup_custom(&self, name: &str, points: f32) -> Option<BaseDescriptor> {
        self.custom_fonts
            .get(name)
            .map(|traits| BaseDescriptor::new(points).with_traits(*traits))
    }

    fn scaled_font(
        &self,
        mut font: RealizedFont,
        _anchor: TextStyle,
    ) -> Result<RealizedFont, ProviderError> {
        font.point_size *= self.scale_factor;
        font.line_height = font.line_height.map(|h| h * self.scale_factor);
        Ok(font)
    }

    fn materialize(&self, descriptor: &Descriptor) -> Result<RealizedFont, ProviderError> {
        self.materialized.borrow_mut().push(descriptor.clone());

        if let Some(err) = &self.failure {
            return Err(err.clone());
        }
        descriptor
            .validate()
            .map_err(|e| ProviderError::InvalidTraitCombination(e.to_string()))?;

        let family = match descriptor.reference() {
            FontReference::CustomName(name) => {
                if !self.custom_fonts.contains_key(name) || self.vanishing_fonts.contains(name) {
                    return Err(ProviderError::MissingResource(name.clone()));
                }
                name.clone()
            }
            _ => Self::system_family(descriptor.design()),
        };

        let points = descriptor.points();
        Ok(RealizedFont {
            family,
            descriptor: descriptor.clone(),
            point_size: points,
            weight: descriptor
                .weight()
                .unwrap_or_else(|| Self::natural_weight(descriptor.reference())),
            line_height: Some(points * 1.2),
            location: None,
            used_fallback: false,
        })
    }
}
