//! Boundary to the platform font subsystem
//!
//! The core never loads font files or knows default text-style sizes. A
//! [`FontProvider`] supplies base descriptors, dynamic-scaling metrics, and
//! the final materialization.

use std::path::PathBuf;

use crate::attributes::SymbolicTraits;
use crate::descriptor::Descriptor;
use crate::error::ProviderError;
use crate::style::{Design, TextStyle, Weight};

/// Platform defaults the resolver starts composing from
#[derive(Debug, Clone, PartialEq)]
pub struct BaseDescriptor {
    pub points: f32,
    pub weight: Option<Weight>,
    pub design: Design,
    pub traits: SymbolicTraits,
}

impl BaseDescriptor {
    pub fn new(points: f32) -> Self {
        Self {
            points,
            weight: None,
            design: Design::Default,
            traits: SymbolicTraits::empty(),
        }
    }

    pub fn with_weight(mut self, weight: Option<Weight>) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_design(mut self, design: Design) -> Self {
        self.design = design;
        self
    }

    pub fn with_traits(mut self, traits: SymbolicTraits) -> Self {
        self.traits = traits;
        self
    }
}

/// A concrete font handed back to the caller
#[derive(Debug, Clone, PartialEq)]
pub struct RealizedFont {
    /// Family the provider actually selected
    pub family: String,
    /// Descriptor that was materialized
    pub descriptor: Descriptor,
    /// Effective size after dynamic scaling
    pub point_size: f32,
    /// Weight in effect (explicit or the reference's natural weight)
    pub weight: Weight,
    pub line_height: Option<f32>,
    /// Backing file, when the provider loaded one
    pub location: Option<PathBuf>,
    /// Set when a missing custom font was replaced by the system font
    pub used_fallback: bool,
}

/// Collaborator that knows the platform's fonts.
///
/// All calls are blocking; cancellation and timeouts are the provider's
/// business.
pub trait FontProvider {
    /// Platform defaults for a semantic style
    fn preferred_descriptor(
        &self,
        style: TextStyle,
        design: Design,
    ) -> Result<BaseDescriptor, ProviderError>;

    /// The system font at a given size
    fn system_font(
        &self,
        points: f32,
        weight: Option<Weight>,
        design: Design,
    ) -> Result<BaseDescriptor, ProviderError>;

    /// Look up a custom font by name. `None` triggers the system-font fallback.
    fn lookup_custom(&self, name: &str, points: f32) -> Option<BaseDescriptor>;

    /// Apply dynamic-scaling metrics for `anchor` to a realized font
    fn scaled_font(
        &self,
        font: RealizedFont,
        anchor: TextStyle,
    ) -> Result<RealizedFont, ProviderError>;

    /// Turn a final descriptor into a concrete font
    fn materialize(&self, descriptor: &Descriptor) -> Result<RealizedFont, ProviderError>;
}

impl<P: FontProvider + ?Sized> FontProvider for &P {
    fn preferred_descriptor(
        &self,
        style: TextStyle,
        design: Design,
    ) -> Result<BaseDescriptor, ProviderError> {
        (**self).preferred_descriptor(style, design)
    }

    fn system_font(
        &self,
        points: f32,
        weight: Option<Weight>,
        design: Design,
    ) -> Result<BaseDescriptor, ProviderError> {
        (**self).system_font(points, weight, design)
    }

    fn lookup_custom(&self, name: &str, points: f32) -> Option<BaseDescriptor> {
        (**self).lookup_custom(name, points)
    }

    fn scaled_font(
        &self,
        font: RealizedFont,
        anchor: TextStyle,
    ) -> Result<RealizedFont, ProviderError> {
        (**self).scaled_font(font, anchor)
    }

    fn materialize(&self, descriptor: &Descriptor) -> Result<RealizedFont, ProviderError> {
        (**self).materialize(descriptor)
    }
}

impl<P: FontProvider + ?Sized> FontProvider for Box<P> {
    fn preferred_descriptor(
        &self,
        style: TextStyle,
        design: Design,
    ) -> Result<BaseDescriptor, ProviderError> {
        (**self).preferred_descriptor(style, design)
    }

    fn system_font(
        &self,
        points: f32,
        weight: Option<Weight>,
        design: Design,
    ) -> Result<BaseDescriptor, ProviderError> {
        (**self).system_font(points, weight, design)
    }

    fn lookup_custom(&self, name: &str, points: f32) -> Option<BaseDescriptor> {
        (**self).lookup_custom(name, points)
    }

    fn scaled_font(
        &self,
        font: RealizedFont,
        anchor: TextStyle,
    ) -> Result<RealizedFont, ProviderError> {
        (**self).scaled_font(font, anchor)
    }

    fn materialize(&self, descriptor: &Descriptor) -> Result<RealizedFont, ProviderError> {
        (**self).materialize(descriptor)
    }
}
