//! Font resolution: source → composed descriptor → realized font
//!
//! Resolution is synchronous and single-attempt. The only recovery it
//! performs is replacing a missing custom font with the system font at the
//! same sizing; everything else the provider reports goes straight back to
//! the caller.

use tracing::{debug, warn};

use crate::compose::{fold, reconcile_weight};
use crate::config::ResolverConfig;
use crate::descriptor::{validate_points, Descriptor, FontReference, SizingMode};
use crate::error::{FontError, FontResult, ProviderError};
use crate::provider::{BaseDescriptor, FontProvider, RealizedFont};
use crate::request::{FontRequest, FontSource, Scaling};

/// Final descriptor of a request, before materialization
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedFont {
    pub descriptor: Descriptor,
    /// The requested custom font was missing and the system font stands in
    pub used_fallback: bool,
}

/// Resolves [`FontRequest`]s against a [`FontProvider`]
pub struct FontResolver<P> {
    provider: P,
    config: ResolverConfig,
}

impl<P: FontProvider> FontResolver<P> {
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, ResolverConfig::default())
    }

    pub fn with_config(provider: P, config: ResolverConfig) -> Self {
        Self { provider, config }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Resolve a request into a concrete font
    pub fn resolve(&self, request: &FontRequest) -> FontResult<RealizedFont> {
        let prepared = self.prepare(request)?;
        self.materialize(prepared)
    }

    /// Build the final descriptor for a request without materializing it.
    /// Identical requests always produce identical descriptors.
    pub fn prepare(&self, request: &FontRequest) -> FontResult<PreparedFont> {
        let base = self.base_descriptor(&request.source)?;

        let composed = fold(&base.descriptor, &request.modifications);
        let descriptor = reconcile_weight(&composed);
        descriptor.validate()?;

        debug!(
            reference = ?descriptor.reference(),
            sizing = ?descriptor.sizing(),
            weight = ?descriptor.weight(),
            traits = ?descriptor.traits(),
            modifications = request.modifications.len(),
            "prepared font descriptor"
        );

        Ok(PreparedFont {
            descriptor,
            used_fallback: base.used_fallback,
        })
    }

    /// Build the unmodified descriptor for a source
    pub fn base_descriptor(&self, source: &FontSource) -> FontResult<PreparedFont> {
        match source {
            FontSource::SystemStyle { style, design } => {
                let base = self
                    .provider
                    .preferred_descriptor(*style, design.unwrap_or_default())
                    .map_err(provider_failure)?;
                let sizing = SizingMode::scalable(*style, base.points)?;
                let descriptor = from_base(FontReference::SystemStyle(*style), sizing, &base)?;
                Ok(PreparedFont { descriptor, used_fallback: false })
            }
            FontSource::SystemSize { points, weight, design } => {
                let points = validate_points(*points)?;
                let base = self
                    .provider
                    .system_font(points, *weight, design.unwrap_or_default())
                    .map_err(provider_failure)?;
                let descriptor = from_base(
                    FontReference::SystemSizeWeight,
                    SizingMode::Fixed(points),
                    &base,
                )?
                .with_weight(weight.or(base.weight));
                Ok(PreparedFont { descriptor, used_fallback: false })
            }
            FontSource::Custom { name, points, scaling } => {
                let points = validate_points(*points)?;
                let sizing = match scaling {
                    Scaling::Fixed => SizingMode::Fixed(points),
                    Scaling::Dynamic { relative_to } => SizingMode::scalable(
                        relative_to.unwrap_or(self.config.default_anchor),
                        points,
                    )?,
                };

                match self.provider.lookup_custom(name, points) {
                    Some(base) => {
                        let descriptor =
                            from_base(FontReference::CustomName(name.clone()), sizing, &base)?;
                        Ok(PreparedFont { descriptor, used_fallback: false })
                    }
                    None => {
                        warn!(name = %name, points, "custom font unavailable, using system font");
                        let base = self
                            .provider
                            .system_font(points, None, Default::default())
                            .map_err(provider_failure)?;
                        let descriptor =
                            from_base(FontReference::SystemSizeWeight, sizing, &base)?;
                        Ok(PreparedFont { descriptor, used_fallback: true })
                    }
                }
            }
        }
    }

    /// Ask the provider for a concrete font, applying dynamic scaling for
    /// scalable descriptors
    pub fn materialize(&self, prepared: PreparedFont) -> FontResult<RealizedFont> {
        let PreparedFont { mut descriptor, mut used_fallback } = prepared;

        let realized = match self.provider.materialize(&descriptor) {
            Ok(font) => font,
            Err(ProviderError::MissingResource(name)) if descriptor.reference().is_custom() => {
                warn!(name = %name, "custom font vanished before materialization, using system font");
                descriptor = descriptor.substitute_system();
                used_fallback = true;
                self.provider
                    .materialize(&descriptor)
                    .map_err(provider_failure)?
            }
            Err(err) => return Err(provider_failure(err)),
        };

        let mut realized = match descriptor.sizing().anchor() {
            Some(anchor) => self
                .provider
                .scaled_font(realized, anchor)
                .map_err(provider_failure)?,
            None => realized,
        };
        realized.used_fallback = used_fallback;

        debug!(
            family = %realized.family,
            point_size = realized.point_size,
            weight = %realized.weight,
            used_fallback,
            "materialized font"
        );
        Ok(realized)
    }
}

fn from_base(
    reference: FontReference,
    sizing: SizingMode,
    base: &BaseDescriptor,
) -> FontResult<Descriptor> {
    Ok(Descriptor::new(reference, sizing)?
        .with_design(base.design)
        .with_weight(base.weight)
        .with_traits(base.traits))
}

/// Provider errors that are not recovered here. A missing resource that is
/// not a custom font is a subsystem failure, not a missing custom font.
fn provider_failure(err: ProviderError) -> FontError {
    match err {
        ProviderError::MissingResource(name) => FontError::ProviderUnavailable {
            message: format!("missing resource: {}", name),
        },
        other => other.into(),
    }
}
