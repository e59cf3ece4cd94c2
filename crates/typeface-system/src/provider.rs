//! [`FontProvider`] backed by fonts installed on disk

use typeface_core::{
    BaseDescriptor, Descriptor, Design, FontProvider, FontReference, ProviderError, RealizedFont,
    SymbolicTraits, TextStyle, Weight,
};

use crate::catalog::{best_face, FontCatalog};
use crate::config::SystemProviderConfig;
use crate::constants::DEFAULT_LINE_HEIGHT_FACTOR;
use crate::discovery::SystemFace;
use crate::metrics;

/// Provider that resolves fonts from the local font directories and applies
/// dynamic type scaling for the configured content size
pub struct SystemFontProvider {
    config: SystemProviderConfig,
    catalog: FontCatalog,
}

impl SystemFontProvider {
    /// Scan the configured search paths and build a provider
    pub fn new(config: SystemProviderConfig) -> Self {
        let catalog = FontCatalog::discover(&config.search_paths);
        tracing::info!(
            faces = catalog.len(),
            content_size = %config.content_size,
            "system font provider ready"
        );
        Self { config, catalog }
    }

    pub fn with_catalog(config: SystemProviderConfig, catalog: FontCatalog) -> Self {
        Self { config, catalog }
    }

    pub fn config(&self) -> &SystemProviderConfig {
        &self.config
    }

    pub fn catalog(&self) -> &FontCatalog {
        &self.catalog
    }

    fn check_size(&self, points: f32) -> Result<(), ProviderError> {
        if points.is_finite() && points > 0.0 && points <= self.config.max_point_size {
            Ok(())
        } else {
            Err(ProviderError::InvalidTraitCombination(format!(
                "point size {} outside 0..={}",
                points, self.config.max_point_size
            )))
        }
    }

    fn natural_weight(reference: &FontReference, face: Option<&SystemFace>) -> Weight {
        match reference {
            FontReference::SystemStyle(style) => metrics::natural_weight(*style),
            FontReference::CustomName(_) => face.map(|f| f.weight).unwrap_or(Weight::Regular),
            FontReference::SystemSizeWeight => Weight::Regular,
        }
    }
}

/// Traits a face carries on its own. Only an exactly bold face reports
/// `BOLD`; any other weight is read back from the face at materialization.
fn face_traits(face: &SystemFace) -> SymbolicTraits {
    let mut traits = SymbolicTraits::empty();
    if face.italic {
        traits |= SymbolicTraits::ITALIC;
    }
    if face.monospace {
        traits |= SymbolicTraits::MONOSPACE;
    }
    if face.weight == Weight::Bold {
        traits |= SymbolicTraits::BOLD;
    }
    traits
}

impl FontProvider for SystemFontProvider {
    fn preferred_descriptor(
        &self,
        style: TextStyle,
        design: Design,
    ) -> Result<BaseDescriptor, ProviderError> {
        Ok(BaseDescriptor::new(metrics::default_point_size(style)).with_design(design))
    }

    fn system_font(
        &self,
        points: f32,
        weight: Option<Weight>,
        design: Design,
    ) -> Result<BaseDescriptor, ProviderError> {
        self.check_size(points)?;
        Ok(BaseDescriptor::new(points).with_weight(weight).with_design(design))
    }

    fn lookup_custom(&self, name: &str, points: f32) -> Option<BaseDescriptor> {
        let face = self.catalog.find(name)?;
        tracing::debug!(name = %name, face = %face.face_name, path = %face.path.display(), "custom font found");
        Some(BaseDescriptor::new(points).with_traits(face_traits(&face)))
    }

    fn scaled_font(
        &self,
        mut font: RealizedFont,
        anchor: TextStyle,
    ) -> Result<RealizedFont, ProviderError> {
        let factor = metrics::scale_factor(anchor, self.config.content_size);
        font.point_size *= factor;
        font.line_height = font.line_height.map(|h| h * factor);
        self.check_size(font.point_size)?;
        Ok(font)
    }

    fn materialize(&self, descriptor: &Descriptor) -> Result<RealizedFont, ProviderError> {
        descriptor
            .validate()
            .map_err(|e| ProviderError::InvalidTraitCombination(e.to_string()))?;
        self.check_size(descriptor.points())?;

        let traits = descriptor.traits();
        let italic = traits.contains(SymbolicTraits::ITALIC);
        let monospace = traits.contains(SymbolicTraits::MONOSPACE);

        let (family, face) = match descriptor.reference() {
            FontReference::CustomName(name) => {
                let named = self
                    .catalog
                    .find(name)
                    .ok_or_else(|| ProviderError::MissingResource(name.clone()))?;
                let wanted = descriptor.weight().unwrap_or(named.weight);
                let face = if named.weight == wanted
                    && named.italic == italic
                    && named.monospace == monospace
                {
                    named
                } else {
                    // prefer a sibling face that matches the requested styling
                    let siblings = self.catalog.family_faces(&named.family);
                    best_face(&siblings, wanted, italic, monospace)
                        .cloned()
                        .unwrap_or(named)
                };
                (face.family.clone(), Some(face))
            }
            reference => {
                let family = self.config.family_for(descriptor.design()).to_string();
                let wanted = descriptor
                    .weight()
                    .unwrap_or_else(|| Self::natural_weight(reference, None));
                let faces = self.catalog.family_faces(&family);
                let face = best_face(&faces, wanted, italic, monospace).cloned();
                (family, face)
            }
        };

        let weight = descriptor
            .weight()
            .unwrap_or_else(|| Self::natural_weight(descriptor.reference(), face.as_ref()));
        let points = descriptor.points();
        let line_height = face
            .as_ref()
            .and_then(|f| self.catalog.line_height(f, points))
            .unwrap_or(points * DEFAULT_LINE_HEIGHT_FACTOR);

        Ok(RealizedFont {
            family,
            descriptor: descriptor.clone(),
            point_size: points,
            weight,
            line_height: Some(line_height),
            location: face.map(|f| f.path),
            used_fallback: false,
        })
    }
}
