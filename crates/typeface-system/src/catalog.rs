//! Font catalog with lazy loading and face selection

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use fontdue::{Font, FontSettings};
use typeface_core::Weight;

use crate::discovery::{discover_faces, fontconfig_lookup, normalize_name, SystemFace};
use crate::error::{DiscoveryError, DiscoveryResult};

/// Discovered faces plus a cache of the ones parsed so far
pub struct FontCatalog {
    faces: Vec<SystemFace>,
    /// Parsed fonts keyed by file path
    loaded: Mutex<HashMap<PathBuf, Arc<Font>>>,
}

impl FontCatalog {
    /// Scan `search_paths` and build a catalog
    pub fn discover(search_paths: &[PathBuf]) -> Self {
        Self::from_faces(discover_faces(search_paths))
    }

    pub fn from_faces(faces: Vec<SystemFace>) -> Self {
        Self {
            faces,
            loaded: Mutex::new(HashMap::new()),
        }
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn faces(&self) -> &[SystemFace] {
        &self.faces
    }

    /// Faces whose family matches `family`, ignoring case and separators
    pub fn family_faces(&self, family: &str) -> Vec<&SystemFace> {
        let wanted = normalize_name(family);
        self.faces
            .iter()
            .filter(|face| normalize_name(&face.family) == wanted)
            .collect()
    }

    /// Find a custom font by face name ("Helvetica-Bold") or family name
    /// ("Helvetica"). A family match picks its most regular face.
    pub fn find(&self, name: &str) -> Option<SystemFace> {
        let wanted = normalize_name(name);
        if wanted.is_empty() {
            return None;
        }

        if let Some(face) = self
            .faces
            .iter()
            .find(|face| normalize_name(&face.face_name) == wanted)
        {
            return Some(face.clone());
        }

        let family = self.family_faces(name);
        if let Some(face) = best_face(&family, Weight::Regular, false, false) {
            return Some(face.clone());
        }

        fontconfig_lookup(name)
    }

    /// Parse (or fetch from cache) the font behind `face`
    pub fn load(&self, face: &SystemFace) -> DiscoveryResult<Arc<Font>> {
        let mut loaded = self.loaded.lock().map_err(|_| DiscoveryError::LockPoisoned)?;
        if let Some(font) = loaded.get(&face.path) {
            return Ok(Arc::clone(font));
        }

        let data = std::fs::read(&face.path).map_err(|source| DiscoveryError::Io {
            path: face.path.clone(),
            source,
        })?;
        let font = Font::from_bytes(data, FontSettings::default()).map_err(|reason| {
            DiscoveryError::InvalidFontData {
                path: face.path.clone(),
                reason: reason.to_string(),
            }
        })?;

        let font = Arc::new(font);
        loaded.insert(face.path.clone(), Arc::clone(&font));
        Ok(font)
    }

    /// Distance between baselines at `points`, from the font's metrics
    pub fn line_height(&self, face: &SystemFace, points: f32) -> Option<f32> {
        match self.load(face) {
            Ok(font) => font
                .horizontal_line_metrics(points)
                .map(|metrics| metrics.new_line_size),
            Err(e) => {
                tracing::warn!("Failed to load font {}: {}", face.face_name, e);
                None
            }
        }
    }

    /// Number of fonts parsed so far
    pub fn loaded_count(&self) -> usize {
        self.loaded.lock().map(|loaded| loaded.len()).unwrap_or(0)
    }
}

/// Pick the face closest to the requested weight and traits
pub fn best_face<'a>(
    faces: &[&'a SystemFace],
    weight: Weight,
    italic: bool,
    monospace: bool,
) -> Option<&'a SystemFace> {
    faces
        .iter()
        .copied()
        .map(|face| (face_score(face, weight, italic, monospace), face))
        .max_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(_, face)| face)
}

/// Suitability score of a face for a request
fn face_score(face: &SystemFace, weight: Weight, italic: bool, monospace: bool) -> f64 {
    let mut score = 10.0;

    // Weight distance penalty, 1 point per weight class unit
    let distance = (i32::from(face.weight.numeric()) - i32::from(weight.numeric())).abs();
    score += 1000.0 - f64::from(distance);

    if face.italic == italic {
        score += 500.0;
    }

    if face.monospace == monospace {
        score += 200.0;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn face(stem: &str) -> SystemFace {
        crate::discovery::face_from_path(&PathBuf::from(format!("/fonts/{}.ttf", stem))).unwrap()
    }

    fn catalog() -> FontCatalog {
        FontCatalog::from_faces(vec![
            face("Helvetica-Bold"),
            face("Helvetica"),
            face("Helvetica-Oblique"),
            face("Helvetica-Light"),
            face("DejaVuSans"),
            face("DejaVuSansMono"),
        ])
    }

    #[test]
    fn test_find_by_face_name() {
        let found = catalog().find("Helvetica-Bold").unwrap();
        assert_eq!(found.face_name, "Helvetica-Bold");
        assert_eq!(found.weight, Weight::Bold);
    }

    #[test]
    fn test_find_by_family_prefers_regular_upright() {
        let found = catalog().find("helvetica").unwrap();
        assert_eq!(found.face_name, "Helvetica");
    }

    #[test]
    fn test_find_missing() {
        assert!(catalog().find("NonexistentFontXYZ").is_none());
        assert!(catalog().find("  ").is_none());
    }

    #[test]
    fn test_family_faces_ignores_spacing() {
        let catalog = catalog();
        assert_eq!(catalog.family_faces("DejaVu Sans").len(), 1);
        assert_eq!(catalog.family_faces("Helvetica").len(), 4);
    }

    #[test]
    fn test_best_face_by_weight_and_slant() {
        let catalog = catalog();
        let family = catalog.family_faces("Helvetica");

        let bold = best_face(&family, Weight::Heavy, false, false).unwrap();
        assert_eq!(bold.face_name, "Helvetica-Bold");

        let light = best_face(&family, Weight::Thin, false, false).unwrap();
        assert_eq!(light.face_name, "Helvetica-Light");

        let italic = best_face(&family, Weight::Regular, true, false).unwrap();
        assert_eq!(italic.face_name, "Helvetica-Oblique");

        assert!(best_face(&[], Weight::Regular, false, false).is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let catalog = catalog();
        let missing = face("Helvetica");
        assert!(matches!(catalog.load(&missing), Err(DiscoveryError::Io { .. })));
        assert_eq!(catalog.line_height(&missing, 12.0), None);
        assert_eq!(catalog.loaded_count(), 0);
    }

    #[test]
    fn test_load_invalid_data() {
        let path = std::env::temp_dir().join(format!("typeface-invalid-{}.ttf", std::process::id()));
        std::fs::write(&path, b"definitely not a font").unwrap();
        let bogus = crate::discovery::face_from_path(&path).unwrap();

        let catalog = FontCatalog::from_faces(vec![bogus.clone()]);
        let result = catalog.load(&bogus);
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(DiscoveryError::InvalidFontData { .. })));
    }
}
