//! Font file discovery
//!
//! Scanning only looks at file names; the font data itself is parsed lazily
//! by the [`FontCatalog`](crate::catalog::FontCatalog) the first time a face
//! is used.

use std::path::{Path, PathBuf};

use typeface_core::Weight;

use crate::constants::MAX_SCAN_DEPTH;

/// One font file found on disk
#[derive(Debug, Clone, PartialEq)]
pub struct SystemFace {
    /// Family name, e.g. "Helvetica"
    pub family: String,
    /// Full face name, e.g. "Helvetica-BoldOblique"
    pub face_name: String,
    pub path: PathBuf,
    pub weight: Weight,
    pub italic: bool,
    pub monospace: bool,
}

/// Scan `search_paths` for font files.
///
/// Unreadable directories are skipped with a warning.
pub fn discover_faces(search_paths: &[PathBuf]) -> Vec<SystemFace> {
    let mut faces = Vec::new();
    for path in search_paths {
        scan_dir(path, 0, &mut faces);
    }
    tracing::debug!(count = faces.len(), "discovered font faces");
    faces
}

fn scan_dir(dir: &Path, depth: usize, faces: &mut Vec<SystemFace>) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            if depth > 0 || dir.exists() {
                tracing::warn!("Failed to scan font directory {}: {}", dir.display(), e);
            }
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if depth < MAX_SCAN_DEPTH {
                scan_dir(&path, depth + 1, faces);
            }
        } else if is_font_file(&path) {
            if let Some(face) = face_from_path(&path) {
                faces.push(face);
            }
        }
    }
}

/// Check if a file is a font format the loader understands
pub fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "ttf" | "otf" | "ttc"))
        .unwrap_or(false)
}

/// Describe a font file from its name
pub fn face_from_path(path: &Path) -> Option<SystemFace> {
    let stem = path.file_stem()?.to_str()?.trim();
    if stem.is_empty() {
        return None;
    }
    let (family, weight, italic) = parse_face_name(stem);
    Some(SystemFace {
        monospace: is_monospace_font(stem),
        family,
        face_name: stem.to_string(),
        path: path.to_path_buf(),
        weight,
        italic,
    })
}

// Longest first so "semibold" wins over "bold"
const STYLE_TOKENS: [(&str, Option<Weight>, bool); 18] = [
    ("extralight", Some(Weight::UltraLight), false),
    ("ultralight", Some(Weight::UltraLight), false),
    ("extrabold", Some(Weight::Heavy), false),
    ("ultrabold", Some(Weight::Heavy), false),
    ("semibold", Some(Weight::Semibold), false),
    ("demibold", Some(Weight::Semibold), false),
    ("regular", Some(Weight::Regular), false),
    ("medium", Some(Weight::Medium), false),
    ("oblique", None, true),
    ("italic", None, true),
    ("normal", Some(Weight::Regular), false),
    ("light", Some(Weight::Light), false),
    ("heavy", Some(Weight::Heavy), false),
    ("black", Some(Weight::Black), false),
    ("roman", Some(Weight::Regular), false),
    ("thin", Some(Weight::Thin), false),
    ("bold", Some(Weight::Bold), false),
    ("book", Some(Weight::Regular), false),
];

/// Parse a style suffix such as "BoldItalic" into weight and slant
fn parse_style_suffix(style: &str) -> Option<(Weight, bool)> {
    let lower: String = style
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();
    if lower.is_empty() {
        return None;
    }

    let mut rest = lower.as_str();
    let mut weight = Weight::Regular;
    let mut italic = false;
    'outer: while !rest.is_empty() {
        // OpenType weight class, as in "Inter-700" or "Roboto_300Italic"
        if let Some(class) = weight_class_prefix(rest) {
            weight = Weight::from_numeric(class);
            rest = &rest[3..];
            continue;
        }
        for (token, token_weight, token_italic) in STYLE_TOKENS {
            if let Some(remaining) = rest.strip_prefix(token) {
                if let Some(w) = token_weight {
                    weight = w;
                }
                italic |= token_italic;
                rest = remaining;
                continue 'outer;
            }
        }
        return None;
    }
    Some((weight, italic))
}

fn weight_class_prefix(s: &str) -> Option<u16> {
    let digits = s.get(..3)?;
    match digits.as_bytes() {
        [b'1'..=b'9', b'0', b'0'] => digits.parse().ok(),
        _ => None,
    }
}

/// Split a face name into family, weight and slant
pub fn parse_face_name(name: &str) -> (String, Weight, bool) {
    let separators: [fn(char) -> bool; 2] = [|c| c == '-' || c == '_', char::is_whitespace];
    for is_separator in separators {
        if let Some((family, style)) = name.rsplit_once(is_separator) {
            if let Some((weight, italic)) = parse_style_suffix(style) {
                return (family.trim().to_string(), weight, italic);
            }
        }
    }
    (name.to_string(), Weight::Regular, false)
}

/// Check if font name indicates monospace characteristics
pub fn is_monospace_font(name: &str) -> bool {
    let name_lower = name.to_lowercase();

    name_lower.contains("mono")
        || name_lower.contains("typewriter")
        || name_lower.contains("console")
        || name_lower.contains("code")
        || name_lower.contains("fixed")
        || name_lower.contains("courier")
        || name_lower.contains("menlo")
        || name_lower.contains("consolas")
        || name_lower.contains("inconsolata")
        || name_lower.contains("hack")
}

/// Lowercase and drop separators so "DejaVu Sans" matches "DejaVuSans"
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Ask fontconfig for a face by name. Fontconfig substitutes unknown names,
/// so the answer is only accepted when it really is the requested font.
#[cfg(all(target_os = "linux", feature = "font-discovery"))]
pub fn fontconfig_lookup(name: &str) -> Option<SystemFace> {
    let fc = fontconfig::Fontconfig::new()?;
    let font = fc.find(name, None)?;
    let wanted = normalize_name(name);

    let mut face = face_from_path(&font.path)?;
    if normalize_name(&font.name) == wanted || normalize_name(&face.face_name) == wanted {
        face.family = font.name;
        Some(face)
    } else {
        tracing::debug!(requested = %name, substituted = %font.name, "ignoring fontconfig substitute");
        None
    }
}

#[cfg(not(all(target_os = "linux", feature = "font-discovery")))]
pub fn fontconfig_lookup(_name: &str) -> Option<SystemFace> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_face_name() {
        assert_eq!(
            parse_face_name("Helvetica-BoldOblique"),
            ("Helvetica".to_string(), Weight::Bold, true)
        );
        assert_eq!(
            parse_face_name("SourceCodePro-SemiboldItalic"),
            ("SourceCodePro".to_string(), Weight::Semibold, true)
        );
        assert_eq!(
            parse_face_name("Arial Black"),
            ("Arial".to_string(), Weight::Black, false)
        );
        assert_eq!(
            parse_face_name("DejaVuSans"),
            ("DejaVuSans".to_string(), Weight::Regular, false)
        );
        // suffix that is not a style stays part of the family
        assert_eq!(
            parse_face_name("Noto-Sans"),
            ("Noto-Sans".to_string(), Weight::Regular, false)
        );
        assert_eq!(
            parse_face_name("Inter_ExtraLight"),
            ("Inter".to_string(), Weight::UltraLight, false)
        );
    }

    #[test]
    fn test_parse_numeric_weight_class() {
        assert_eq!(
            parse_face_name("Inter-700"),
            ("Inter".to_string(), Weight::Bold, false)
        );
        assert_eq!(
            parse_face_name("Roboto_300Italic"),
            ("Roboto".to_string(), Weight::Light, true)
        );
        assert_eq!(
            parse_face_name("Lato-900"),
            ("Lato".to_string(), Weight::Black, false)
        );
        // not a weight class
        assert_eq!(
            parse_face_name("Font-123"),
            ("Font-123".to_string(), Weight::Regular, false)
        );
    }

    #[test]
    fn test_is_font_file() {
        assert!(is_font_file(Path::new("/fonts/Menlo.ttf")));
        assert!(is_font_file(Path::new("/fonts/Avenir.TTC")));
        assert!(is_font_file(Path::new("Inter.otf")));
        assert!(!is_font_file(Path::new("readme.txt")));
        assert!(!is_font_file(Path::new("Inter.woff2")));
        assert!(!is_font_file(Path::new("Makefile")));
    }

    #[test]
    fn test_face_from_path() {
        let face = face_from_path(Path::new("/usr/share/fonts/DejaVuSansMono-Bold.ttf")).unwrap();
        assert_eq!(face.family, "DejaVuSansMono");
        assert_eq!(face.face_name, "DejaVuSansMono-Bold");
        assert_eq!(face.weight, Weight::Bold);
        assert!(face.monospace);
        assert!(!face.italic);
    }

    #[test]
    fn test_monospace_detection() {
        assert!(is_monospace_font("DejaVu Sans Mono"));
        assert!(is_monospace_font("Source Code Pro"));
        assert!(is_monospace_font("Menlo"));
        assert!(!is_monospace_font("DejaVu Sans"));
        assert!(!is_monospace_font("Times New Roman"));
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("DejaVu Sans"), normalize_name("DejaVuSans"));
        assert_eq!(normalize_name("Helvetica-Bold"), "helveticabold");
    }

    #[test]
    fn test_discovery_skips_missing_directories() {
        let faces = discover_faces(&[PathBuf::from("/nonexistent/typeface/fonts")]);
        assert!(faces.is_empty());
    }

    #[test]
    fn test_discovery_scans_nested_directories() {
        let root = std::env::temp_dir().join(format!("typeface-discovery-{}", std::process::id()));
        let nested = root.join("truetype").join("inter");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(nested.join("Inter-Bold.ttf"), b"not really a font").unwrap();
        std::fs::write(root.join("notes.txt"), b"ignored").unwrap();

        let faces = discover_faces(&[root.clone()]);
        std::fs::remove_dir_all(&root).unwrap();

        assert_eq!(faces.len(), 1);
        assert_eq!(faces[0].family, "Inter");
        assert_eq!(faces[0].weight, Weight::Bold);
    }
}
