// src/config.rs
use std::path::PathBuf;

use typeface_core::Design;

use crate::constants::{DEFAULT_FAMILIES, MAX_POINT_SIZE};
use crate::metrics::ContentSizeCategory;

#[derive(Clone, Debug)]
pub struct SystemProviderConfig {
    /// Directories scanned for font files
    pub search_paths: Vec<PathBuf>,
    pub content_size: ContentSizeCategory,
    pub system_family: String,
    pub serif_family: String,
    pub rounded_family: String,
    pub monospaced_family: String,
    pub max_point_size: f32,
}

impl Default for SystemProviderConfig {
    fn default() -> Self {
        let [system, serif, rounded, mono] = DEFAULT_FAMILIES;
        Self {
            search_paths: default_search_paths(),
            content_size: ContentSizeCategory::default(),
            system_family: system.to_string(),
            serif_family: serif.to_string(),
            rounded_family: rounded.to_string(),
            monospaced_family: mono.to_string(),
            max_point_size: MAX_POINT_SIZE,
        }
    }
}

impl SystemProviderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.search_paths = paths;
        self
    }

    pub fn with_search_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.search_paths.push(path.into());
        self
    }

    pub fn with_content_size(mut self, category: ContentSizeCategory) -> Self {
        self.content_size = category;
        self
    }

    pub fn with_family(mut self, design: Design, family: &str) -> Self {
        let slot = match design {
            Design::Default => &mut self.system_family,
            Design::Serif => &mut self.serif_family,
            Design::Rounded => &mut self.rounded_family,
            Design::Monospaced => &mut self.monospaced_family,
        };
        *slot = family.to_string();
        self
    }

    pub fn with_max_point_size(mut self, points: f32) -> Self {
        self.max_point_size = points.max(1.0);
        self
    }

    /// Family used for system fonts of the given design
    pub fn family_for(&self, design: Design) -> &str {
        match design {
            Design::Default => &self.system_family,
            Design::Serif => &self.serif_family,
            Design::Rounded => &self.rounded_family,
            Design::Monospaced => &self.monospaced_family,
        }
    }
}

#[cfg_attr(not(any(target_os = "linux", target_os = "macos")), allow(dead_code))]
fn home_dir_join(relative: &str) -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| PathBuf::from(home).join(relative))
}

/// Platform-specific font search paths
pub fn default_search_paths() -> Vec<PathBuf> {
    #[cfg(target_os = "linux")]
    {
        let mut paths: Vec<PathBuf> = vec![
            "/usr/share/fonts".into(),
            "/usr/local/share/fonts".into(),
        ];
        paths.extend(home_dir_join(".fonts"));
        paths.extend(home_dir_join(".local/share/fonts"));
        paths
    }

    #[cfg(target_os = "macos")]
    {
        let mut paths: Vec<PathBuf> = vec![
            "/System/Library/Fonts".into(),
            "/Library/Fonts".into(),
        ];
        paths.extend(home_dir_join("Library/Fonts"));
        paths
    }

    #[cfg(target_os = "windows")]
    {
        vec![
            "C:\\Windows\\Fonts".into(),
            "C:\\Program Files\\Common Files\\microsoft shared\\Fonts".into(),
        ]
    }

    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        vec![]
    }
}
