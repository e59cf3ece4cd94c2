// src/constants.rs

/// Largest size the provider will materialize
pub const MAX_POINT_SIZE: f32 = 1024.0;

/// Line height used when no font file backs a realized font
pub const DEFAULT_LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Directory nesting followed during manual discovery
pub const MAX_SCAN_DEPTH: usize = 4;

#[cfg(target_os = "macos")]
pub const DEFAULT_FAMILIES: [&str; 4] = ["SF Pro", "New York", "SF Pro Rounded", "SF Mono"];

#[cfg(target_os = "windows")]
pub const DEFAULT_FAMILIES: [&str; 4] = ["Segoe UI", "Cambria", "Segoe UI", "Consolas"];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub const DEFAULT_FAMILIES: [&str; 4] = ["DejaVu Sans", "DejaVu Serif", "DejaVu Sans", "DejaVu Sans Mono"];
