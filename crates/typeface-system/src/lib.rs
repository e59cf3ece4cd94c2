//! Typeface System - font provider backed by installed font files
//!
//! Implements [`typeface_core::FontProvider`] on top of the platform font
//! directories, with dynamic type sizes driven by a user content size
//! preference.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod error;
pub mod metrics;
pub mod provider;

// Re-export main types
pub use catalog::FontCatalog;
pub use config::SystemProviderConfig;
pub use discovery::SystemFace;
pub use error::{DiscoveryError, DiscoveryResult};
pub use metrics::ContentSizeCategory;
pub use provider::SystemFontProvider;
