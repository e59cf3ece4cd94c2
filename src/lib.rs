//! Typeface - declarative font resolution
//!
//! Describe a font by where it comes from (a semantic text style, the system
//! font at a size, or a named custom font) and an ordered list of styling
//! modifications. The resolver composes them into a single descriptor and
//! materializes it through a [`FontProvider`].
//!
//! ```no_run
//! use typeface::{system_resolver, FontRequest, SystemProviderConfig, Weight};
//!
//! let resolver = system_resolver(SystemProviderConfig::default());
//! let font = resolver
//!     .resolve(&FontRequest::headline().italic().weight(Weight::Heavy))
//!     .unwrap();
//! println!("{} {}pt", font.family, font.point_size);
//! ```

pub use typeface_core::*;
pub use typeface_system::{
    ContentSizeCategory, DiscoveryError, FontCatalog, SystemFace, SystemFontProvider,
    SystemProviderConfig,
};

/// Resolver over the installed fonts
pub type SystemResolver = FontResolver<SystemFontProvider>;

/// Build a resolver that materializes fonts from the local font directories
pub fn system_resolver(config: SystemProviderConfig) -> SystemResolver {
    system_resolver_with(config, ResolverConfig::default())
}

pub fn system_resolver_with(
    config: SystemProviderConfig,
    resolver_config: ResolverConfig,
) -> SystemResolver {
    tracing::debug!(
        search_paths = config.search_paths.len(),
        default_anchor = %resolver_config.default_anchor,
        "building system resolver"
    );
    FontResolver::with_config(SystemFontProvider::new(config), resolver_config)
}
