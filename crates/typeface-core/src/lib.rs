//! Typeface Core - platform-agnostic font descriptor composition
//!
//! This crate turns a font request (a semantic style, the system font at a
//! size, or a custom font by name, plus an ordered list of styling
//! modifications) into one consistent descriptor, and asks a
//! [`FontProvider`] to materialize it.

pub mod attributes;
pub mod compose;
pub mod config;
pub mod constants;
pub mod descriptor;
pub mod dummy_provider;
pub mod error;
pub mod provider;
pub mod request;
pub mod resolver;
pub mod style;

// Re-export main types
pub use attributes::{AttributeSet, CaseSelector, FeatureSetting, NumberSpacing, SymbolicTraits};
pub use compose::{parse_modifications, Modification};
pub use config::ResolverConfig;
pub use descriptor::{Descriptor, FontReference, SizingMode};
pub use error::{FontError, FontResult, ProviderError};
pub use provider::{BaseDescriptor, FontProvider, RealizedFont};
pub use request::{FontRequest, FontSource, Scaling};
pub use resolver::{FontResolver, PreparedFont};
pub use style::{Design, TextStyle, Weight};
