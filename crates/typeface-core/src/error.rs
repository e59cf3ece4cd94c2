// src/error.rs
use thiserror::Error;

/// Errors surfaced by descriptor composition and font resolution
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FontError {
    /// Requested custom font is absent. The resolver recovers from this by
    /// substituting the system font, so callers only see it from providers
    /// used directly.
    #[error("Custom font resource not found: {name}")]
    MissingCustomResource { name: String },

    #[error("Invalid trait combination: {reason}")]
    InvalidTraitCombination { reason: String },

    #[error("Font provider unavailable: {message}")]
    ProviderUnavailable { message: String },

    #[error("Invalid point size: {points} (must be finite and > 0)")]
    InvalidPointSize { points: f32 },

    // Parsing of textual requests
    #[error("Unknown text style: {0}")]
    UnknownTextStyle(String),

    #[error("Unknown font weight: {0}")]
    UnknownWeight(String),

    #[error("Unknown font design: {0}")]
    UnknownDesign(String),

    #[error("Unknown modification: {0}")]
    UnknownModification(String),
}

pub type FontResult<T> = Result<T, FontError>;

/// Failure reported by a [`FontProvider`](crate::provider::FontProvider)
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProviderError {
    #[error("Missing font resource: {0}")]
    MissingResource(String),

    #[error("Invalid trait combination: {0}")]
    InvalidTraitCombination(String),

    #[error("Provider unavailable: {0}")]
    Unavailable(String),
}

impl From<ProviderError> for FontError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::MissingResource(name) => FontError::MissingCustomResource { name },
            ProviderError::InvalidTraitCombination(reason) => {
                FontError::InvalidTraitCombination { reason }
            }
            ProviderError::Unavailable(message) => FontError::ProviderUnavailable { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_conversion() {
        let err: FontError = ProviderError::Unavailable("font server down".into()).into();
        assert_eq!(
            err,
            FontError::ProviderUnavailable { message: "font server down".into() }
        );

        let err: FontError = ProviderError::InvalidTraitCombination("size 0".into()).into();
        assert!(matches!(err, FontError::InvalidTraitCombination { .. }));
    }

    #[test]
    fn test_error_messages() {
        let err = FontError::InvalidPointSize { points: -2.0 };
        assert!(err.to_string().contains("-2"));

        let err = FontError::MissingCustomResource { name: "Futura".into() };
        assert_eq!(err.to_string(), "Custom font resource not found: Futura");
    }
}
