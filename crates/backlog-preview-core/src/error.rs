//! Error types for the preview engine.

use miette::Diagnostic;

/// The transformation port failed to produce markup.
///
/// The built-in wiki renderer never returns this; it exists for ports backed
/// by foreign code that may throw.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Diagnostic)]
#[error("transform failed: {message}")]
#[diagnostic(code(backlog_preview::transform))]
pub struct TransformError {
    message: String,
}

impl TransformError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&str> for TransformError {
    fn from(s: &str) -> Self {
        TransformError::new(s)
    }
}

impl From<String> for TransformError {
    fn from(s: String) -> Self {
        TransformError::new(s)
    }
}

/// Main error type for preview operations.
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum PreviewError {
    /// Transformation failed and the configured policy propagates it
    #[error(transparent)]
    #[diagnostic_source]
    Transform(#[from] TransformError),

    /// A DOM call failed while wiring up the preview
    #[error("dom operation failed: {0}")]
    #[diagnostic(code(backlog_preview::dom))]
    Dom(String),

    /// Configuration rejected by `PreviewConfig::validate`
    #[error("invalid config: {0}")]
    #[diagnostic(
        code(backlog_preview::config),
        help("every identifier and class name must be non-empty")
    )]
    Config(String),
}

impl PreviewError {
    pub fn dom(context: &str, detail: impl std::fmt::Debug) -> Self {
        PreviewError::Dom(format!("{context}: {detail:?}"))
    }
}
