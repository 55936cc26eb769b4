//! Preview configuration.
//!
//! Every field has a default matching Backlog's editor page, so an empty JSON
//! object deserializes to a working config.

use serde::Deserialize;

use crate::error::PreviewError;

/// What to do when the transformation port reports a failure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransformFailure {
    /// Leave the preview showing whatever it showed before and log a warning.
    #[default]
    KeepStale,
    /// Finish reconciling, then hand the error back to the caller.
    Propagate,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PreviewConfig {
    /// Id of the host's text input element.
    pub editor_id: String,
    pub preview_id: String,
    /// Class applied to the preview so the host's content styles match.
    pub preview_class: String,
    pub controller_id: String,
    /// Structural marker added to the editor's parent container.
    pub parent_class: String,
    pub toggle_class: String,
    pub toggle_label: String,
    pub initial_active: bool,
    pub on_transform_error: TransformFailure,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            editor_id: "page.content".to_string(),
            preview_id: "preview".to_string(),
            preview_class: "loom".to_string(),
            controller_id: "controller".to_string(),
            parent_class: "parent".to_string(),
            toggle_class: "switch".to_string(),
            toggle_label: "Realtime Preview".to_string(),
            initial_active: true,
            on_transform_error: TransformFailure::default(),
        }
    }
}

impl PreviewConfig {
    /// Reject configs that would produce unaddressable DOM nodes.
    pub fn validate(&self) -> Result<(), PreviewError> {
        let fields = [
            ("editorId", &self.editor_id),
            ("previewId", &self.preview_id),
            ("previewClass", &self.preview_class),
            ("controllerId", &self.controller_id),
            ("parentClass", &self.parent_class),
            ("toggleClass", &self.toggle_class),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(PreviewError::Config(format!("`{name}` is empty")));
            }
            // Class names go through classList.add, which throws on whitespace.
            if name.ends_with("Class") && value.chars().any(char::is_whitespace) {
                return Err(PreviewError::Config(format!(
                    "`{name}` must be a single class name, got {value:?}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_yields_defaults() {
        let config: PreviewConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, PreviewConfig::default());
        assert_eq!(config.editor_id, "page.content");
        assert!(config.initial_active);
        assert_eq!(config.on_transform_error, TransformFailure::KeepStale);
    }

    #[test]
    fn partial_object_overrides_fields() {
        let config: PreviewConfig = serde_json::from_str(
            r#"{"editorId": "descriptionTextArea", "initialActive": false, "onTransformError": "propagate"}"#,
        )
        .unwrap();
        assert_eq!(config.editor_id, "descriptionTextArea");
        assert!(!config.initial_active);
        assert_eq!(config.on_transform_error, TransformFailure::Propagate);
        assert_eq!(config.preview_class, "loom");
    }

    #[test]
    fn validate_accepts_defaults() {
        assert!(PreviewConfig::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_identifier() {
        let config = PreviewConfig {
            editor_id: "  ".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, PreviewError::Config(_)));
        assert!(err.to_string().contains("editorId"));
    }

    #[test]
    fn validate_rejects_multi_word_class() {
        let config = PreviewConfig {
            parent_class: "parent wide".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(PreviewError::Config(_))));
    }
}
