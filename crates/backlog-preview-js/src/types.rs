//! Types exposed to JavaScript via wasm-bindgen.

use serde::{Deserialize, Serialize};
use tsify_next::Tsify;
use wasm_bindgen::prelude::*;

use backlog_preview_browser::{PreviewConfig, TransformFailure};

/// Partial preview configuration. Omitted fields keep their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub struct JsPreviewConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub editor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub controller_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggle_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toggle_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_transform_error: Option<JsTransformFailure>,
}

/// How a throwing transform is handled.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Tsify)]
#[tsify(into_wasm_abi, from_wasm_abi)]
#[serde(rename_all = "camelCase")]
pub enum JsTransformFailure {
    KeepStale,
    Propagate,
}

impl From<JsTransformFailure> for TransformFailure {
    fn from(value: JsTransformFailure) -> Self {
        match value {
            JsTransformFailure::KeepStale => TransformFailure::KeepStale,
            JsTransformFailure::Propagate => TransformFailure::Propagate,
        }
    }
}

impl From<JsPreviewConfig> for PreviewConfig {
    fn from(js: JsPreviewConfig) -> Self {
        let defaults = PreviewConfig::default();
        PreviewConfig {
            editor_id: js.editor_id.unwrap_or(defaults.editor_id),
            preview_id: js.preview_id.unwrap_or(defaults.preview_id),
            preview_class: js.preview_class.unwrap_or(defaults.preview_class),
            controller_id: js.controller_id.unwrap_or(defaults.controller_id),
            parent_class: js.parent_class.unwrap_or(defaults.parent_class),
            toggle_class: js.toggle_class.unwrap_or(defaults.toggle_class),
            toggle_label: js.toggle_label.unwrap_or(defaults.toggle_label),
            initial_active: js.initial_active.unwrap_or(defaults.initial_active),
            on_transform_error: js
                .on_transform_error
                .map(TransformFailure::from)
                .unwrap_or(defaults.on_transform_error),
        }
    }
}

/// Read an optional config object; `undefined` and `null` mean all defaults.
pub(crate) fn parse_config(value: JsValue) -> Result<PreviewConfig, JsError> {
    if value.is_undefined() || value.is_null() {
        return Ok(PreviewConfig::default());
    }
    let js: JsPreviewConfig = serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsError::new(&format!("Invalid preview config: {}", e)))?;
    Ok(js.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_merges_over_defaults() {
        let js = JsPreviewConfig {
            editor_id: Some("descriptionTextArea".to_string()),
            on_transform_error: Some(JsTransformFailure::Propagate),
            ..Default::default()
        };
        let config = PreviewConfig::from(js);
        assert_eq!(config.editor_id, "descriptionTextArea");
        assert_eq!(config.on_transform_error, TransformFailure::Propagate);
        assert_eq!(config.toggle_label, "Realtime Preview");
        assert!(config.initial_active);
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(
            PreviewConfig::from(JsPreviewConfig::default()),
            PreviewConfig::default()
        );
    }
}
