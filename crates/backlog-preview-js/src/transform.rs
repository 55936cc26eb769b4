//! Transformation ports available from JavaScript.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use backlog_preview_browser::{Transform, TransformError, TransformPort, WikiTransform};

#[wasm_bindgen(typescript_custom_section)]
const TS_PREVIEW_TRANSFORM: &'static str = r#"
export interface PreviewTransform {
    parse(text: string): string;
    init?: Promise<unknown> | (() => Promise<unknown>);
}
"#;

/// A transform implemented in JavaScript.
///
/// `parse` must return a string; a throw or any other return value becomes a
/// `TransformError`. `init`, when present, is awaited before first use.
pub struct JsTransform {
    parse: Function,
    init: Option<Promise>,
}

impl JsTransform {
    pub fn from_value(value: &JsValue) -> Result<Self, JsError> {
        let parse = Reflect::get(value, &JsValue::from_str("parse"))
            .ok()
            .and_then(|parse| parse.dyn_into::<Function>().ok())
            .ok_or_else(|| JsError::new("transform.parse must be a function"))?;

        let init = Reflect::get(value, &JsValue::from_str("init"))
            .map_err(|e| JsError::new(&format!("Failed to read transform.init: {}", describe(&e))))?;
        let init = if init.is_undefined() || init.is_null() {
            None
        } else if let Some(start) = init.dyn_ref::<Function>() {
            let started = start
                .call0(value)
                .map_err(|e| JsError::new(&format!("transform.init threw: {}", describe(&e))))?;
            Some(Promise::resolve(&started))
        } else {
            Some(Promise::resolve(&init))
        };

        Ok(Self { parse, init })
    }
}

impl Transform for JsTransform {
    fn transform(&self, text: &str) -> Result<String, TransformError> {
        let result = self
            .parse
            .call1(&JsValue::NULL, &JsValue::from_str(text))
            .map_err(|e| TransformError::new(describe(&e)))?;
        result
            .as_string()
            .ok_or_else(|| TransformError::new("transform returned a non-string value"))
    }
}

impl TransformPort for JsTransform {
    async fn ready(&self) -> Result<(), TransformError> {
        if let Some(init) = &self.init {
            JsFuture::from(init.clone())
                .await
                .map_err(|e| TransformError::new(describe(&e)))?;
        }
        Ok(())
    }
}

/// Either the built-in wiki renderer or a JS-supplied transform.
pub enum Port {
    Wiki(WikiTransform),
    Js(JsTransform),
}

impl Port {
    /// `undefined` / `null` select the wiki renderer.
    pub fn from_value(value: &JsValue) -> Result<Self, JsError> {
        if value.is_undefined() || value.is_null() {
            Ok(Port::Wiki(WikiTransform))
        } else {
            JsTransform::from_value(value).map(Port::Js)
        }
    }
}

impl Transform for Port {
    fn transform(&self, text: &str) -> Result<String, TransformError> {
        match self {
            Port::Wiki(port) => port.transform(text),
            Port::Js(port) => port.transform(text),
        }
    }
}

impl TransformPort for Port {
    async fn ready(&self) -> Result<(), TransformError> {
        match self {
            Port::Wiki(port) => port.ready().await,
            Port::Js(port) => port.ready().await,
        }
    }
}

fn describe(err: &JsValue) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{err:?}")
}
