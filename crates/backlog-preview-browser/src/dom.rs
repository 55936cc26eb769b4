//! web-sys implementations of the editor and preview surfaces.

use gloo_events::EventListener;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, HtmlInputElement, HtmlTextAreaElement};

use backlog_preview_core::{EditorSurface, InputHandler, PreviewSurface};

/// Handle to the host's text input.
///
/// Holds a reference to a node the host owns; nothing here removes or
/// re-parents it.
#[derive(Debug, Clone)]
pub struct DomEditor {
    element: HtmlElement,
}

impl DomEditor {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl EditorSurface for DomEditor {
    /// Removes the listener when dropped.
    type Subscription = EventListener;

    fn value(&self) -> String {
        let target: &JsValue = self.element.as_ref();
        read_value(target).unwrap_or_default()
    }

    fn set_width(&self, width: &str) {
        set_style(&self.element, "width", width);
    }

    fn subscribe_input(&self, mut handler: InputHandler) -> EventListener {
        EventListener::new(&self.element, "input", move |event| {
            let value = event.current_target().and_then(|target| read_value(&target));
            handler(value);
        })
    }
}

/// The preview node. Created by the binder, owned by the controller.
#[derive(Debug, Clone)]
pub struct DomPreview {
    element: HtmlElement,
}

impl DomPreview {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    pub fn element(&self) -> &HtmlElement {
        &self.element
    }
}

impl PreviewSurface for DomPreview {
    fn set_display(&self, display: &str) {
        set_style(&self.element, "display", display);
    }

    fn set_html(&self, html: &str) {
        self.element.set_inner_html(html);
    }
}

/// Read `.value` from a textarea, an input, or anything else exposing a
/// string `value` property.
pub(crate) fn read_value(target: &JsValue) -> Option<String> {
    if let Some(area) = target.dyn_ref::<HtmlTextAreaElement>() {
        return Some(area.value());
    }
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    js_sys::Reflect::get(target, &JsValue::from_str("value"))
        .ok()?
        .as_string()
}

fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        tracing::warn!(?err, property, value, "failed to set inline style");
    }
}
