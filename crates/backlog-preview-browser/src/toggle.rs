//! The labelled on/off switch.

use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlInputElement};

use backlog_preview_core::{PreviewConfig, PreviewError, ToggleSurface};

use crate::binder::create_element;

/// Checkbox switch mirroring the activation state.
///
/// Keeps no state of its own: the checkbox is the display, `on_change`
/// receives every user flip. Dropping the switch removes its listener and
/// takes it out of the document.
pub struct ToggleSwitch {
    root: HtmlElement,
    input: HtmlInputElement,
    _change: EventListener,
}

impl ToggleSwitch {
    /// Render `<label class=switch><input type=checkbox><span>label</span></label>`
    /// into `mount`.
    pub fn render<F>(
        document: &Document,
        mount: &HtmlElement,
        config: &PreviewConfig,
        checked: bool,
        mut on_change: F,
    ) -> Result<Self, PreviewError>
    where
        F: FnMut(bool) + 'static,
    {
        let root: HtmlElement = create_element(document, "label")?;
        root.set_class_name(&config.toggle_class);

        let input: HtmlInputElement = create_element(document, "input")?;
        input.set_type("checkbox");
        input
            .set_attribute("role", "switch")
            .map_err(|e| PreviewError::dom("set switch role", e))?;
        input.set_checked(checked);

        let text: HtmlElement = create_element(document, "span")?;
        text.set_text_content(Some(&config.toggle_label));

        root.append_child(&input)
            .map_err(|e| PreviewError::dom("append switch input", e))?;
        root.append_child(&text)
            .map_err(|e| PreviewError::dom("append switch label", e))?;
        mount
            .append_child(&root)
            .map_err(|e| PreviewError::dom("mount switch", e))?;

        let change = EventListener::new(&input, "change", move |event| {
            let Some(input) = event
                .current_target()
                .and_then(|target| target.dyn_into::<HtmlInputElement>().ok())
            else {
                return;
            };
            on_change(input.checked());
        });

        Ok(Self {
            root,
            input,
            _change: change,
        })
    }

    pub fn is_checked(&self) -> bool {
        self.input.checked()
    }

    pub fn input(&self) -> &HtmlInputElement {
        &self.input
    }
}

impl ToggleSurface for ToggleSwitch {
    fn set_checked(&self, checked: bool) {
        // Setting `checked` from script does not fire `change`.
        self.input.set_checked(checked);
    }
}

impl Drop for ToggleSwitch {
    fn drop(&mut self) {
        self.root.remove();
    }
}
