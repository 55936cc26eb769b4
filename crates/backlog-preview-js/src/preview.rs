//! Mounting the preview from JavaScript.

use std::cell::{Cell, RefCell};

use wasm_bindgen::prelude::*;

use backlog_preview_browser::{PreviewConfig, PreviewSession, initialize};

use crate::transform::Port;
use crate::types::parse_config;

thread_local! {
    static STARTED: Cell<bool> = const { Cell::new(false) };
    /// Session started by `run`, kept for the lifetime of the page.
    static PAGE_SESSION: RefCell<Option<PreviewSession<Port>>> = const { RefCell::new(None) };
}

/// A mounted preview.
#[wasm_bindgen]
pub struct JsPreview {
    session: PreviewSession<Port>,
}

#[wasm_bindgen]
impl JsPreview {
    /// Whether live preview is on.
    #[wasm_bindgen(js_name = isActive)]
    pub fn is_active(&self) -> bool {
        self.session.is_active()
    }

    /// Switch live preview on or off. The on-page switch follows.
    #[wasm_bindgen(js_name = setActive)]
    pub fn set_active(&self, active: bool) -> Result<(), JsError> {
        self.session.set_active(active).map_err(to_js_error)
    }

    /// Remove the switch and stop listening to the editor.
    #[wasm_bindgen]
    pub fn dispose(&mut self) {
        self.session.dispose();
    }
}

/// Mount the preview on the current page.
///
/// Resolves to `undefined` when the page has no editor.
///
/// # Arguments
/// * `config` - Optional `JsPreviewConfig`; omitted fields keep their defaults
/// * `transform` - Optional `PreviewTransform`; defaults to the wiki renderer
#[wasm_bindgen(js_name = mountPreview)]
pub async fn mount_preview(config: JsValue, transform: JsValue) -> Result<Option<JsPreview>, JsError> {
    let config = parse_config(config)?;
    let port = Port::from_value(&transform)?;
    let session = mount(&config, port).await?;
    Ok(session.map(|session| JsPreview { session }))
}

/// Mount the preview with the wiki renderer and keep it for the page's
/// lifetime.
///
/// Only the first successful call does anything; later calls resolve to
/// `false`. A call that fails leaves the page free for another attempt.
/// Resolves to whether an editor was found.
#[wasm_bindgen]
pub async fn run(config: JsValue) -> Result<bool, JsError> {
    if STARTED.with(|started| started.replace(true)) {
        tracing::warn!("run called more than once, ignoring");
        return Ok(false);
    }
    let session = match start_page(config).await {
        Ok(session) => session,
        Err(err) => {
            STARTED.with(|started| started.set(false));
            return Err(err);
        }
    };
    let mounted = session.is_some();
    PAGE_SESSION.with(|slot| *slot.borrow_mut() = session);
    Ok(mounted)
}

async fn start_page(config: JsValue) -> Result<Option<PreviewSession<Port>>, JsError> {
    let config = parse_config(config)?;
    mount(&config, Port::from_value(&JsValue::UNDEFINED)?).await
}

async fn mount(config: &PreviewConfig, port: Port) -> Result<Option<PreviewSession<Port>>, JsError> {
    let ready = initialize(port).await.map_err(to_js_error)?;
    let document = gloo_utils::document();
    PreviewSession::start(&document, config, ready).map_err(to_js_error)
}

fn to_js_error(err: impl std::fmt::Display) -> JsError {
    JsError::new(&err.to_string())
}
