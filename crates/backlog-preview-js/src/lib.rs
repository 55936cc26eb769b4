//! WASM entry point for the Backlog realtime preview.
//!
//! The content script loader only has to `await init()` from the generated
//! bindings and then `await run()`; everything else happens on the Rust side.
//!
//! Exports:
//! - `parse` - Backlog wiki notation to HTML
//! - `run` - mount the preview on the current page, once per page load
//! - `mountPreview` - explicit mounting with a config and optional JS transform
//! - `JsPreview` - handle returned by `mountPreview`

mod preview;
mod transform;
mod types;

pub use preview::*;
pub use transform::*;
pub use types::*;

use wasm_bindgen::prelude::*;

/// Initialize panic hook and console logging.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    init_tracing();
}

/// Render Backlog wiki notation to HTML.
#[wasm_bindgen]
pub fn parse(text: &str) -> String {
    backlog_preview_browser::wiki::render(text)
}

fn init_tracing() {
    use tracing::Level;
    use tracing::subscriber::set_global_default;
    use tracing_subscriber::Registry;
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::layer::SubscriberExt;

    let console_level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let wasm_layer = tracing_wasm::WASMLayer::new(
        tracing_wasm::WASMLayerConfigBuilder::new()
            .set_max_level(console_level)
            .build(),
    );

    // Only our own crates; the host page's console is not ours to flood.
    let filter = EnvFilter::new(
        "warn,backlog_preview_core=debug,backlog_preview_browser=debug,backlog_preview_js=debug",
    );

    let reg = Registry::default().with(filter).with(wasm_layer);

    // A second init (e.g. tests) keeps the first subscriber.
    let _ = set_global_default(reg);
}
