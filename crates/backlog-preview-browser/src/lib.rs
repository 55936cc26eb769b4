//! Browser DOM layer for the Backlog realtime preview.
//!
//! This crate implements the core's platform traits on top of web-sys and
//! wires the pieces together on a live page. It assumes a
//! `wasm32-unknown-unknown` target environment.
//!
//! # Architecture
//!
//! - `dom`: `DomEditor` / `DomPreview` handles over the host's nodes
//! - `binder`: locating the editor and inserting the preview and switch mount
//! - `toggle`: the labelled on/off switch
//! - `session`: binder + controller + switch, with teardown
//!
//! # Re-exports
//!
//! This crate re-exports `backlog-preview-core` for convenience, so consumers
//! only need to depend on `backlog-preview-browser`.

// Re-export core crate
pub use backlog_preview_core;
pub use backlog_preview_core::*;

pub mod binder;
pub mod dom;
pub mod session;
pub mod toggle;

pub use binder::{BoundContext, bind};
pub use dom::{DomEditor, DomPreview};
pub use session::PreviewSession;
pub use toggle::ToggleSwitch;
