//! backlog-preview-core: preview synchronization logic without DOM dependencies.
//!
//! This crate provides:
//! - `Transform` / `TransformPort` - the text to HTML conversion contract and
//!   the `Ready<T>` readiness gate
//! - `WikiTransform` - Backlog wiki notation renderer
//! - `EditorSurface`, `PreviewSurface`, `ToggleSurface` - platform traits the
//!   browser layer implements
//! - `ActivationController` - the live preview / plain editing state machine
//! - `PreviewConfig` - identifiers, labels and failure policy

pub mod config;
pub mod controller;
pub mod error;
pub mod platform;
pub mod transform;
pub mod wiki;

pub use config::{PreviewConfig, TransformFailure};
pub use controller::{ActivationController, ActivationState};
pub use error::{PreviewError, TransformError};
pub use platform::{EditorSurface, InputHandler, PreviewSurface, ToggleSurface};
pub use transform::{Ready, Transform, TransformPort, initialize};
pub use wiki::WikiTransform;
