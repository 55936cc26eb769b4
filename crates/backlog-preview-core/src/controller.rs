//! Activation state machine.
//!
//! The controller owns the activation state, the preview surface and the
//! editor's input subscription. Every transition runs one reconciliation pass
//! that sets layout, preview content and listener registration together, so
//! the three can never disagree once `toggle` returns.

use std::rc::Rc;

use crate::config::{PreviewConfig, TransformFailure};
use crate::error::{PreviewError, TransformError};
use crate::platform::{EditorSurface, PreviewSurface};
use crate::transform::{Ready, Transform};

/// Live preview vs. plain editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivationState {
    Active,
    Inactive,
}

impl ActivationState {
    pub fn is_active(self) -> bool {
        matches!(self, ActivationState::Active)
    }

    /// Inline `width` for the editor in this state.
    pub fn editor_width(self) -> &'static str {
        match self {
            ActivationState::Active => "50%",
            ActivationState::Inactive => "100%",
        }
    }

    /// Inline `display` for the preview in this state.
    pub fn preview_display(self) -> &'static str {
        match self {
            ActivationState::Active => "block",
            ActivationState::Inactive => "none",
        }
    }
}

impl From<bool> for ActivationState {
    fn from(active: bool) -> Self {
        if active {
            ActivationState::Active
        } else {
            ActivationState::Inactive
        }
    }
}

/// Preview surface plus the transform feeding it.
///
/// Shared between the controller and the input listener closure.
struct Renderer<P, T> {
    preview: P,
    transform: Ready<T>,
    on_failure: TransformFailure,
}

impl<P: PreviewSurface, T: Transform> Renderer<P, T> {
    fn render(&self, text: &str) -> Result<(), TransformError> {
        match self.transform.transform(text) {
            Ok(html) => {
                self.preview.set_html(&html);
                Ok(())
            }
            Err(err) => match self.on_failure {
                TransformFailure::KeepStale => {
                    tracing::warn!(error = %err, "transform failed, keeping previous preview");
                    Ok(())
                }
                TransformFailure::Propagate => Err(err),
            },
        }
    }

    fn show(&self, state: ActivationState) {
        self.preview.set_display(state.preview_display());
    }

    fn clear(&self) {
        self.preview.set_html("");
    }
}

/// Drives the preview from the editor.
///
/// Exactly one input listener is registered while the state is `Active`, none
/// otherwise. The listener is also removed on `dispose` and on drop.
///
/// Disposal is final: the controller reports `Inactive` from then on and
/// later toggles and edits are ignored.
pub struct ActivationController<E: EditorSurface, P, T> {
    editor: E,
    renderer: Rc<Renderer<P, T>>,
    state: ActivationState,
    subscription: Option<E::Subscription>,
    disposed: bool,
}

impl<E, P, T> ActivationController<E, P, T>
where
    E: EditorSurface,
    P: PreviewSurface + 'static,
    T: Transform + 'static,
{
    /// Create a controller without touching either surface.
    ///
    /// The controller starts out believing it is `Inactive` with nothing
    /// registered; call [`toggle`](Self::toggle) to reconcile into the
    /// starting state, or use [`mount`](Self::mount).
    pub fn new(editor: E, preview: P, transform: Ready<T>, on_failure: TransformFailure) -> Self {
        Self {
            editor,
            renderer: Rc::new(Renderer {
                preview,
                transform,
                on_failure,
            }),
            state: ActivationState::Inactive,
            subscription: None,
            disposed: false,
        }
    }

    /// Create a controller and reconcile it into `config.initial_active`.
    ///
    /// If the first render fails under `TransformFailure::Propagate`, the
    /// surfaces are reset to the inactive layout before the error is returned.
    pub fn mount(
        editor: E,
        preview: P,
        transform: Ready<T>,
        config: &PreviewConfig,
    ) -> Result<Self, PreviewError> {
        let mut controller = Self::new(editor, preview, transform, config.on_transform_error);
        if let Err(err) = controller.toggle(config.initial_active) {
            // Inactive reconciliation never calls the transform.
            let _ = controller.toggle(false);
            return Err(err);
        }
        Ok(controller)
    }

    pub fn state(&self) -> ActivationState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    /// Whether the input listener is currently registered.
    pub fn is_listening(&self) -> bool {
        self.subscription.is_some()
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Move to the requested state and reconcile.
    ///
    /// Toggling into the current state reconciles again without registering a
    /// second listener. A no-op once disposed.
    pub fn toggle(&mut self, active: bool) -> Result<(), PreviewError> {
        if self.disposed {
            tracing::debug!(active, "toggle after dispose ignored");
            return Ok(());
        }
        let next = ActivationState::from(active);
        tracing::debug!(from = ?self.state, to = ?next, "activation toggle");
        self.state = next;
        self.reconcile()
    }

    /// Render `text` into the preview.
    ///
    /// This is what the registered input listener runs. A missing value is
    /// rendered as the empty string. Ignored while inactive.
    pub fn on_edit(&self, text: Option<&str>) -> Result<(), PreviewError> {
        if !self.is_active() {
            tracing::debug!("edit while inactive ignored");
            return Ok(());
        }
        self.renderer.render(text.unwrap_or_default())?;
        Ok(())
    }

    fn reconcile(&mut self) -> Result<(), PreviewError> {
        let state = self.state;
        match state {
            ActivationState::Inactive => {
                self.unsubscribe();
                self.editor.set_width(state.editor_width());
                self.renderer.show(state);
                self.renderer.clear();
                Ok(())
            }
            ActivationState::Active => {
                self.editor.set_width(state.editor_width());
                self.renderer.show(state);
                let rendered = self.renderer.render(&self.editor.value());
                if self.subscription.is_none() {
                    let renderer = Rc::clone(&self.renderer);
                    let subscription = self.editor.subscribe_input(Box::new(move |value| {
                        if let Err(err) = renderer.render(value.as_deref().unwrap_or_default()) {
                            tracing::error!(error = %err, "failed to render preview on input");
                        }
                    }));
                    self.subscription = Some(subscription);
                }
                rendered.map_err(PreviewError::from)
            }
        }
    }
}

impl<E: EditorSurface, P, T> ActivationController<E, P, T> {
    /// Deregister the input listener regardless of state and stop reacting
    /// to toggles.
    ///
    /// Surfaces are left as they are.
    pub fn dispose(&mut self) {
        self.unsubscribe();
        self.state = ActivationState::Inactive;
        self.disposed = true;
    }

    fn unsubscribe(&mut self) {
        if self.subscription.take().is_some() {
            tracing::debug!("input listener removed");
        }
    }
}

impl<E: EditorSurface, P, T> Drop for ActivationController<E, P, T> {
    fn drop(&mut self) {
        self.dispose();
    }
}
