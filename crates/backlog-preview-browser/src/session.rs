//! A mounted preview: binder output, controller and switch held together.

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Document;

use backlog_preview_core::{
    ActivationController, PreviewConfig, PreviewError, Ready, ToggleSurface, Transform,
};

use crate::binder::{BoundContext, bind};
use crate::dom::{DomEditor, DomPreview};
use crate::toggle::ToggleSwitch;

type DomController<T> = ActivationController<DomEditor, DomPreview, T>;

/// Live preview attached to a page.
///
/// The switch's listener reaches the controller through a `Weak`, so dropping
/// the session drops the controller and every listener with it.
pub struct PreviewSession<T> {
    controller: Rc<RefCell<DomController<T>>>,
    toggle: Option<ToggleSwitch>,
}

impl<T: Transform + 'static> PreviewSession<T> {
    /// Bind to `document` and start in `config.initial_active`.
    ///
    /// `Ok(None)` when the page has no editor to attach to.
    pub fn start(
        document: &Document,
        config: &PreviewConfig,
        transform: Ready<T>,
    ) -> Result<Option<Self>, PreviewError> {
        config.validate()?;

        let Some(BoundContext {
            editor,
            preview,
            controller_mount,
        }) = bind(document, config)?
        else {
            return Ok(None);
        };

        let controller = ActivationController::mount(editor, preview, transform, config)?;
        let active = controller.is_active();
        let controller = Rc::new(RefCell::new(controller));

        let weak = Rc::downgrade(&controller);
        let toggle = ToggleSwitch::render(document, &controller_mount, config, active, move |checked| {
            let Some(controller) = weak.upgrade() else {
                return;
            };
            let Ok(mut controller) = controller.try_borrow_mut() else {
                tracing::warn!("toggle while controller busy, ignored");
                return;
            };
            if let Err(err) = controller.toggle(checked) {
                tracing::error!(error = %err, "toggle failed");
            }
        })?;

        tracing::info!(editor_id = %config.editor_id, active, "realtime preview mounted");
        Ok(Some(Self {
            controller,
            toggle: Some(toggle),
        }))
    }

    pub fn is_active(&self) -> bool {
        self.controller.borrow().is_active()
    }

    pub fn is_listening(&self) -> bool {
        self.controller.borrow().is_listening()
    }

    /// Toggle from code rather than the switch; the switch follows.
    pub fn set_active(&self, active: bool) -> Result<(), PreviewError> {
        let result = self.controller.borrow_mut().toggle(active);
        if let Some(toggle) = &self.toggle {
            toggle.set_checked(active);
        }
        result
    }
}

impl<T> PreviewSession<T> {
    /// Remove the switch and deregister the input listener.
    pub fn dispose(&mut self) {
        self.toggle = None;
        if let Ok(mut controller) = self.controller.try_borrow_mut() {
            controller.dispose();
        }
    }
}

impl<T> Drop for PreviewSession<T> {
    fn drop(&mut self) {
        self.dispose();
    }
}
