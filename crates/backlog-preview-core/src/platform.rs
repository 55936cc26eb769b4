//! Platform abstraction traits for the preview surfaces.
//!
//! These traits define the interface between the activation state machine and
//! the platform that owns the actual nodes. The browser implementation wraps
//! web-sys elements; tests use in-memory fakes.
//!
//! Methods take `&self` because platform handles are references to nodes that
//! live elsewhere, the way a web-sys `Element` is.

/// Callback invoked with the editor's value on every input event.
///
/// `None` means the platform could not read a value; consumers treat that as
/// the empty string.
pub type InputHandler = Box<dyn FnMut(Option<String>)>;

/// The host's text input. Referenced, never owned.
pub trait EditorSurface {
    /// Guard for a registered input listener. Dropping it deregisters the
    /// listener.
    type Subscription;

    /// Current text value.
    fn value(&self) -> String;

    /// Set the inline `width` style.
    fn set_width(&self, width: &str);

    /// Register `handler` for input events.
    fn subscribe_input(&self, handler: InputHandler) -> Self::Subscription;
}

/// The node that shows rendered output.
pub trait PreviewSurface {
    /// Set the inline `display` style.
    fn set_display(&self, display: &str);

    /// Replace the node's content with `html`.
    fn set_html(&self, html: &str);
}

/// The user-facing on/off switch.
pub trait ToggleSurface {
    fn set_checked(&self, checked: bool);
}

impl<T: EditorSurface + ?Sized> EditorSurface for std::rc::Rc<T> {
    type Subscription = T::Subscription;

    fn value(&self) -> String {
        (**self).value()
    }

    fn set_width(&self, width: &str) {
        (**self).set_width(width)
    }

    fn subscribe_input(&self, handler: InputHandler) -> Self::Subscription {
        (**self).subscribe_input(handler)
    }
}

impl<T: PreviewSurface + ?Sized> PreviewSurface for std::rc::Rc<T> {
    fn set_display(&self, display: &str) {
        (**self).set_display(display)
    }

    fn set_html(&self, html: &str) {
        (**self).set_html(html)
    }
}
