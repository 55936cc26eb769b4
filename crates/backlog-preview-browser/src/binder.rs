//! Locating the host editor and attaching the preview next to it.

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use backlog_preview_core::{PreviewConfig, PreviewError};

use crate::dom::{DomEditor, DomPreview};

/// Nodes produced by a successful [`bind`].
#[derive(Debug, Clone)]
pub struct BoundContext {
    pub editor: DomEditor,
    pub preview: DomPreview,
    /// Empty container, first child of the editor's parent, for the switch.
    pub controller_mount: HtmlElement,
}

/// Find the editor and attach the preview and switch mount around it.
///
/// Returns `Ok(None)` without touching the document when the editor is missing,
/// detached or already followed by a preview; most pages the script runs on
/// are not editor pages. Errors
/// only come from DOM calls failing after the editor was found.
pub fn bind(document: &Document, config: &PreviewConfig) -> Result<Option<BoundContext>, PreviewError> {
    let Some(editor) = document.get_element_by_id(&config.editor_id) else {
        tracing::debug!(editor_id = %config.editor_id, "editor not found, staying inert");
        return Ok(None);
    };
    let Ok(editor) = editor.dyn_into::<HtmlElement>() else {
        tracing::debug!(editor_id = %config.editor_id, "editor is not an html element");
        return Ok(None);
    };
    let Some(parent) = editor.parent_element() else {
        tracing::debug!(editor_id = %config.editor_id, "editor has no parent");
        return Ok(None);
    };
    if is_bound(&editor, config) {
        tracing::debug!(editor_id = %config.editor_id, "editor already has a preview");
        return Ok(None);
    }

    let preview = create_div(document)?;
    preview.set_id(&config.preview_id);
    preview.set_class_name(&config.preview_class);
    editor
        .after_with_node_1(&preview)
        .map_err(|e| PreviewError::dom("insert preview", e))?;

    let controller_mount = create_div(document)?;
    controller_mount.set_id(&config.controller_id);
    parent
        .class_list()
        .add_1(&config.parent_class)
        .map_err(|e| PreviewError::dom("mark parent", e))?;
    parent
        .insert_before(&controller_mount, parent.first_child().as_ref())
        .map_err(|e| PreviewError::dom("insert controller mount", e))?;

    tracing::debug!(editor_id = %config.editor_id, "preview bound");
    Ok(Some(BoundContext {
        editor: DomEditor::new(editor),
        preview: DomPreview::new(preview),
        controller_mount,
    }))
}

/// A previous bind left its preview directly after the editor.
fn is_bound(editor: &HtmlElement, config: &PreviewConfig) -> bool {
    editor
        .next_element_sibling()
        .is_some_and(|next| {
            next.id() == config.preview_id && next.class_list().contains(&config.preview_class)
        })
}

pub(crate) fn create_element<T: JsCast>(document: &Document, tag: &str) -> Result<T, PreviewError> {
    document
        .create_element(tag)
        .map_err(|e| PreviewError::dom("create element", e))?
        .dyn_into::<T>()
        .map_err(|e| PreviewError::dom("cast element", e))
}

fn create_div(document: &Document) -> Result<HtmlElement, PreviewError> {
    create_element(document, "div")
}
