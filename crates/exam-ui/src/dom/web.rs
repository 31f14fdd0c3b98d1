//! Browser document access using web-sys
//!
//! Provides the panic-free [`Page`] implementation used by the exported
//! bindings. Every rejected DOM call is mapped to [`PageError::Dom`].

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{
    Document, Element, HtmlCollection, HtmlElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, NodeList, Window,
};

use super::Page;
use crate::error::{PageError, Result};

/// The live browser document
#[derive(Debug, Clone)]
pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    /// Attach to the current window and document
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No window object is available (not in browser context)
    /// - The window has no document
    pub fn current() -> Result<Self> {
        let window = web_sys::window().ok_or(PageError::WindowUnavailable)?;
        let document = window.document().ok_or(PageError::DocumentUnavailable)?;
        Ok(Self { window, document })
    }

    /// Whether the document has finished parsing
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.document.ready_state() != "loading"
    }

    /// Run `on_ready` once the document is parsed
    ///
    /// Runs immediately when the module loads after `DOMContentLoaded` has
    /// already fired, otherwise registers a one-shot listener.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot be registered.
    pub fn when_ready<F>(&self, on_ready: F) -> Result<()>
    where
        F: FnOnce() + 'static,
    {
        if self.is_ready() {
            on_ready();
            return Ok(());
        }

        let callback = Closure::once_into_js(on_ready);
        self.document
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())
            .map_err(|e| PageError::Dom(format!("failed to add DOMContentLoaded listener: {e:?}")))
    }

    /// The underlying window, for reading page globals
    #[must_use]
    pub const fn window(&self) -> &Window {
        &self.window
    }
}

fn node_list_elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

fn collection_elements(collection: &HtmlCollection) -> Vec<Element> {
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect()
}

fn inline_style(element: &Element) -> Result<web_sys::CssStyleDeclaration> {
    element
        .dyn_ref::<HtmlElement>()
        .map(HtmlElement::style)
        .ok_or_else(|| PageError::Dom(format!("<{}> has no inline style", element.tag_name())))
}

impl Page for WebPage {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn select_all(&self, selector: &str) -> Result<Vec<Element>> {
        self.document
            .query_selector_all(selector)
            .map(|list| node_list_elements(&list))
            .map_err(|e| PageError::Dom(format!("invalid selector '{selector}': {e:?}")))
    }

    fn select_within(&self, root: &Element, selector: &str) -> Result<Vec<Element>> {
        root.query_selector_all(selector)
            .map(|list| node_list_elements(&list))
            .map_err(|e| PageError::Dom(format!("invalid selector '{selector}': {e:?}")))
    }

    fn elements_by_tag(&self, root: &Element, tag: &str) -> Vec<Element> {
        collection_elements(&root.get_elements_by_tag_name(tag))
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn text_content(&self, element: &Element) -> String {
        element.text_content().unwrap_or_default()
    }

    fn field_value(&self, element: &Element) -> String {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else {
            element.get_attribute("value").unwrap_or_default()
        }
    }

    fn style_property(&self, element: &Element, property: &str) -> Option<String> {
        inline_style(element)
            .ok()
            .and_then(|style| style.get_property_value(property).ok())
            .filter(|value| !value.is_empty())
    }

    fn set_style_property(&self, element: &Element, property: &str, value: &str) -> Result<()> {
        inline_style(element)?
            .set_property(property, value)
            .map_err(|e| PageError::Dom(format!("failed to set {property}: {e:?}")))
    }

    fn remove(&self, element: &Element) {
        element.remove();
    }

    fn is_attached(&self, element: &Element) -> bool {
        element.is_connected()
    }

    fn confirm(&self, message: &str) -> bool {
        self.window.confirm_with_message(message).unwrap_or(false)
    }
}
