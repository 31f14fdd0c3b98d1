//! Document access for page behaviors
//!
//! Behaviors never talk to `web_sys` directly. They go through [`Page`], which
//! exposes the handful of DOM operations they need. [`WebPage`] is the browser
//! implementation; [`MemoryPage`] is an in-memory document used for headless
//! runs and tests.

pub mod memory;
pub mod web;


pub use memory::{ElementSpec, MemoryPage, NodeId};
pub use web::WebPage;

use crate::error::Result;

/// The DOM surface the behaviors operate on
///
/// Element handles are cheap to clone and stay valid after the element is
/// removed from the page; operations on a detached element are no-ops or
/// report it as absent, never errors.
pub trait Page {
    /// Handle to one element of the page
    type Element: Clone + 'static;

    /// Look up an element by its `id` attribute
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// All attached elements matching `selector`, in document order
    ///
    /// # Errors
    ///
    /// Returns an error if the selector is rejected.
    fn select_all(&self, selector: &str) -> Result<Vec<Self::Element>>;

    /// Descendants of `root` matching `selector`, in document order
    ///
    /// # Errors
    ///
    /// Returns an error if the selector is rejected.
    fn select_within(&self, root: &Self::Element, selector: &str) -> Result<Vec<Self::Element>>;

    /// Descendants of `root` with the given tag name, in document order
    fn elements_by_tag(&self, root: &Self::Element, tag: &str) -> Vec<Self::Element>;

    /// Value of an attribute, if present
    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    /// Concatenated text of the element and its descendants
    fn text_content(&self, element: &Self::Element) -> String;

    /// Current value of a form control (empty for non-controls without a `value`)
    fn field_value(&self, element: &Self::Element) -> String;

    /// Inline style property, `None` when unset
    fn style_property(&self, element: &Self::Element, property: &str) -> Option<String>;

    /// Set an inline style property; an empty value clears it
    ///
    /// # Errors
    ///
    /// Returns an error if the element has no inline style or the write is rejected.
    fn set_style_property(&self, element: &Self::Element, property: &str, value: &str)
    -> Result<()>;

    /// Detach the element from the page; no-op when already detached
    fn remove(&self, element: &Self::Element);

    /// Whether the element is still part of the page
    fn is_attached(&self, element: &Self::Element) -> bool;

    /// Show a blocking confirmation prompt; `false` when dismissed or unavailable
    fn confirm(&self, message: &str) -> bool;
}
