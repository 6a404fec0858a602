//! Element and document abstraction.
//!
//! The button logic only needs a narrow slice of a DOM: create elements, set
//! attributes, toggle classes, append children and listen for events. These
//! traits capture that slice so the same builder drives a browser page (the
//! `web` feature) or the in-memory tree in [`memory`].

use std::rc::Rc;

use paybutton_core::DomError;
use paybutton_style::StyleInjector;

use crate::events::{DomEvent, EventKind};
use crate::locale::LocaleSource;

pub mod memory;
#[cfg(feature = "web")]
pub mod web;

pub use memory::{MemoryDocument, MemoryElement};
#[cfg(feature = "web")]
pub use web::{WebDocument, WebElement};

/// An event listener. Receives the element it was registered on.
pub type Listener<E> = Rc<dyn Fn(&E, &DomEvent)>;

/// A handle to a host element. Clones refer to the same element.
pub trait Element: Clone + 'static {
    /// Set an attribute, replacing any previous value.
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError>;

    /// Read an attribute.
    fn attribute(&self, name: &str) -> Option<String>;

    /// Add (`force == true`) or remove (`force == false`) a class.
    fn toggle_class(&self, class: &str, force: bool) -> Result<(), DomError>;

    /// Check for a class.
    fn has_class(&self, class: &str) -> bool;

    /// Append `child` as the last child of this element.
    fn append_child(&self, child: &Self) -> Result<(), DomError>;

    /// Register a listener for `kind`. Listeners fire in registration order.
    fn add_event_listener(&self, kind: EventKind, listener: Listener<Self>)
    -> Result<(), DomError>;
}

/// A host document: creates elements, hosts stylesheets and knows the
/// user's preferred language.
pub trait Document: StyleInjector + LocaleSource {
    /// Element handle type of this document.
    type Element: Element;

    /// Create a detached element with the given tag.
    fn create_element(&self, tag: &str) -> Result<Self::Element, DomError>;
}
