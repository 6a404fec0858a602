//! Browser backend through `web-sys`.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use paybutton_core::DomError;
use paybutton_core::logging::targets;
use paybutton_style::StyleInjector;

use crate::dom::{Document, Element, Listener};
use crate::events::{DomEvent, EventKind};
use crate::locale::LocaleSource;

fn host_error(operation: &str, value: JsValue) -> DomError {
    DomError::host(operation, format!("{value:?}"))
}

fn listener_target(event: &web_sys::Event) -> Option<WebElement> {
    event
        .current_target()?
        .dyn_into::<web_sys::Element>()
        .ok()
        .map(WebElement::new)
}

/// A browser element.
#[derive(Debug, Clone)]
pub struct WebElement {
    inner: web_sys::Element,
}

impl WebElement {
    /// Wrap an existing element.
    pub fn new(inner: web_sys::Element) -> Self {
        Self { inner }
    }

    /// The underlying `web_sys` element, for inserting into the page.
    pub fn as_element(&self) -> &web_sys::Element {
        &self.inner
    }

    /// Unwrap into the underlying element.
    pub fn into_element(self) -> web_sys::Element {
        self.inner
    }
}

impl Element for WebElement {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError> {
        self.inner
            .set_attribute(name, value)
            .map_err(|e| host_error("setAttribute", e))
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.inner.get_attribute(name)
    }

    fn toggle_class(&self, class: &str, force: bool) -> Result<(), DomError> {
        self.inner
            .class_list()
            .toggle_with_force(class, force)
            .map(|_| ())
            .map_err(|e| host_error("classList.toggle", e))
    }

    fn has_class(&self, class: &str) -> bool {
        self.inner.class_list().contains(class)
    }

    fn append_child(&self, child: &Self) -> Result<(), DomError> {
        self.inner
            .append_child(&child.inner)
            .map(|_| ())
            .map_err(|e| host_error("appendChild", e))
    }

    fn add_event_listener(
        &self,
        kind: EventKind,
        listener: Listener<Self>,
    ) -> Result<(), DomError> {
        // The element is recovered from the event so the page can collect it.
        let closure = Closure::<dyn Fn(web_sys::Event)>::new(move |event: web_sys::Event| {
            let Some(kind) = EventKind::from_dom_name(&event.type_()) else {
                tracing::warn!(target: targets::DOM, event = %event.type_(), "unexpected event type");
                return;
            };
            let Some(target) = listener_target(&event) else {
                tracing::warn!(target: targets::DOM, event = %kind, "event has no element target");
                return;
            };
            listener(&target, &DomEvent::new(kind));
        });

        self.inner
            .add_event_listener_with_callback(kind.dom_name(), closure.as_ref().unchecked_ref())
            .map_err(|e| host_error("addEventListener", e))?;
        // The page owns the listener from here on.
        closure.forget();
        Ok(())
    }
}

/// The page's document.
#[derive(Debug, Clone)]
pub struct WebDocument {
    window: web_sys::Window,
    document: web_sys::Document,
}

impl WebDocument {
    /// Bind to the global `window` and its document.
    pub fn new() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or_else(|| DomError::unavailable("window"))?;
        let document = window
            .document()
            .ok_or_else(|| DomError::unavailable("document"))?;
        Ok(Self { window, document })
    }

    /// The underlying `web_sys` document.
    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }
}

impl StyleInjector for WebDocument {
    fn inject_style_sheet(&self, css: &str) -> Result<(), DomError> {
        let head = self
            .document
            .head()
            .ok_or_else(|| DomError::unavailable("document.head"))?;
        let style = self
            .document
            .create_element("style")
            .map_err(|e| host_error("createElement", e))?;
        style.set_text_content(Some(css));
        head.append_child(&style)
            .map(|_| ())
            .map_err(|e| host_error("appendChild", e))
    }
}

impl LocaleSource for WebDocument {
    fn preferred_language(&self) -> Option<String> {
        self.window.navigator().language()
    }
}

impl Document for WebDocument {
    type Element = WebElement;

    fn create_element(&self, tag: &str) -> Result<WebElement, DomError> {
        self.document
            .create_element(tag)
            .map(WebElement::new)
            .map_err(|e| host_error("createElement", e))
    }
}
