//! In-memory element tree.
//!
//! Used for headless rendering and tests. Events are simulated with
//! [`MemoryElement::dispatch`]; injected stylesheets can be parsed and
//! cascaded with [`MemoryDocument::computed_style`].

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::rc::{Rc, Weak};

use paybutton_core::logging::{span_names, targets};
use paybutton_core::{DomError, Signal};
use paybutton_style::{ElementInfo, StyleInjector, StyleSheet};

use crate::dom::{Document, Element, Listener};
use crate::events::{DomEvent, EventKind};
use crate::locale::LocaleSource;

struct Node {
    tag: String,
    attributes: RefCell<BTreeMap<String, String>>,
    text: RefCell<String>,
    children: RefCell<Vec<MemoryElement>>,
    parent: RefCell<Weak<Node>>,
    listeners: RefCell<HashMap<EventKind, Rc<Signal<DomEvent>>>>,
}

/// A reference-counted element handle. Clones refer to the same node.
#[derive(Clone)]
pub struct MemoryElement {
    node: Rc<Node>,
}

impl MemoryElement {
    /// Create a detached element.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            node: Rc::new(Node {
                tag: tag.into().to_ascii_lowercase(),
                attributes: RefCell::new(BTreeMap::new()),
                text: RefCell::new(String::new()),
                children: RefCell::new(Vec::new()),
                parent: RefCell::new(Weak::new()),
                listeners: RefCell::new(HashMap::new()),
            }),
        }
    }

    /// The lowercase tag name.
    pub fn tag(&self) -> &str {
        &self.node.tag
    }

    /// Check whether two handles refer to the same element.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.node, &other.node)
    }

    /// The class list, in attribute order.
    pub fn classes(&self) -> Vec<String> {
        self.attribute("class")
            .map(|class| class.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Child elements, in order.
    pub fn children(&self) -> Vec<MemoryElement> {
        self.node.children.borrow().clone()
    }

    /// The parent element, if attached.
    pub fn parent(&self) -> Option<MemoryElement> {
        self.node.parent.borrow().upgrade().map(|node| Self { node })
    }

    /// Text held directly by this element.
    pub fn text_content(&self) -> String {
        self.node.text.borrow().clone()
    }

    /// Replace the text held by this element.
    pub fn set_text_content(&self, text: &str) {
        *self.node.text.borrow_mut() = text.to_string();
    }

    /// Number of listeners registered for `kind`.
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.node
            .listeners
            .borrow()
            .get(&kind)
            .map_or(0, |signal| signal.connection_count())
    }

    /// Deliver a simulated event to this element's listeners.
    pub fn dispatch(&self, kind: EventKind) {
        let signal = self.node.listeners.borrow().get(&kind).cloned();
        let Some(signal) = signal else {
            tracing::trace!(target: targets::DOM, event = %kind, "no listeners");
            return;
        };

        let _span = tracing::trace_span!(target: targets::DOM, span_names::DISPATCH, event = %kind)
            .entered();
        signal.emit(&DomEvent::new(kind));
    }

    /// Selector-matching facts for this element and its ancestors, root first.
    pub fn element_path(&self) -> Vec<ElementInfo> {
        let mut path = vec![];
        let mut current = Some(self.clone());
        while let Some(element) = current {
            path.push(element.element_info());
            current = element.parent();
        }
        path.reverse();
        path
    }

    /// Selector-matching facts for this element alone.
    pub fn element_info(&self) -> ElementInfo {
        ElementInfo::new(self.tag()).with_classes(self.classes())
    }

    /// Serialize this element and its subtree as HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(self.tag());
        for (name, value) in self.node.attributes.borrow().iter() {
            out.push_str(&format!(" {name}=\"{}\"", escape(value)));
        }
        out.push('>');
        out.push_str(&escape(&self.node.text.borrow()));
        for child in self.node.children.borrow().iter() {
            child.write_html(out);
        }
        out.push_str(&format!("</{}>", self.tag()));
    }

    fn is_inclusive_ancestor_of(&self, other: &Self) -> bool {
        let mut current = Some(other.clone());
        while let Some(element) = current {
            if element.ptr_eq(self) {
                return true;
            }
            current = element.parent();
        }
        false
    }
}

impl Element for MemoryElement {
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), DomError> {
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(DomError::host("setAttribute", "InvalidCharacterError"));
        }
        self.node
            .attributes
            .borrow_mut()
            .insert(name.to_ascii_lowercase(), value.to_string());
        Ok(())
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.node
            .attributes
            .borrow()
            .get(&name.to_ascii_lowercase())
            .cloned()
    }

    fn toggle_class(&self, class: &str, force: bool) -> Result<(), DomError> {
        if class.is_empty() {
            return Err(DomError::host("classList.toggle", "SyntaxError"));
        }
        if class.contains(char::is_whitespace) {
            return Err(DomError::host("classList.toggle", "InvalidCharacterError"));
        }

        let mut classes = self.classes();
        let present = classes.iter().any(|c| c == class);
        match (force, present) {
            (true, false) => classes.push(class.to_string()),
            (false, true) => classes.retain(|c| c != class),
            _ => return Ok(()),
        }
        self.set_attribute("class", &classes.join(" "))
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|c| c == class)
    }

    fn append_child(&self, child: &Self) -> Result<(), DomError> {
        if child.is_inclusive_ancestor_of(self) {
            return Err(DomError::host("appendChild", "HierarchyRequestError"));
        }
        if let Some(old_parent) = child.parent() {
            old_parent
                .node
                .children
                .borrow_mut()
                .retain(|c| !c.ptr_eq(child));
        }
        *child.node.parent.borrow_mut() = Rc::downgrade(&self.node);
        self.node.children.borrow_mut().push(child.clone());
        Ok(())
    }

    fn add_event_listener(
        &self,
        kind: EventKind,
        listener: Listener<Self>,
    ) -> Result<(), DomError> {
        let signal = self
            .node
            .listeners
            .borrow_mut()
            .entry(kind)
            .or_default()
            .clone();
        // Weak handle: the node owns its listeners.
        let target = Rc::downgrade(&self.node);
        signal.connect(move |event| {
            if let Some(node) = target.upgrade() {
                listener(&MemoryElement { node }, event);
            }
        });
        Ok(())
    }
}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryElement")
            .field("tag", &self.node.tag)
            .field("attributes", &self.node.attributes.borrow())
            .field("children", &self.node.children.borrow().len())
            .finish()
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// An in-memory document with a `head` for stylesheets and a `body`.
#[derive(Debug)]
pub struct MemoryDocument {
    head: MemoryElement,
    body: MemoryElement,
    preferred_language: RefCell<Option<String>>,
}

impl MemoryDocument {
    /// Create an empty document with no preferred language.
    pub fn new() -> Self {
        Self {
            head: MemoryElement::new("head"),
            body: MemoryElement::new("body"),
            preferred_language: RefCell::new(None),
        }
    }

    /// Set the preferred language using builder pattern.
    pub fn with_preferred_language(self, tag: impl Into<String>) -> Self {
        *self.preferred_language.borrow_mut() = Some(tag.into());
        self
    }

    /// Change the preferred language reported to the widget.
    pub fn set_preferred_language(&self, tag: Option<&str>) {
        *self.preferred_language.borrow_mut() = tag.map(str::to_string);
    }

    /// The document head.
    pub fn head(&self) -> &MemoryElement {
        &self.head
    }

    /// The document body.
    pub fn body(&self) -> &MemoryElement {
        &self.body
    }

    /// Text of every `<style>` node in the head, in injection order.
    pub fn injected_styles(&self) -> Vec<String> {
        self.head
            .children()
            .iter()
            .filter(|child| child.tag() == "style")
            .map(MemoryElement::text_content)
            .collect()
    }

    /// All injected stylesheets parsed and merged in document order.
    pub fn style_sheet(&self) -> paybutton_style::Result<StyleSheet> {
        let sheets = self
            .injected_styles()
            .iter()
            .map(|css| StyleSheet::from_css(css))
            .collect::<paybutton_style::Result<Vec<_>>>()?;
        Ok(StyleSheet::merged(&sheets))
    }

    /// Cascade the injected stylesheets onto `element`.
    pub fn computed_style(
        &self,
        element: &MemoryElement,
    ) -> paybutton_style::Result<BTreeMap<String, String>> {
        Ok(self
            .style_sheet()?
            .computed_declarations(&element.element_path()))
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl StyleInjector for MemoryDocument {
    fn inject_style_sheet(&self, css: &str) -> Result<(), DomError> {
        let style = self.create_element("style")?;
        style.set_text_content(css);
        self.head.append_child(&style)
    }
}

impl LocaleSource for MemoryDocument {
    fn preferred_language(&self) -> Option<String> {
        self.preferred_language.borrow().clone()
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn create_element(&self, tag: &str) -> Result<MemoryElement, DomError> {
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(DomError::host("createElement", "InvalidCharacterError"));
        }
        Ok(MemoryElement::new(tag))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn class_toggling_follows_class_list_semantics() {
        let element = MemoryElement::new("button");
        element.set_attribute("class", "gpay-button black long").unwrap();

        element.toggle_class("hover", true).unwrap();
        element.toggle_class("hover", true).unwrap();
        assert_eq!(element.attribute("class").as_deref(), Some("gpay-button black long hover"));

        element.toggle_class("hover", false).unwrap();
        element.toggle_class("missing", false).unwrap();
        assert_eq!(element.attribute("class").as_deref(), Some("gpay-button black long"));

        assert!(element.toggle_class("", true).is_err());
        assert!(element.toggle_class("two words", true).is_err());
    }

    #[test]
    fn listeners_fire_in_order_with_target() {
        let element = MemoryElement::new("button");
        let log = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second"] {
            let log = log.clone();
            element
                .add_event_listener(
                    EventKind::Click,
                    Rc::new(move |target: &MemoryElement, event: &DomEvent| {
                        log.borrow_mut().push(format!("{tag}:{}:{}", target.tag(), event.kind()));
                    }),
                )
                .unwrap();
        }

        element.dispatch(EventKind::Click);
        element.dispatch(EventKind::Focus);
        assert_eq!(*log.borrow(), vec!["first:button:click", "second:button:click"]);
        assert_eq!(element.listener_count(EventKind::Click), 2);
        assert_eq!(element.listener_count(EventKind::Blur), 0);
    }

    #[test]
    fn listener_does_not_keep_element_alive() {
        let hits = Rc::new(Cell::new(0));
        let element = MemoryElement::new("button");
        let counter = hits.clone();
        element
            .add_event_listener(
                EventKind::Click,
                Rc::new(move |_: &MemoryElement, _: &DomEvent| counter.set(counter.get() + 1)),
            )
            .unwrap();

        let weak = Rc::downgrade(&element.node);
        drop(element);
        assert!(weak.upgrade().is_none());
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn append_moves_and_rejects_cycles() {
        let first = MemoryElement::new("div");
        let second = MemoryElement::new("div");
        let child = MemoryElement::new("button");

        first.append_child(&child).unwrap();
        second.append_child(&child).unwrap();
        assert!(first.children().is_empty());
        assert!(child.parent().is_some_and(|p| p.ptr_eq(&second)));

        assert!(child.append_child(&second).is_err());
        assert!(child.append_child(&child).is_err());
    }

    #[test]
    fn html_serialization() {
        let div = MemoryElement::new("div");
        let button = MemoryElement::new("button");
        button.set_attribute("class", "gpay-button \"x\"").unwrap();
        div.append_child(&button).unwrap();

        assert_eq!(
            div.to_html(),
            "<div><button class=\"gpay-button &quot;x&quot;\"></button></div>"
        );
    }

    #[test]
    fn document_injects_into_head() {
        let document = MemoryDocument::new();
        document.inject_style_sheet(".a { width: 1px; }").unwrap();
        document.inject_style_sheet(".a { width: 2px; }").unwrap();

        assert_eq!(document.injected_styles().len(), 2);
        let element = document.create_element("div").unwrap();
        element.set_attribute("class", "a").unwrap();
        assert_eq!(document.computed_style(&element).unwrap()["width"], "2px");
    }

    #[test]
    fn document_rejects_bad_tags() {
        let document = MemoryDocument::new();
        assert!(document.create_element("").is_err());
        assert!(document.create_element("my button").is_err());
        assert!(document.create_element("my-button").is_ok());
    }

    #[test]
    fn preferred_language_is_configurable() {
        let document = MemoryDocument::new().with_preferred_language("de-DE");
        assert_eq!(document.preferred_language().as_deref(), Some("de-DE"));

        document.set_preferred_language(None);
        assert_eq!(document.preferred_language(), None);
    }
}
