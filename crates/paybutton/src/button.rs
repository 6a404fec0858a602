//! Payment button construction.
//!
//! [`ButtonBuilder`] turns [`ButtonOptions`] into a `div` container holding a
//! styled `button` element.
//!
//! # Overview
//!
//! Each [`build`](ButtonBuilder::build):
//! - Requires a click callback and fails before touching the document without one
//! - Injects the shared stylesheets into the document the first time it succeeds
//! - Sets the `gpay-button` class plus the color and size classes
//! - Wires `hover`, `active` and `focus` classes to pointer and focus events
//! - Runs the click callback once per click
//!
//! The container is returned detached; inserting it into the page is up to
//! the caller.
//!
//! # Example
//!
//! ```
//! use paybutton::prelude::*;
//!
//! let mut builder = ButtonBuilder::new(MemoryDocument::new().with_preferred_language("de-DE"));
//! let container = builder
//!     .build(ButtonOptions::new().with_type(ButtonType::Short).on_click(|| {}))
//!     .unwrap();
//!
//! let button = &container.children()[0];
//! assert_eq!(button.attribute("class").as_deref(), Some("gpay-button black short"));
//! assert_eq!(builder.document().injected_styles().len(), 2);
//! ```

use std::rc::Rc;

use paybutton_core::logging::{span_names, targets};
use paybutton_style::StyleInjectionState;

use crate::constants::{BUTTON_STYLE, GPAY_BUTTON_CLASS, LocaleWidths};
use crate::dom::{Document, Element};
use crate::error::{ButtonError, Result};
use crate::events::{DomEvent, EventKind, InteractionClass};
use crate::locale::resolve_locale;
use crate::options::ButtonOptions;
use crate::stylesheet::long_button_css;

/// Builds payment buttons in a document.
///
/// The builder owns the stylesheet injection flag, so stylesheets are injected
/// once per builder until [`reset_injection_flag`](Self::reset_injection_flag).
/// The locale is read from the document at that first injection; later
/// language changes do not affect the injected stylesheet.
#[derive(Debug)]
pub struct ButtonBuilder<D: Document> {
    document: D,
    locale_widths: LocaleWidths,
    injection: StyleInjectionState,
}

impl<D: Document> ButtonBuilder<D> {
    /// Create a builder using the built-in locale table.
    pub fn new(document: D) -> Self {
        Self {
            document,
            locale_widths: LocaleWidths::builtin(),
            injection: StyleInjectionState::new(),
        }
    }

    /// Set the locale table using builder pattern.
    pub fn with_locale_widths(mut self, locale_widths: LocaleWidths) -> Self {
        self.locale_widths = locale_widths;
        self
    }

    /// The document buttons are created in.
    pub fn document(&self) -> &D {
        &self.document
    }

    /// The locale table.
    pub fn locale_widths(&self) -> &LocaleWidths {
        &self.locale_widths
    }

    /// The stylesheet injection flag.
    pub fn injection_state(&self) -> StyleInjectionState {
        self.injection
    }

    /// Clear the injection flag so the next build injects the stylesheets again.
    pub fn reset_injection_flag(&mut self) {
        tracing::debug!(target: targets::BUTTON, "stylesheet injection flag reset");
        self.injection.reset();
    }

    /// Build a button wrapped in a `div` container.
    ///
    /// # Errors
    ///
    /// - [`ButtonError::MissingRequiredCallback`] if `options.on_click` is
    ///   `None`. Nothing is injected or created in that case.
    /// - [`ButtonError::Dom`] if the document rejects an operation.
    pub fn build(&mut self, options: ButtonOptions) -> Result<D::Element> {
        let _span = tracing::debug_span!(target: targets::BUTTON, span_names::BUILD).entered();

        let Some(on_click) = options.on_click.clone() else {
            tracing::debug!(target: targets::BUTTON, "rejected options without click callback");
            return Err(ButtonError::MissingRequiredCallback);
        };

        self.inject_styles()?;

        let style = options.resolve();
        let button = self.document.create_element("button")?;
        button.set_attribute("class", &format!("{GPAY_BUTTON_CLASS} {}", style.class_name()))?;

        attach_interaction_listeners(&button)?;
        button.add_event_listener(
            EventKind::Click,
            Rc::new(move |_: &D::Element, _: &DomEvent| on_click()),
        )?;

        let container = self.document.create_element("div")?;
        container.append_child(&button)?;

        tracing::debug!(
            target: targets::BUTTON,
            class = style.class_name(),
            "built payment button"
        );
        Ok(container)
    }

    fn inject_styles(&mut self) -> Result<bool> {
        let _span = tracing::debug_span!(target: targets::BUTTON, span_names::INJECT).entered();

        let document = &self.document;
        let locale_widths = &self.locale_widths;
        let injected = self.injection.inject_once(document, || {
            let locale = resolve_locale(document.preferred_language().as_deref(), locale_widths);
            vec![BUTTON_STYLE.to_string(), long_button_css(&locale)]
        })?;
        Ok(injected)
    }
}

fn attach_interaction_listeners<E: Element>(button: &E) -> Result<()> {
    for class in InteractionClass::ALL {
        for &kind in class.triggers() {
            button.add_event_listener(
                kind,
                Rc::new(move |target: &E, event: &DomEvent| {
                    let on = event.kind() == class.set_on();
                    if let Err(err) = target.toggle_class(class.class_name(), on) {
                        tracing::warn!(
                            target: targets::BUTTON,
                            class = class.class_name(),
                            error = %err,
                            "failed to update interaction class"
                        );
                    }
                }),
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::dom::{MemoryDocument, MemoryElement};

    fn button_of(container: &MemoryElement) -> MemoryElement {
        container.children()[0].clone()
    }

    #[test]
    fn missing_callback_touches_nothing() {
        let mut builder = ButtonBuilder::new(MemoryDocument::new());

        let err = builder
            .build(ButtonOptions::new().with_raw_type("short"))
            .unwrap_err();
        assert_eq!(err, ButtonError::MissingRequiredCallback);
        assert!(!builder.injection_state().is_injected());
        assert!(builder.document().injected_styles().is_empty());
    }

    #[test]
    fn container_wraps_button() {
        let mut builder = ButtonBuilder::new(MemoryDocument::new());
        let container = builder.build(ButtonOptions::new().on_click(|| {})).unwrap();

        assert_eq!(container.tag(), "div");
        assert_eq!(container.children().len(), 1);
        let button = button_of(&container);
        assert_eq!(button.tag(), "button");
        assert_eq!(button.attribute("class").as_deref(), Some("gpay-button black long"));
    }

    #[test]
    fn listeners_cover_every_trigger() {
        let mut builder = ButtonBuilder::new(MemoryDocument::new());
        let button = button_of(&builder.build(ButtonOptions::new().on_click(|| {})).unwrap());

        assert_eq!(button.listener_count(EventKind::PointerEnter), 1);
        // hover and active both listen for leave
        assert_eq!(button.listener_count(EventKind::PointerLeave), 2);
        assert_eq!(button.listener_count(EventKind::PointerDown), 1);
        assert_eq!(button.listener_count(EventKind::PointerUp), 1);
        assert_eq!(button.listener_count(EventKind::Focus), 1);
        assert_eq!(button.listener_count(EventKind::Blur), 1);
        assert_eq!(button.listener_count(EventKind::Click), 1);
    }

    #[test]
    fn focus_class_follows_focus() {
        let mut builder = ButtonBuilder::new(MemoryDocument::new());
        let button = button_of(&builder.build(ButtonOptions::new().on_click(|| {})).unwrap());

        button.dispatch(EventKind::Focus);
        assert!(button.has_class("focus"));
        button.dispatch(EventKind::PointerLeave);
        assert!(button.has_class("focus"));
        button.dispatch(EventKind::Blur);
        assert!(!button.has_class("focus"));
    }

    #[test]
    fn locale_is_read_at_first_injection_only() {
        let mut builder = ButtonBuilder::new(MemoryDocument::new().with_preferred_language("de"));
        builder.build(ButtonOptions::new().on_click(|| {})).unwrap();

        builder.document().set_preferred_language(Some("fr-FR"));
        builder.build(ButtonOptions::new().on_click(|| {})).unwrap();

        let styles = builder.document().injected_styles();
        assert_eq!(styles.len(), 2);
        assert!(styles[1].contains("min-width: 168px"));
        assert!(styles[1].contains("/dark/de.svg"));
    }

    #[test]
    fn custom_locale_table() {
        let table = LocaleWidths::from_entries([("en", 150), ("xx", 200)]);
        let mut builder =
            ButtonBuilder::new(MemoryDocument::new().with_preferred_language("xx-YY"))
                .with_locale_widths(table);
        builder.build(ButtonOptions::new().on_click(|| {})).unwrap();

        let styles = builder.document().injected_styles();
        assert!(styles[1].contains("min-width: 200px"));
        assert!(styles[1].contains("/light/xx.svg"));
    }

    #[test]
    fn click_runs_callback() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let mut builder = ButtonBuilder::new(MemoryDocument::new());
        let button = button_of(
            &builder
                .build(ButtonOptions::new().on_click(move || counter.set(counter.get() + 1)))
                .unwrap(),
        );

        button.dispatch(EventKind::PointerDown);
        assert_eq!(hits.get(), 0);
        button.dispatch(EventKind::Click);
        assert_eq!(hits.get(), 1);
    }
}
