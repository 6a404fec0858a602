//! Styled payment button widget.
//!
//! This crate builds a "pay" button in a host document:
//!
//! - **Construction**: [`ButtonBuilder`] creates the element, sets its classes
//!   and wires the click callback
//! - **Styling**: the shared stylesheets are injected once, with long button
//!   artwork and width chosen from the user's locale
//! - **Interaction**: `hover`, `active` and `focus` classes track pointer and
//!   focus events
//! - **Backends**: an in-memory [`dom::MemoryDocument`] and, with the `web`
//!   feature, a browser document through `web-sys`
//!
//! # Example
//!
//! ```
//! use paybutton::prelude::*;
//!
//! let document = MemoryDocument::new().with_preferred_language("fr-FR");
//! let mut builder = ButtonBuilder::new(document);
//!
//! let options = ButtonOptions::new()
//!     .with_color(ButtonColor::White)
//!     .on_click(|| println!("pay"));
//! let container = builder.build(options)?;
//!
//! let button = &container.children()[0];
//! button.dispatch(EventKind::PointerEnter);
//! assert!(button.has_class("hover"));
//! # Ok::<(), paybutton::ButtonError>(())
//! ```

pub mod button;
pub mod constants;
pub mod dom;
pub mod events;
pub mod locale;
pub mod options;
pub mod stylesheet;

mod error;

pub use button::ButtonBuilder;
pub use constants::{ButtonColor, ButtonType, LocaleWidths};
pub use error::{ButtonError, OptionsError, Result};
pub use events::{DomEvent, EventKind, InteractionClass};
pub use locale::{LocaleSource, ResolvedLocale, SystemLocale, resolve_locale};
pub use options::{ButtonOptions, ClickHandler, ResolvedStyle, StyleOptions, class_for_button};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::button::ButtonBuilder;
    pub use crate::constants::{ButtonColor, ButtonType, LocaleWidths};
    pub use crate::dom::{Document, Element, MemoryDocument, MemoryElement};
    pub use crate::error::{ButtonError, OptionsError};
    pub use crate::events::{DomEvent, EventKind, InteractionClass};
    pub use crate::locale::{LocaleSource, SystemLocale};
    pub use crate::options::{ButtonOptions, StyleOptions};

    #[cfg(feature = "web")]
    pub use crate::dom::{WebDocument, WebElement};
}
