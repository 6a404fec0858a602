//! Stylesheet handling for paybutton.
//!
//! This crate provides:
//!
//! - **CSS Parsing**: turn stylesheet text into [`StyleRule`]s with `cssparser`
//! - **Cascading**: compute the declarations that apply to an element
//! - **Injection**: the [`StyleInjector`] collaborator and the
//!   [`StyleInjectionState`] that keeps injection at most once
//!
//! # Example
//!
//! ```
//! use paybutton_style::prelude::*;
//!
//! let sheet = StyleSheet::from_css(".black.long { width: 240px; }").unwrap();
//! let button = ElementInfo::new("button").with_classes(["gpay-button", "black", "long"]);
//!
//! let computed = sheet.computed_declarations(&[button]);
//! assert_eq!(computed.get("width").map(String::as_str), Some("240px"));
//! ```

pub mod inject;
pub mod parser;
pub mod rules;
pub mod selector;

mod error;

pub use error::{Error, Result};
pub use inject::{StyleInjectionState, StyleInjector};
pub use parser::parse_css;
pub use rules::{Declaration, StyleRule, StyleSheet};
pub use selector::{Combinator, ElementInfo, Selector, SelectorPart, Specificity};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::inject::{StyleInjectionState, StyleInjector};
    pub use crate::rules::{Declaration, StyleRule, StyleSheet};
    pub use crate::selector::{ElementInfo, Selector, SelectorPart, Specificity};
}
