//! Single style rule definition.

use crate::selector::{Selector, Specificity};

/// One `property: value` pair, with the value kept as source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// Property name, lowercased.
    pub name: String,
    /// Value text with surrounding whitespace trimmed.
    pub value: String,
}

impl Declaration {
    /// Create a declaration.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into().to_ascii_lowercase(),
            value: value.into(),
        }
    }
}

/// A style rule mapping a selector to declarations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    /// The selector for matching elements.
    pub selector: Selector,
    /// Declarations in source order.
    pub declarations: Vec<Declaration>,
    /// Pre-computed specificity.
    pub specificity: Specificity,
    /// Source order (for tie-breaking when specificity is equal).
    pub order: u32,
}

impl StyleRule {
    /// Create a new style rule.
    pub fn new(selector: Selector, declarations: Vec<Declaration>, order: u32) -> Self {
        let specificity = selector.specificity();
        Self {
            selector,
            declarations,
            specificity,
            order,
        }
    }

    /// Look up the last value declared for `name`.
    pub fn declaration(&self, name: &str) -> Option<&str> {
        self.declarations
            .iter()
            .rev()
            .find(|d| d.name.eq_ignore_ascii_case(name))
            .map(|d| d.value.as_str())
    }
}
