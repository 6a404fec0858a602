//! Stylesheet collection and cascading.

use std::collections::BTreeMap;

use crate::rules::{Declaration, StyleRule};
use crate::selector::{ElementInfo, Selector};
use crate::Result;

/// A stylesheet containing multiple rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    /// The rules in this stylesheet.
    pub rules: Vec<StyleRule>,
}

impl StyleSheet {
    /// Create an empty stylesheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a stylesheet from CSS text.
    pub fn from_css(css: &str) -> Result<Self> {
        Ok(Self {
            rules: crate::parser::parse_css(css)?,
        })
    }

    /// Concatenate several stylesheets, in order, into one.
    ///
    /// Later sheets win ties, as they would in a document.
    pub fn merged<'a>(sheets: impl IntoIterator<Item = &'a StyleSheet>) -> Self {
        let mut merged = Self::new();
        for sheet in sheets {
            for rule in &sheet.rules {
                merged.add_style_rule(rule.clone());
            }
        }
        merged
    }

    /// Add a rule to the stylesheet.
    ///
    /// The rule's order is set from the current number of rules.
    pub fn add_rule(&mut self, selector: Selector, declarations: Vec<Declaration>) {
        let order = self.rules.len() as u32;
        self.rules.push(StyleRule::new(selector, declarations, order));
    }

    /// Add a pre-built rule to the stylesheet.
    pub fn add_style_rule(&mut self, mut rule: StyleRule) {
        rule.order = self.rules.len() as u32;
        self.rules.push(rule);
    }

    /// Get the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the stylesheet is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over rules.
    pub fn iter(&self) -> impl Iterator<Item = &StyleRule> {
        self.rules.iter()
    }

    /// Find the first rule whose selector prints as `selector`.
    pub fn rule(&self, selector: &str) -> Option<&StyleRule> {
        self.rules.iter().find(|r| r.selector.to_string() == selector)
    }

    /// Rules matching the last element of `path`, in cascade order
    /// (lowest precedence first).
    pub fn matching_rules(&self, path: &[ElementInfo]) -> Vec<&StyleRule> {
        let mut matched: Vec<&StyleRule> =
            self.rules.iter().filter(|r| r.selector.matches(path)).collect();
        matched.sort_by_key(|r| (r.specificity, r.order));
        matched
    }

    /// Cascade the matching rules into final property values.
    pub fn computed_declarations(&self, path: &[ElementInfo]) -> BTreeMap<String, String> {
        let mut computed = BTreeMap::new();
        for rule in self.matching_rules(path) {
            for declaration in &rule.declarations {
                computed.insert(declaration.name.clone(), declaration.value.clone());
            }
        }
        computed
    }
}
