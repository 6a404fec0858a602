//! Selector types, specificity and matching.
//!
//! Only the subset of CSS the button stylesheets use is modelled: type and
//! class selectors, compounds of them (`button.black.long`) and the
//! descendant/child combinators.

use std::fmt;

/// A complete selector (e.g. `div > .gpay-button.white`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selector {
    /// Chain of compound parts, outermost first.
    pub parts: Vec<SelectorPart>,
    /// Combinators between parts (length = parts.len() - 1).
    pub combinators: Vec<Combinator>,
}

impl Selector {
    /// Create a simple type selector.
    pub fn type_selector(tag: impl Into<String>) -> Self {
        Self {
            parts: vec![SelectorPart::type_only(tag)],
            combinators: vec![],
        }
    }

    /// Create a compound class selector (`.a.b`).
    pub fn classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parts: vec![SelectorPart {
                element: None,
                classes: classes.into_iter().map(Into::into).collect(),
            }],
            combinators: vec![],
        }
    }

    /// Add a descendant selector part.
    pub fn descendant(mut self, part: SelectorPart) -> Self {
        if !self.parts.is_empty() {
            self.combinators.push(Combinator::Descendant);
        }
        self.parts.push(part);
        self
    }

    /// Add a child selector part.
    pub fn child(mut self, part: SelectorPart) -> Self {
        if !self.parts.is_empty() {
            self.combinators.push(Combinator::Child);
        }
        self.parts.push(part);
        self
    }

    /// Get the rightmost (subject) selector part.
    pub fn subject(&self) -> Option<&SelectorPart> {
        self.parts.last()
    }

    /// Compute the selector's specificity.
    pub fn specificity(&self) -> Specificity {
        self.parts.iter().fold(Specificity::default(), |acc, part| Specificity {
            classes: acc.classes + part.classes.len() as u32,
            types: acc.types + u32::from(part.element.is_some()),
        })
    }

    /// Check whether the selector matches the last element of `path`.
    ///
    /// `path` lists the element and its ancestors, root first.
    pub fn matches(&self, path: &[ElementInfo]) -> bool {
        let Some((subject, ancestors)) = path.split_last() else {
            return false;
        };
        let Some((last, outer)) = self.parts.split_last() else {
            return false;
        };
        last.matches(subject) && self.matches_outer(outer, ancestors)
    }

    fn matches_outer(&self, parts: &[SelectorPart], ancestors: &[ElementInfo]) -> bool {
        let Some((part, rest)) = parts.split_last() else {
            return true;
        };
        match self.combinators[parts.len() - 1] {
            Combinator::Child => match ancestors.split_last() {
                Some((parent, above)) => part.matches(parent) && self.matches_outer(rest, above),
                None => false,
            },
            Combinator::Descendant => (0..ancestors.len())
                .rev()
                .any(|i| part.matches(&ancestors[i]) && self.matches_outer(rest, &ancestors[..i])),
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                match self.combinators[i - 1] {
                    Combinator::Descendant => write!(f, " ")?,
                    Combinator::Child => write!(f, " > ")?,
                }
            }
            write!(f, "{part}")?;
        }
        Ok(())
    }
}

/// A single compound segment (e.g. `button.black.long`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SelectorPart {
    /// Element (tag) name, if constrained.
    pub element: Option<String>,
    /// Class selectors (.class).
    pub classes: Vec<String>,
}

impl SelectorPart {
    /// Create a type-only selector part.
    pub fn type_only(tag: impl Into<String>) -> Self {
        Self {
            element: Some(tag.into()),
            classes: vec![],
        }
    }

    /// Add a class to this part.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Check if this part has no constraints.
    pub fn is_empty(&self) -> bool {
        self.element.is_none() && self.classes.is_empty()
    }

    /// Check whether an element satisfies every constraint of this part.
    pub fn matches(&self, element: &ElementInfo) -> bool {
        let tag_ok = self
            .element
            .as_deref()
            .is_none_or(|tag| tag.eq_ignore_ascii_case(&element.tag));
        tag_ok && self.classes.iter().all(|class| element.has_class(class))
    }
}

impl fmt::Display for SelectorPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(element) = &self.element {
            write!(f, "{element}")?;
        }
        for class in &self.classes {
            write!(f, ".{class}")?;
        }
        Ok(())
    }
}

/// How two selector parts relate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// Whitespace: any ancestor.
    Descendant,
    /// `>`: direct parent.
    Child,
}

/// Selector specificity, compared classes first, then types.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Specificity {
    /// Number of class selectors.
    pub classes: u32,
    /// Number of type selectors.
    pub types: u32,
}

/// The facts about an element that selector matching needs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementInfo {
    /// Tag name.
    pub tag: String,
    /// Class list.
    pub classes: Vec<String>,
}

impl ElementInfo {
    /// Create info for an element with no classes.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            classes: vec![],
        }
    }

    /// Set the class list.
    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes = classes.into_iter().map(Into::into).collect();
        self
    }

    /// Build info from a tag and a whitespace-separated `class` attribute.
    pub fn from_class_attribute(tag: impl Into<String>, class: &str) -> Self {
        Self::new(tag).with_classes(class.split_whitespace())
    }

    /// Check for a class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}
