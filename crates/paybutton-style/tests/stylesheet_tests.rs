//! Stylesheet parsing and cascade tests.

use std::cell::RefCell;

use paybutton_core::DomError;
use paybutton_style::prelude::*;

const BASE: &str = r#"
.gpay-button { border-radius: 4px; height: 40px; }
.gpay-button.black { background-color: #000; }
.gpay-button.black.hover { background-color: #3c4043; }
.gpay-button.black.active { background-color: #5f6368; }
"#;

fn button(classes: &[&str]) -> Vec<ElementInfo> {
    vec![
        ElementInfo::new("div"),
        ElementInfo::new("button").with_classes(classes.iter().copied()),
    ]
}

#[test]
fn test_cascade_by_specificity() {
    let sheet = StyleSheet::from_css(BASE).unwrap();

    let idle = sheet.computed_declarations(&button(&["gpay-button", "black"]));
    assert_eq!(idle["background-color"], "#000");
    assert_eq!(idle["border-radius"], "4px");

    let hovered = sheet.computed_declarations(&button(&["gpay-button", "black", "hover"]));
    assert_eq!(hovered["background-color"], "#3c4043");
}

#[test]
fn test_later_rule_wins_tie() {
    let sheet = StyleSheet::from_css(BASE).unwrap();
    let both = sheet.computed_declarations(&button(&["gpay-button", "black", "hover", "active"]));
    assert_eq!(both["background-color"], "#5f6368");
}

#[test]
fn test_merged_sheets_keep_document_order() {
    let base = StyleSheet::from_css(".long { width: 200px; }").unwrap();
    let locale = StyleSheet::from_css(".long { width: 240px; min-width: 183px; }").unwrap();
    let merged = StyleSheet::merged([&base, &locale]);

    assert_eq!(merged.len(), 2);
    let computed = merged.computed_declarations(&button(&["long"]));
    assert_eq!(computed["width"], "240px");
    assert_eq!(computed["min-width"], "183px");
}

#[test]
fn test_combinators_in_cascade() {
    let sheet = StyleSheet::from_css(
        "div > button.black { color: white; } section button { color: red; }",
    )
    .unwrap();

    assert_eq!(
        sheet.computed_declarations(&button(&["black"])).get("color").map(String::as_str),
        Some("white")
    );
    assert!(sheet.computed_declarations(&button(&["white"])).is_empty());
}

#[test]
fn test_malformed_rules_are_skipped() {
    let sheet = StyleSheet::from_css(
        ".ok { width: 1px; } #id { width: 2px; } .also-ok { width: 3px; }",
    )
    .unwrap();

    assert_eq!(sheet.len(), 2);
    assert!(sheet.rule(".ok").is_some());
    assert!(sheet.rule(".also-ok").is_some());
}

#[derive(Default)]
struct FailingInjector {
    calls: RefCell<u32>,
}

impl StyleInjector for FailingInjector {
    fn inject_style_sheet(&self, _css: &str) -> Result<(), DomError> {
        *self.calls.borrow_mut() += 1;
        Err(DomError::unavailable("document.head"))
    }
}

#[test]
fn test_failed_injection_can_be_retried() {
    let injector = FailingInjector::default();
    let mut state = StyleInjectionState::new();

    let err = state
        .inject_once(&injector, || vec![BASE.to_string()])
        .unwrap_err();
    assert_eq!(err, DomError::unavailable("document.head"));
    assert!(!state.is_injected());

    let _ = state.inject_once(&injector, || vec![BASE.to_string()]);
    assert_eq!(*injector.calls.borrow(), 2);
}
