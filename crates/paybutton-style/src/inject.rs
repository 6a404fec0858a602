//! Stylesheet injection.
//!
//! A [`StyleInjector`] appends one stylesheet node per call and keeps no
//! memory of what it already appended. Avoiding duplicates is the caller's
//! job; [`StyleInjectionState`] is the flag callers own for that.

use paybutton_core::DomError;
use paybutton_core::logging::targets;

/// Something that can append stylesheet text to a document.
pub trait StyleInjector {
    /// Append a `<style>` node holding `css` to the document head.
    fn inject_style_sheet(&self, css: &str) -> Result<(), DomError>;
}

impl<T: StyleInjector + ?Sized> StyleInjector for &T {
    fn inject_style_sheet(&self, css: &str) -> Result<(), DomError> {
        (**self).inject_style_sheet(css)
    }
}

/// Tracks whether the shared stylesheets have been injected.
///
/// Starts cleared. [`inject_once`](Self::inject_once) sets it after a
/// successful injection; only [`reset`](Self::reset) clears it again.
/// Sheets appended by an interrupted injection are remembered, so a retry
/// appends only the rest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StyleInjectionState {
    injected: bool,
    appended: usize,
}

impl StyleInjectionState {
    /// Create a cleared state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether injection already happened.
    pub fn is_injected(&self) -> bool {
        self.injected
    }

    /// Clear the flag so the next [`inject_once`](Self::inject_once) injects again.
    pub fn reset(&mut self) {
        self.injected = false;
        self.appended = 0;
    }

    /// Sheets appended so far by an injection that has not completed.
    pub fn appended(&self) -> usize {
        self.appended
    }

    /// Inject the stylesheets produced by `sheets`, unless already done.
    ///
    /// `sheets` is only called when injection actually happens, so any work
    /// it does (such as resolving the locale) is skipped once the flag is set.
    /// Returns `true` when this call completed the injection.
    ///
    /// If a sheet fails, the flag stays cleared and the sheets appended
    /// before it are counted; the next call resumes at the failed sheet.
    pub fn inject_once<I, F>(&mut self, injector: &I, sheets: F) -> Result<bool, DomError>
    where
        I: StyleInjector + ?Sized,
        F: FnOnce() -> Vec<String>,
    {
        if self.injected {
            tracing::trace!(target: targets::INJECT, "stylesheets already injected");
            return Ok(false);
        }

        let sheets = sheets();
        for css in sheets.iter().skip(self.appended) {
            injector.inject_style_sheet(css)?;
            self.appended += 1;
        }
        self.injected = true;
        self.appended = 0;
        tracing::debug!(target: targets::INJECT, count = sheets.len(), "injected stylesheets");
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    #[derive(Default)]
    struct RecordingInjector {
        sheets: RefCell<Vec<String>>,
        calls: Cell<usize>,
        fail: bool,
        fail_on_call: Option<usize>,
    }

    impl StyleInjector for RecordingInjector {
        fn inject_style_sheet(&self, css: &str) -> Result<(), DomError> {
            let call = self.calls.get() + 1;
            self.calls.set(call);
            if self.fail || self.fail_on_call == Some(call) {
                return Err(DomError::unavailable("document.head"));
            }
            self.sheets.borrow_mut().push(css.to_string());
            Ok(())
        }
    }

    #[test]
    fn injects_only_once() {
        let injector = RecordingInjector::default();
        let mut state = StyleInjectionState::new();
        let mut generated = 0;

        for _ in 0..3 {
            state
                .inject_once(&injector, || {
                    generated += 1;
                    vec!["a {}".into(), "b {}".into()]
                })
                .unwrap();
        }

        assert!(state.is_injected());
        assert_eq!(generated, 1);
        assert_eq!(*injector.sheets.borrow(), vec!["a {}", "b {}"]);
    }

    #[test]
    fn reset_allows_reinjection() {
        let injector = RecordingInjector::default();
        let mut state = StyleInjectionState::new();

        assert!(state.inject_once(&injector, || vec!["a {}".into()]).unwrap());
        state.reset();
        assert!(!state.is_injected());
        assert!(state.inject_once(&injector, || vec!["a {}".into()]).unwrap());

        assert_eq!(injector.sheets.borrow().len(), 2);
    }

    #[test]
    fn failed_injection_leaves_flag_clear() {
        let injector = RecordingInjector {
            fail: true,
            ..Default::default()
        };
        let mut state = StyleInjectionState::new();

        let err = state.inject_once(&injector, || vec!["a {}".into()]).unwrap_err();
        assert_eq!(err, DomError::unavailable("document.head"));
        assert!(!state.is_injected());
    }

    #[test]
    fn interrupted_injection_resumes_without_duplicates() {
        let injector = RecordingInjector {
            fail_on_call: Some(2),
            ..Default::default()
        };
        let mut state = StyleInjectionState::new();
        let sheets = || vec!["base {}".to_string(), "long {}".to_string()];

        assert!(state.inject_once(&injector, sheets).is_err());
        assert!(!state.is_injected());
        assert_eq!(state.appended(), 1);
        assert_eq!(*injector.sheets.borrow(), vec!["base {}"]);

        assert!(state.inject_once(&injector, sheets).unwrap());
        assert!(state.is_injected());
        assert_eq!(state.appended(), 0);
        assert_eq!(*injector.sheets.borrow(), vec!["base {}", "long {}"]);
    }
}
