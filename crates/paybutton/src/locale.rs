//! Locale resolution for the long button artwork.
//!
//! The host reports a preferred language tag (`navigator.language` in a
//! browser, the OS locale on native hosts). The tag is reduced to a 2-letter
//! code supported by [`LocaleWidths`], falling back to [`DEFAULT_LOCALE`].
//!
//! ```
//! use paybutton::constants::LocaleWidths;
//! use paybutton::locale::resolve_locale;
//!
//! let table = LocaleWidths::builtin();
//! assert_eq!(resolve_locale(Some("de-CH"), &table).code, "de");
//! assert_eq!(resolve_locale(Some("xx-YY"), &table).code, "en");
//! assert_eq!(resolve_locale(None, &table).code, "en");
//! ```

use paybutton_core::logging::targets;

use crate::constants::{DEFAULT_LOCALE, FALLBACK_MIN_WIDTH, LocaleWidths};

/// A source of the user's preferred language tag.
pub trait LocaleSource {
    /// The preferred BCP 47 language tag (e.g. `"fr-FR"`), if the host knows it.
    fn preferred_language(&self) -> Option<String>;
}

/// Reads the operating system locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLocale;

impl SystemLocale {
    /// Get the current system locale identifier, if any.
    ///
    /// # Platform Behavior
    ///
    /// - **Windows**: `GetUserDefaultLocaleName`
    /// - **macOS**: `CFLocaleCopyCurrent`
    /// - **Linux**: `LC_ALL`, `LC_MESSAGES` or `LANG`
    #[cfg(feature = "system-locale")]
    pub fn current() -> Option<String> {
        sys_locale::get_locale()
    }

    #[cfg(not(feature = "system-locale"))]
    pub fn current() -> Option<String> {
        None
    }
}

impl LocaleSource for SystemLocale {
    fn preferred_language(&self) -> Option<String> {
        Self::current()
    }
}

/// The locale a stylesheet is generated for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocale {
    /// 2-letter locale code used in asset paths.
    pub code: String,
    /// Minimum width of the long button for this locale, in pixels.
    pub min_width: u32,
}

/// Resolve a preferred language tag against the width table.
///
/// Absent or empty tags resolve to [`DEFAULT_LOCALE`]. Any other tag that is
/// not exactly the default is cut to its first two characters; a prefix with
/// no table entry falls back to the default.
pub fn resolve_locale(tag: Option<&str>, table: &LocaleWidths) -> ResolvedLocale {
    let code = match tag.filter(|t| !t.is_empty()) {
        None => DEFAULT_LOCALE.to_string(),
        Some(tag) if tag == DEFAULT_LOCALE => DEFAULT_LOCALE.to_string(),
        Some(tag) => {
            let prefix: String = tag.chars().take(2).collect();
            if table.contains(&prefix) {
                prefix
            } else {
                tracing::debug!(
                    target: targets::LOCALE,
                    tag,
                    "unsupported locale, falling back to {}",
                    DEFAULT_LOCALE
                );
                DEFAULT_LOCALE.to_string()
            }
        }
    };

    let min_width = table.min_width(&code).unwrap_or(FALLBACK_MIN_WIDTH);
    tracing::debug!(target: targets::LOCALE, locale = %code, min_width, "resolved button locale");
    ResolvedLocale { code, min_width }
}
