//! Button enumerations, class names, asset locations and the locale table.

use std::collections::BTreeMap;
use std::fmt;

/// Base class carried by every payment button.
pub const GPAY_BUTTON_CLASS: &str = "gpay-button";

/// Host serving the localized button artwork.
pub const ASSET_HOST: &str = "https://www.gstatic.com/instantbuy/svg";

/// Locale used when the preferred language is missing or unsupported.
pub const DEFAULT_LOCALE: &str = "en";

/// Width of the long button variant, in pixels.
pub const LONG_BUTTON_WIDTH: u32 = 240;

/// Minimum width used if a custom table has no entry for [`DEFAULT_LOCALE`].
pub const FALLBACK_MIN_WIDTH: u32 = 152;

/// Static stylesheet shared by every button variant.
pub const BUTTON_STYLE: &str = r#"
.gpay-button {
  background-origin: content-box;
  background-position: center center;
  background-repeat: no-repeat;
  background-size: contain;
  border: 0px;
  border-radius: 4px;
  box-shadow: rgba(60, 64, 67, 0.3) 0px 1px 1px 0px, rgba(60, 64, 67, 0.15) 0px 1px 3px 1px;
  cursor: pointer;
  height: 40px;
  min-height: 40px;
  padding: 11px 24px;
}

.gpay-button.black {
  background-color: #000;
  box-shadow: none;
  padding: 12px 24px 10px;
}

.gpay-button.white {
  background-color: #fff;
}

.gpay-button.short {
  min-width: 90px;
  width: 160px;
}

.gpay-button.black.short {
  background-image: url(https://www.gstatic.com/instantbuy/svg/dark_gpay.svg);
}

.gpay-button.white.short {
  background-image: url(https://www.gstatic.com/instantbuy/svg/light_gpay.svg);
}

.gpay-button.black.active {
  background-color: #5f6368;
}

.gpay-button.black.hover {
  background-color: #3c4043;
}

.gpay-button.white.active {
  background-color: #fff;
}

.gpay-button.white.focus {
  box-shadow: #e8e8e8 0 1px 1px 0, #e8e8e8 0 1px 3px;
}

.gpay-button.white.hover {
  background-color: #f8f8f8;
}
"#;

/// Minimum pixel width of the long button per 2-letter locale.
pub const BUTTON_LOCALE_TO_MIN_WIDTH: &[(&str, u32)] = &[
    ("en", 152),
    ("ar", 189),
    ("bg", 163),
    ("ca", 182),
    ("cs", 192),
    ("da", 154),
    ("de", 168),
    ("el", 194),
    ("es", 154),
    ("et", 147),
    ("fi", 148),
    ("fr", 183),
    ("hr", 157),
    ("id", 186),
    ("it", 182),
    ("ja", 148),
    ("ko", 137),
    ("ms", 186),
    ("nl", 167),
    ("pl", 182),
    ("pt", 193),
    ("ru", 206),
    ("sk", 157),
    ("sl", 211),
    ("sr", 146),
    ("sv", 154),
    ("th", 146),
    ("tr", 161),
    ("uk", 207),
    ("zh", 156),
];

/// Size variant of the button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonType {
    /// Full-width button with the localized "Buy with" artwork.
    #[default]
    Long,
    /// Compact button with the logo only.
    Short,
}

impl ButtonType {
    /// Every variant.
    pub const ALL: [ButtonType; 2] = [ButtonType::Long, ButtonType::Short];

    /// The option value naming this variant.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Short => "short",
        }
    }

    /// Parse an option value, ignoring ASCII case.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(raw))
    }

    /// Apply the lenient default: absent or unknown values become [`ButtonType::Long`].
    pub fn normalize(raw: Option<&str>) -> Self {
        raw.and_then(Self::parse).unwrap_or_default()
    }
}

impl fmt::Display for ButtonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requested color of the button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ButtonColor {
    /// Let the widget pick; currently always black.
    #[default]
    Default,
    /// Dark button for light backgrounds.
    Black,
    /// Light button for dark backgrounds.
    White,
}

impl ButtonColor {
    /// Every variant.
    pub const ALL: [ButtonColor; 3] = [ButtonColor::Default, ButtonColor::Black, ButtonColor::White];

    /// The option value naming this variant.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Black => "black",
            Self::White => "white",
        }
    }

    /// Parse an option value, ignoring ASCII case.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(raw))
    }

    /// Apply the lenient default, then resolve [`ButtonColor::Default`] to
    /// [`ButtonColor::Black`]. Never returns `Default`.
    pub fn normalize(raw: Option<&str>) -> Self {
        match raw.and_then(Self::parse).unwrap_or_default() {
            Self::Default => Self::Black,
            color => color,
        }
    }
}

impl fmt::Display for ButtonColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lookup table from 2-letter locale code to long-button minimum width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleWidths {
    widths: BTreeMap<String, u32>,
}

impl LocaleWidths {
    /// The table shipped with the widget.
    pub fn builtin() -> Self {
        Self::from_entries(BUTTON_LOCALE_TO_MIN_WIDTH.iter().copied())
    }

    /// Build a table from `(locale, width)` pairs.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u32)>,
        S: Into<String>,
    {
        Self {
            widths: entries
                .into_iter()
                .map(|(locale, width)| (locale.into(), width))
                .collect(),
        }
    }

    /// Minimum width for `locale`, if supported.
    pub fn min_width(&self, locale: &str) -> Option<u32> {
        self.widths.get(locale).copied()
    }

    /// Whether `locale` has an entry.
    pub fn contains(&self, locale: &str) -> bool {
        self.widths.contains_key(locale)
    }

    /// Supported locale codes, sorted.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.widths.keys().map(String::as_str)
    }
}

impl Default for LocaleWidths {
    fn default() -> Self {
        Self::builtin()
    }
}
