//! Button options and their normalization.
//!
//! Option values arrive as raw strings, either set programmatically on
//! [`ButtonOptions`] or loaded from configuration through [`StyleOptions`].
//! Unknown values are never an error: they fall back to the defaults.
//!
//! ```
//! use paybutton::options::ButtonOptions;
//!
//! let options = ButtonOptions::new()
//!     .with_raw_type("short")
//!     .with_raw_color("white")
//!     .on_click(|| {});
//! assert_eq!(options.resolve().class_name(), "white short");
//! ```

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Deserializer, Serialize};

use paybutton_core::logging::targets;

use crate::constants::{ButtonColor, ButtonType};
use crate::error::OptionsError;

/// Callback run when the button is clicked.
pub type ClickHandler = Rc<dyn Fn()>;

/// Options accepted by [`ButtonBuilder::build`](crate::ButtonBuilder::build).
#[derive(Clone, Default)]
pub struct ButtonOptions {
    /// Raw size variant. Absent or unknown means long.
    pub button_type: Option<String>,
    /// Raw color. Absent, unknown or "default" means black.
    pub button_color: Option<String>,
    /// Required click callback.
    pub on_click: Option<ClickHandler>,
}

impl ButtonOptions {
    /// Create empty options. Building with them fails until a click handler is set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Options carrying the values of a [`StyleOptions`] record.
    pub fn from_style(style: StyleOptions) -> Self {
        Self {
            button_type: style.button_type,
            button_color: style.button_color,
            on_click: None,
        }
    }

    /// Set the size variant.
    pub fn with_type(self, button_type: ButtonType) -> Self {
        self.with_raw_type(button_type.as_str())
    }

    /// Set the color.
    pub fn with_color(self, button_color: ButtonColor) -> Self {
        self.with_raw_color(button_color.as_str())
    }

    /// Set the size variant from an unvalidated string.
    pub fn with_raw_type(mut self, raw: impl Into<String>) -> Self {
        self.button_type = Some(raw.into());
        self
    }

    /// Set the color from an unvalidated string.
    pub fn with_raw_color(mut self, raw: impl Into<String>) -> Self {
        self.button_color = Some(raw.into());
        self
    }

    /// Set the click callback.
    pub fn on_click(self, handler: impl Fn() + 'static) -> Self {
        self.with_click_handler(Rc::new(handler))
    }

    /// Set an already shared click callback.
    pub fn with_click_handler(mut self, handler: ClickHandler) -> Self {
        self.on_click = Some(handler);
        self
    }

    /// Normalize the raw type and color.
    pub fn resolve(&self) -> ResolvedStyle {
        let resolved = ResolvedStyle {
            button_type: ButtonType::normalize(self.button_type.as_deref()),
            button_color: ButtonColor::normalize(self.button_color.as_deref()),
        };
        tracing::debug!(
            target: targets::BUTTON,
            raw_type = ?self.button_type,
            raw_color = ?self.button_color,
            button_type = %resolved.button_type,
            button_color = %resolved.button_color,
            "normalized button options"
        );
        resolved
    }
}

impl fmt::Debug for ButtonOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonOptions")
            .field("button_type", &self.button_type)
            .field("button_color", &self.button_color)
            .field("on_click", &self.on_click.as_ref().map(|_| "Fn()"))
            .finish()
    }
}

/// Normalized type and color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedStyle {
    pub button_type: ButtonType,
    pub button_color: ButtonColor,
}

impl ResolvedStyle {
    /// The color and size classes for this style.
    pub fn class_name(&self) -> &'static str {
        class_for_button(self.button_type, self.button_color)
    }
}

/// Map a type and color to the button's color and size classes.
///
/// Only black and white have artwork; any other color gives `"black long"`
/// regardless of type.
pub fn class_for_button(button_type: ButtonType, button_color: ButtonColor) -> &'static str {
    match (button_type, button_color) {
        (ButtonType::Long, ButtonColor::White) => "white long",
        (ButtonType::Long, ButtonColor::Black) => "black long",
        (ButtonType::Short, ButtonColor::White) => "white short",
        (ButtonType::Short, ButtonColor::Black) => "black short",
        _ => "black long",
    }
}

/// Button styling as loaded from configuration.
///
/// Keys are camelCase (`buttonType`, `buttonColor`). Values that are not
/// strings are ignored the same way unknown strings are.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleOptions {
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub button_type: Option<String>,
    #[serde(deserialize_with = "lenient_string", skip_serializing_if = "Option::is_none")]
    pub button_color: Option<String>,
}

impl StyleOptions {
    /// Parse from JSON.
    pub fn from_json(json: &str) -> Result<Self, OptionsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse from TOML.
    pub fn from_toml(toml: &str) -> Result<Self, OptionsError> {
        Ok(toml::from_str(toml)?)
    }

    /// Normalize without a click handler.
    pub fn resolve(&self) -> ResolvedStyle {
        ButtonOptions::from_style(self.clone()).resolve()
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Other(serde::de::IgnoredAny),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => Some(text),
        Raw::Other(_) => None,
    })
}
