//! Tracing integration for paybutton.
//!
//! Every crate in the workspace logs through the `tracing` facade. Nothing is
//! printed unless the host application installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("paybutton=debug")
//!     .init();
//! ```

/// Span names used for instrumented operations.
pub mod span_names {
    /// Button construction span.
    pub const BUILD: &str = "paybutton::build";
    /// Stylesheet injection span.
    pub const INJECT: &str = "paybutton::inject";
    /// Event dispatch span.
    pub const DISPATCH: &str = "paybutton::dispatch";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Listener signal target.
    pub const SIGNAL: &str = "paybutton_core::signal";
    /// CSS parsing target.
    pub const PARSER: &str = "paybutton_style::parser";
    /// Stylesheet injection target.
    pub const INJECT: &str = "paybutton_style::inject";
    /// Button construction target.
    pub const BUTTON: &str = "paybutton::button";
    /// Locale resolution target.
    pub const LOCALE: &str = "paybutton::locale";
    /// Element backend target.
    pub const DOM: &str = "paybutton::dom";
}
