//! Core plumbing shared by the paybutton crates.
//!
//! - **Signals**: single-threaded listener registries used by element backends
//! - **Errors**: [`DomError`], the failure type of host element bindings
//! - **Logging**: `tracing` target and span names for filtering
//!
//! # Signal Example
//!
//! ```
//! use paybutton_core::Signal;
//!
//! let clicked = Signal::<u32>::new();
//! clicked.connect(|count| println!("clicked {count} times"));
//!
//! clicked.emit(&1);
//! assert_eq!(clicked.connection_count(), 1);
//! ```

mod error;
pub mod logging;
pub mod signal;

pub use error::DomError;
pub use signal::Signal;
