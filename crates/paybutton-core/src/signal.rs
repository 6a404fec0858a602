//! Single-threaded signal/slot registry.
//!
//! Element backends keep one [`Signal`] per event kind. Connected slots run
//! synchronously, on the emitting thread, in the order they were connected.
//! Signals are `!Send`; element handles and click callbacks stay on the
//! host's UI thread.
//!
//! # Example
//!
//! ```
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! use paybutton_core::Signal;
//!
//! let hits = Rc::new(Cell::new(0));
//! let signal = Signal::<()>::new();
//!
//! let counter = hits.clone();
//! signal.connect(move |_| counter.set(counter.get() + 1));
//!
//! signal.emit(&());
//! signal.emit(&());
//! assert_eq!(hits.get(), 2);
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::logging::targets;

type Slot<Args> = Rc<dyn Fn(&Args)>;

/// An ordered list of listener slots for one event.
pub struct Signal<Args> {
    slots: RefCell<Vec<Slot<Args>>>,
}

impl<Args> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> Signal<Args> {
    /// Create an empty signal.
    pub fn new() -> Self {
        Self {
            slots: RefCell::new(Vec::new()),
        }
    }

    /// Append a slot. It runs after every slot connected before it.
    ///
    /// Returns the number of connected slots.
    pub fn connect<F>(&self, slot: F) -> usize
    where
        F: Fn(&Args) + 'static,
    {
        let mut slots = self.slots.borrow_mut();
        slots.push(Rc::new(slot));
        slots.len()
    }

    /// Number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.slots.borrow().len()
    }

    /// Emit the signal, invoking all connected slots in connection order.
    ///
    /// Slots may connect other slots while running; those run from the next
    /// emission.
    pub fn emit(&self, args: &Args) {
        let slots: Vec<Slot<Args>> = self.slots.borrow().clone();
        tracing::trace!(target: targets::SIGNAL, connection_count = slots.len(), "emitting signal");

        for slot in slots {
            slot(args);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn slots_run_in_connection_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let signal = Signal::<&'static str>::new();

        for tag in ["a", "b", "c"] {
            let log = log.clone();
            signal.connect(move |arg| log.borrow_mut().push(format!("{tag}:{arg}")));
        }

        signal.emit(&"x");
        assert_eq!(*log.borrow(), vec!["a:x", "b:x", "c:x"]);
    }

    #[test]
    fn connect_reports_count() {
        let signal = Signal::<i32>::new();
        assert_eq!(signal.connect(|_| {}), 1);
        assert_eq!(signal.connect(|_| {}), 2);
        assert_eq!(signal.connection_count(), 2);
    }

    #[test]
    fn slot_may_connect_during_emit() {
        let hits = Rc::new(Cell::new(0));
        let signal = Rc::new(Signal::<()>::new());
        let inner = signal.clone();
        let counter = hits.clone();
        signal.connect(move |_| {
            let counter = counter.clone();
            inner.connect(move |_| counter.set(counter.get() + 1));
        });

        signal.emit(&());
        assert_eq!(hits.get(), 0);
        assert_eq!(signal.connection_count(), 2);

        signal.emit(&());
        assert_eq!(hits.get(), 1);
    }
}
