//! Input event kinds and the interaction classes they drive.
//!
//! Each [`InteractionClass`] is an independent boolean: a listener on each of
//! its trigger events sets the class when the event is the class's "on"
//! event and clears it otherwise. There is no combined state machine.

use std::fmt;

/// Input events the button reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    /// Pointer moved onto the element.
    PointerEnter,
    /// Pointer moved off the element.
    PointerLeave,
    /// Pointer button pressed over the element.
    PointerDown,
    /// Pointer button released over the element.
    PointerUp,
    /// Element gained keyboard focus.
    Focus,
    /// Element lost keyboard focus.
    Blur,
    /// Element was activated.
    Click,
}

impl EventKind {
    /// Every event kind.
    pub const ALL: [EventKind; 7] = [
        EventKind::PointerEnter,
        EventKind::PointerLeave,
        EventKind::PointerDown,
        EventKind::PointerUp,
        EventKind::Focus,
        EventKind::Blur,
        EventKind::Click,
    ];

    /// The DOM event type name the browser delivers for this kind.
    pub fn dom_name(self) -> &'static str {
        match self {
            Self::PointerEnter => "mouseover",
            Self::PointerLeave => "mouseout",
            Self::PointerDown => "mousedown",
            Self::PointerUp => "mouseup",
            Self::Focus => "focus",
            Self::Blur => "blur",
            Self::Click => "click",
        }
    }

    /// Map a DOM event type name back to a kind.
    pub fn from_dom_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.dom_name() == name)
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_name())
    }
}

/// An event delivered to a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DomEvent {
    kind: EventKind,
}

impl DomEvent {
    /// Create an event of the given kind.
    pub fn new(kind: EventKind) -> Self {
        Self { kind }
    }

    /// The event kind.
    pub fn kind(&self) -> EventKind {
        self.kind
    }
}

/// CSS classes that mirror pointer and focus state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionClass {
    /// Pointer is over the button.
    Hover,
    /// Pointer is pressed on the button.
    Active,
    /// Button has keyboard focus.
    Focus,
}

impl InteractionClass {
    /// Every interaction class.
    pub const ALL: [InteractionClass; 3] = [
        InteractionClass::Hover,
        InteractionClass::Active,
        InteractionClass::Focus,
    ];

    /// The CSS class name.
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Hover => "hover",
            Self::Active => "active",
            Self::Focus => "focus",
        }
    }

    /// The event that sets the class.
    pub fn set_on(self) -> EventKind {
        match self {
            Self::Hover => EventKind::PointerEnter,
            Self::Active => EventKind::PointerDown,
            Self::Focus => EventKind::Focus,
        }
    }

    /// Every event that updates the class. Leaving the button while pressed
    /// cancels `active`.
    pub fn triggers(self) -> &'static [EventKind] {
        match self {
            Self::Hover => &[EventKind::PointerEnter, EventKind::PointerLeave],
            Self::Active => &[
                EventKind::PointerDown,
                EventKind::PointerUp,
                EventKind::PointerLeave,
            ],
            Self::Focus => &[EventKind::Focus, EventKind::Blur],
        }
    }

    /// The class state after `kind`, or `None` if `kind` does not affect it.
    pub fn state_after(self, kind: EventKind) -> Option<bool> {
        self.triggers().contains(&kind).then(|| kind == self.set_on())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_names_round_trip() {
        for kind in EventKind::ALL {
            assert_eq!(EventKind::from_dom_name(kind.dom_name()), Some(kind));
        }
        assert_eq!(EventKind::from_dom_name("keydown"), None);
    }

    #[test]
    fn hover_transitions() {
        let hover = InteractionClass::Hover;
        assert_eq!(hover.state_after(EventKind::PointerEnter), Some(true));
        assert_eq!(hover.state_after(EventKind::PointerLeave), Some(false));
        assert_eq!(hover.state_after(EventKind::PointerDown), None);
    }

    #[test]
    fn leaving_cancels_active() {
        let active = InteractionClass::Active;
        assert_eq!(active.state_after(EventKind::PointerDown), Some(true));
        assert_eq!(active.state_after(EventKind::PointerUp), Some(false));
        assert_eq!(active.state_after(EventKind::PointerLeave), Some(false));
        assert_eq!(active.state_after(EventKind::Click), None);
    }

    #[test]
    fn focus_transitions() {
        let focus = InteractionClass::Focus;
        assert_eq!(focus.state_after(EventKind::Focus), Some(true));
        assert_eq!(focus.state_after(EventKind::Blur), Some(false));
        assert_eq!(focus.state_after(EventKind::PointerEnter), None);
    }
}
