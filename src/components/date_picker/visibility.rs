//! Popup open/close state machine
//!
//! Open holds a [`Subscription`] for outside presses and Escape; closing (for
//! any reason) or dropping the controller releases it.

use crate::event::{Event, Key};
use crate::listeners::{ListenerKind, ListenerRegistry, Subscription};

/// Why the popup closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// A click completed the selection
    Completed,
    /// The Done button of a multiple selection
    Done,
    /// Pointer press outside the picker
    OutsidePress,
    /// Escape key
    Escape,
    /// The input was activated again
    Toggle,
    /// The picker was unmounted
    Unmount,
}

/// Open/closed state of a picker popup
#[derive(Debug)]
pub struct PopupVisibility {
    registry: ListenerRegistry,
    subscription: Option<Subscription>,
}

impl PopupVisibility {
    pub fn new(registry: ListenerRegistry) -> Self {
        Self {
            registry,
            subscription: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.subscription.is_some()
    }

    /// Open the popup; returns false if it already was
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        self.subscription = Some(
            self.registry
                .subscribe(&[ListenerKind::OutsidePress, ListenerKind::Escape]),
        );
        tracing::debug!("calendar popup opened");
        true
    }

    /// Close the popup; returns false if it already was
    pub fn close(&mut self, reason: CloseReason) -> bool {
        match self.subscription.take() {
            Some(_released) => {
                tracing::debug!(?reason, "calendar popup closed");
                true
            }
            None => false,
        }
    }

    /// Input activation: closed opens, open closes
    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close(CloseReason::Toggle);
        } else {
            self.open();
        }
    }

    /// Whether an event dismisses the open popup
    ///
    /// `inside` tests whether a pointer position lies within the picker's own
    /// subtree; presses there never dismiss.
    pub fn dismissal(&self, event: &Event, inside: impl Fn(u16, u16) -> bool) -> Option<CloseReason> {
        let subscription = self.subscription.as_ref()?;

        if let Some((col, row)) = event.pointer_press() {
            if subscription.wants(ListenerKind::OutsidePress) && !inside(col, row) {
                return Some(CloseReason::OutsidePress);
            }
            return None;
        }

        match event {
            Event::Key(Key::Esc) if subscription.wants(ListenerKind::Escape) => {
                Some(CloseReason::Escape)
            }
            _ => None,
        }
    }

    pub fn registry(&self) -> &ListenerRegistry {
        &self.registry
    }
}
