//! Synchronous delivery of region events to registered handlers.

use std::fmt;

use crate::event::{RegionEvent, RegionEventKind};

/// Callback invoked for a region event, on the caller's own thread.
pub type RegionEventHandler = Box<dyn FnMut(&RegionEvent) + Send>;

/// Holds at most one handler per [`RegionEventKind`].
///
/// Registering a handler replaces any previous one for that kind. Events
/// without a handler are dropped silently.
#[derive(Default)]
pub struct Dispatcher {
    on_entered: Option<RegionEventHandler>,
    on_left: Option<RegionEventHandler>,
}

impl Dispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_on_entered(&mut self, handler: impl FnMut(&RegionEvent) + Send + 'static) {
        self.on_entered = Some(Box::new(handler));
    }

    pub fn set_on_left(&mut self, handler: impl FnMut(&RegionEvent) + Send + 'static) {
        self.on_left = Some(Box::new(handler));
    }

    pub fn clear_on_entered(&mut self) {
        self.on_entered = None;
    }

    pub fn clear_on_left(&mut self) {
        self.on_left = None;
    }

    #[must_use]
    pub fn has_handler(&self, kind: RegionEventKind) -> bool {
        match kind {
            RegionEventKind::Entered => self.on_entered.is_some(),
            RegionEventKind::Left => self.on_left.is_some(),
        }
    }

    /// Run the handler registered for `event.kind`, if any.
    ///
    /// Returns `true` when a handler ran.
    pub fn dispatch(&mut self, event: &RegionEvent) -> bool {
        let slot = match event.kind {
            RegionEventKind::Entered => &mut self.on_entered,
            RegionEventKind::Left => &mut self.on_left,
        };
        match slot {
            Some(handler) => {
                handler(event);
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("on_entered", &self.on_entered.is_some())
            .field("on_left", &self.on_left.is_some())
            .finish()
    }
}
