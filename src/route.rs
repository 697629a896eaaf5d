//! Shared wheel-event route
//!
//! A top-level window has exactly one wheel route. Whichever frame most
//! recently received a pointer-enter holds it and receives every wheel event,
//! wherever the pointer is. Frames claim and release the route only from their
//! enter/leave handlers, on the UI thread.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_FRAME_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a scrollable frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(u64);

impl FrameId {
    pub(crate) fn next() -> Self {
        Self(NEXT_FRAME_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

/// Cloneable handle to the wheel route of one top-level window
///
/// All clones observe the same holder. `Rc` keeps the handle on the thread
/// that created it.
#[derive(Debug, Clone, Default)]
pub struct WheelRoute {
    holder: Rc<Cell<Option<FrameId>>>,
}

impl WheelRoute {
    pub fn new() -> Self {
        Self::default()
    }

    /// Route wheel events to `id`, replacing any previous holder.
    ///
    /// Returns the previous holder.
    pub fn bind(&self, id: FrameId) -> Option<FrameId> {
        self.holder.replace(Some(id))
    }

    /// Clear the route regardless of who holds it.
    ///
    /// Returns the previous holder.
    pub fn unbind(&self) -> Option<FrameId> {
        self.holder.take()
    }

    pub fn holder(&self) -> Option<FrameId> {
        self.holder.get()
    }

    pub fn is_held_by(&self, id: FrameId) -> bool {
        self.holder.get() == Some(id)
    }

    /// Whether two handles share the same underlying route
    pub fn same_route(&self, other: &WheelRoute) -> bool {
        Rc::ptr_eq(&self.holder, &other.holder)
    }
}
