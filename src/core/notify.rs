//! Change notification
//!
//! Observers are told *that* the grid changed, never *what* changed; they
//! pull whatever state they need afterwards. A monotonically increasing
//! revision lets polling consumers skip redraws when nothing happened.

use std::fmt;
use tracing::trace;

type Listener = Box<dyn FnMut()>;

/// Revision counter plus subscriber callbacks
#[derive(Default)]
pub struct ChangeNotifier {
    revision: u64,
    listeners: Vec<Listener>,
}

impl ChangeNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback invoked after every change
    pub fn subscribe(&mut self, listener: impl FnMut() + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Bump the revision and invoke every listener
    pub fn notify(&mut self) {
        self.revision += 1;
        trace!(revision = self.revision, "grid changed");
        for listener in &mut self.listeners {
            listener();
        }
    }

    /// Number of notifications sent so far
    #[inline]
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }
}

impl fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
