//! Single-slot queue for deferred recomputation

/// Pending-recomputation flag.
///
/// Any number of requests made before the next frame collapse into one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecomputeSlot {
    pending: bool,
}

impl RecomputeSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a recomputation as needed. Returns true if the slot was empty.
    pub fn request(&mut self) -> bool {
        !std::mem::replace(&mut self.pending, true)
    }

    /// Consume the pending request, if there is one
    pub fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
