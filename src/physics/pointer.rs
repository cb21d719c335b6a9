/// Latest known pointer position along the dock axis.
///
/// The dock magnifies along a single axis, so one coordinate is enough.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Pointer {
    /// Pointer is outside the dock's hit region (or the window entirely).
    #[default]
    Absent,
    /// Pointer is inside the hit region at this world-space x coordinate.
    At(f32),
}

/// Tracks the most recent pointer event observed before the next tick.
///
/// Last write wins; there is no buffering. Input events and ticks run on the
/// same thread, so no synchronization is needed.
#[derive(Debug, Default)]
pub struct PointerTracker {
    state: Pointer,
}

impl PointerTracker {
    /// Called on every pointer-move inside the dock's hit region.
    pub fn set_position(&mut self, x: f32) {
        self.state = Pointer::At(x);
    }

    /// Called on pointer-leave. Every icon's target falls back to its base
    /// size on the next tick.
    pub fn clear(&mut self) {
        self.state = Pointer::Absent;
    }

    pub fn current(&self) -> Pointer {
        self.state
    }
}
