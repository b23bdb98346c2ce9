use crate::landmarks::{FrameHands, HandSnapshot};

/// How many frames of hands are retained: the current frame plus two before it
pub const HISTORY_DEPTH: usize = 3;

/// Rolling buffer of the hands seen in the last three frames.
///
/// Slots are ordered oldest to newest, `[t-2, t-1, t]`. Frames with no hands
/// still occupy a slot, so `previous()` is always the frame right before
/// `latest()`.
#[derive(Debug, Clone, Default)]
pub struct LandmarkHistory {
    slots: [FrameHands; HISTORY_DEPTH],
}

impl LandmarkHistory {
    pub fn new() -> Self {
        LandmarkHistory::default()
    }

    /// Append the newest frame, dropping the oldest
    pub fn push(&mut self, frame: FrameHands) {
        self.slots.rotate_left(1);
        self.slots[HISTORY_DEPTH - 1] = frame;
    }

    /// Hands of the current frame (t), if any were reported
    pub fn latest(&self) -> Option<&[HandSnapshot]> {
        self.slots[HISTORY_DEPTH - 1].as_deref()
    }

    /// Hands of the frame before the current one (t-1)
    pub fn previous(&self) -> Option<&[HandSnapshot]> {
        self.slots[HISTORY_DEPTH - 2].as_deref()
    }

    /// Hands of the oldest retained frame (t-2)
    pub fn oldest(&self) -> Option<&[HandSnapshot]> {
        self.slots[0].as_deref()
    }

    pub fn slots(&self) -> &[FrameHands; HISTORY_DEPTH] {
        &self.slots
    }

    pub fn clear(&mut self) {
        self.slots = Default::default();
    }
}
