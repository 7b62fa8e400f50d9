use std::collections::VecDeque;

use crate::common::FrameId;

use super::Replacer;

/// FIFO Replacement Policy
///
/// Frames are evicted in the order their current page was loaded.
/// References after the load do not change the order.
pub struct FifoReplacer {
    /// Frames in load order (oldest at front)
    queue: VecDeque<FrameId>,
    /// Maximum number of frames the replacer can track
    max_frames: usize,
}

impl FifoReplacer {
    pub fn new(max_frames: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(max_frames),
            max_frames,
        }
    }
}

impl Replacer for FifoReplacer {
    fn record_load(&mut self, frame_id: FrameId) {
        if frame_id.as_usize() >= self.max_frames {
            return;
        }
        // A reloaded frame goes to the back
        self.queue.retain(|&f| f != frame_id);
        self.queue.push_back(frame_id);
    }

    fn record_access(&mut self, _frame_id: FrameId) {}

    fn evict(&mut self) -> Option<FrameId> {
        self.queue.pop_front()
    }

    fn size(&self) -> usize {
        self.queue.len()
    }
}
