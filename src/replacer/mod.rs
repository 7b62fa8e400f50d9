mod fifo_replacer;
mod lru_replacer;

pub use fifo_replacer::*;
pub use lru_replacer::*;

use crate::common::{FrameId, ReplacementPolicy};

/// Chooses which resident frame gives way when physical memory is full.
pub trait Replacer {
    /// Records that a page was just loaded into the frame.
    fn record_load(&mut self, frame_id: FrameId);

    /// Records that the frame was referenced by a translation.
    fn record_access(&mut self, frame_id: FrameId);

    /// Picks a victim frame and stops tracking it.
    /// Returns None if no frame is tracked.
    fn evict(&mut self) -> Option<FrameId>;

    /// Returns the number of frames eligible for eviction.
    fn size(&self) -> usize;
}

/// Builds the replacer for the given policy over `num_frames` frames.
pub fn new_replacer(policy: ReplacementPolicy, num_frames: usize) -> Box<dyn Replacer> {
    match policy {
        ReplacementPolicy::Fifo => Box::new(FifoReplacer::new(num_frames)),
        ReplacementPolicy::Lru => Box::new(LruReplacer::new(num_frames)),
    }
}
