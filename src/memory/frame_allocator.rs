use log::debug;

use crate::common::{FrameId, ReplacementPolicy, Result, VmsimError};
use crate::replacer::{new_replacer, Replacer};

/// How a frame was obtained for a faulting page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameSource {
    /// A frame that had never been used
    Free(FrameId),
    /// A resident frame chosen by the replacement policy
    Evicted(FrameId),
}

impl FrameSource {
    pub fn frame_id(&self) -> FrameId {
        match *self {
            FrameSource::Free(frame_id) | FrameSource::Evicted(frame_id) => frame_id,
        }
    }
}

/// FrameAllocator hands out physical frames to faulting pages.
/// Frames are first allocated in ascending order; once every frame has been
/// used, the replacement policy picks one to reuse.
pub struct FrameAllocator {
    /// Number of frames in physical memory
    num_frames: usize,
    /// Next never-used frame
    next_free: usize,
    /// Policy deciding which resident frame to reuse
    replacer: Box<dyn Replacer>,
    /// Policy the replacer was built for
    policy: ReplacementPolicy,
}

impl FrameAllocator {
    pub fn new(num_frames: usize, policy: ReplacementPolicy) -> Self {
        Self {
            num_frames,
            next_free: 0,
            replacer: new_replacer(policy, num_frames),
            policy,
        }
    }

    /// Obtains a frame for a new page, evicting one if memory is full.
    /// The caller must load the page and then call `record_load`.
    pub fn allocate(&mut self) -> Result<FrameSource> {
        if self.next_free < self.num_frames {
            let frame_id = FrameId::new(self.next_free as u32);
            self.next_free += 1;
            return Ok(FrameSource::Free(frame_id));
        }

        let frame_id = self.replacer.evict().ok_or(VmsimError::NoEvictableFrame)?;
        debug!("{} replacement chose {}", self.policy, frame_id);
        Ok(FrameSource::Evicted(frame_id))
    }

    /// Records that a page was loaded into the frame.
    pub fn record_load(&mut self, frame_id: FrameId) {
        self.replacer.record_load(frame_id);
    }

    /// Records that a translation referenced the frame.
    pub fn record_access(&mut self, frame_id: FrameId) {
        self.replacer.record_access(frame_id);
    }

    /// Returns the number of frames never handed out.
    pub fn free_frame_count(&self) -> usize {
        self.num_frames - self.next_free
    }

    pub fn num_frames(&self) -> usize {
        self.num_frames
    }

    pub fn policy(&self) -> ReplacementPolicy {
        self.policy
    }
}
