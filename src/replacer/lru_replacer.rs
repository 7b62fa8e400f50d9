use crate::common::{FrameId, Timestamp};

use super::Replacer;

/// LRU Replacement Policy
///
/// Every load or reference stamps the frame with the current logical time.
/// The victim is the tracked frame with the oldest stamp; ties go to the
/// lowest frame id.
pub struct LruReplacer {
    /// Last reference time per frame, None if the frame is not tracked
    last_access: Vec<Option<Timestamp>>,
    /// Current timestamp (monotonically increasing)
    current_timestamp: Timestamp,
    /// Number of tracked frames
    num_tracked: usize,
}

impl LruReplacer {
    pub fn new(max_frames: usize) -> Self {
        Self {
            last_access: vec![None; max_frames],
            current_timestamp: 0,
            num_tracked: 0,
        }
    }

    fn touch(&mut self, frame_id: FrameId) {
        let Some(slot) = self.last_access.get_mut(frame_id.as_usize()) else {
            return;
        };
        if slot.is_none() {
            self.num_tracked += 1;
        }
        *slot = Some(self.current_timestamp);
        self.current_timestamp += 1;
    }

    /// Returns the last reference time recorded for a frame.
    pub fn last_access(&self, frame_id: FrameId) -> Option<Timestamp> {
        self.last_access.get(frame_id.as_usize()).copied().flatten()
    }
}

impl Replacer for LruReplacer {
    fn record_load(&mut self, frame_id: FrameId) {
        self.touch(frame_id);
    }

    fn record_access(&mut self, frame_id: FrameId) {
        // Untracked frames only enter through a load
        if self.last_access(frame_id).is_some() {
            self.touch(frame_id);
        }
    }

    fn evict(&mut self) -> Option<FrameId> {
        let mut victim: Option<(usize, Timestamp)> = None;

        for (index, stamp) in self.last_access.iter().enumerate() {
            if let Some(ts) = *stamp {
                match victim {
                    Some((_, best)) if best <= ts => {}
                    _ => victim = Some((index, ts)),
                }
            }
        }

        let (index, _) = victim?;
        self.last_access[index] = None;
        self.num_tracked -= 1;
        Some(FrameId::new(index as u32))
    }

    fn size(&self) -> usize {
        self.num_tracked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lru_replacer_evict_empty() {
        let mut replacer = LruReplacer::new(4);
        assert_eq!(replacer.evict(), None);
    }

    #[test]
    fn test_lru_replacer_least_recent() {
        let mut replacer = LruReplacer::new(4);
        replacer.record_load(FrameId::new(0));
        replacer.record_load(FrameId::new(1));
        replacer.record_load(FrameId::new(2));

        // Frame 0 becomes most recent
        replacer.record_access(FrameId::new(0));

        assert_eq!(replacer.size(), 3);
        assert_eq!(replacer.evict(), Some(FrameId::new(1)));
        assert_eq!(replacer.evict(), Some(FrameId::new(2)));
        assert_eq!(replacer.evict(), Some(FrameId::new(0)));
        assert_eq!(replacer.size(), 0);
    }

    #[test]
    fn test_lru_replacer_access_untracked_is_ignored() {
        let mut replacer = LruReplacer::new(4);
        replacer.record_access(FrameId::new(3));
        assert_eq!(replacer.size(), 0);
        assert_eq!(replacer.last_access(FrameId::new(3)), None);
    }

    #[test]
    fn test_lru_replacer_timestamps_increase() {
        let mut replacer = LruReplacer::new(2);
        replacer.record_load(FrameId::new(1));
        replacer.record_load(FrameId::new(0));
        assert!(replacer.last_access(FrameId::new(0)) > replacer.last_access(FrameId::new(1)));

        replacer.record_access(FrameId::new(1));
        assert!(replacer.last_access(FrameId::new(1)) > replacer.last_access(FrameId::new(0)));
    }
}
