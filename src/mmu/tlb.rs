use log::debug;

use crate::common::{FrameId, PageNumber, ReplacementPolicy, Timestamp};

/// A cached page-to-frame mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlbEntry {
    pub page: PageNumber,
    pub frame_id: FrameId,
    /// Logical time of the last insert or hit
    pub last_used: Timestamp,
}

/// Translation lookaside buffer
///
/// A small fully-associative cache of page-to-frame mappings searched
/// linearly. Under FIFO the slot to overwrite cycles with the insert
/// count. Under LRU empty slots are filled first, then the entry with the
/// oldest `last_used` is replaced (ties go to the lowest slot).
pub struct Tlb {
    slots: Vec<Option<TlbEntry>>,
    policy: ReplacementPolicy,
    /// Number of inserts performed
    insert_count: u64,
    /// Current timestamp (monotonically increasing)
    current_timestamp: Timestamp,
}

impl Tlb {
    pub fn new(capacity: usize, policy: ReplacementPolicy) -> Self {
        assert!(capacity > 0, "TLB capacity must be non-zero");
        Self {
            slots: vec![None; capacity],
            policy,
            insert_count: 0,
            current_timestamp: 0,
        }
    }

    /// Returns the frame of the first entry for the page, refreshing its
    /// recency on a hit.
    pub fn lookup(&mut self, page: PageNumber) -> Option<FrameId> {
        let now = self.tick();
        self.slots
            .iter_mut()
            .flatten()
            .find(|entry| entry.page == page)
            .map(|entry| {
                entry.last_used = now;
                entry.frame_id
            })
    }

    /// Caches a mapping, replacing an entry per the policy.
    /// Returns the entry that was overwritten, if any.
    pub fn insert(&mut self, page: PageNumber, frame_id: FrameId) -> Option<TlbEntry> {
        let slot = self.victim_slot();
        let entry = TlbEntry {
            page,
            frame_id,
            last_used: self.tick(),
        };
        self.insert_count += 1;

        let replaced = self.slots[slot].replace(entry);
        if let Some(old) = replaced {
            debug!("TLB slot {} replaced {} with {}", slot, old.page, page);
        }
        replaced
    }

    /// Drops any entries for the page. Returns true if one was present.
    pub fn invalidate(&mut self, page: PageNumber) -> bool {
        let mut found = false;
        for slot in self.slots.iter_mut() {
            if matches!(slot, Some(entry) if entry.page == page) {
                *slot = None;
                found = true;
            }
        }
        found
    }

    /// Returns the entry held in a slot.
    pub fn entry(&self, slot: usize) -> Option<&TlbEntry> {
        self.slots.get(slot).and_then(Option::as_ref)
    }

    /// Returns the number of valid entries.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn insert_count(&self) -> u64 {
        self.insert_count
    }

    fn tick(&mut self) -> Timestamp {
        let now = self.current_timestamp;
        self.current_timestamp += 1;
        now
    }

    fn victim_slot(&self) -> usize {
        match self.policy {
            ReplacementPolicy::Fifo => (self.insert_count % self.capacity() as u64) as usize,
            ReplacementPolicy::Lru => {
                if let Some(empty) = self.slots.iter().position(Option::is_none) {
                    return empty;
                }
                let mut victim = 0;
                let mut oldest = Timestamp::MAX;
                for (index, entry) in self.slots.iter().enumerate() {
                    if let Some(entry) = entry {
                        if entry.last_used < oldest {
                            oldest = entry.last_used;
                            victim = index;
                        }
                    }
                }
                victim
            }
        }
    }
}
