//! Integration tests for the frame replacers

use vmsim::common::{FrameId, ReplacementPolicy};
use vmsim::replacer::{new_replacer, FifoReplacer, LruReplacer, Replacer};

#[test]
fn test_fifo_eviction_follows_load_order() {
    let mut replacer = FifoReplacer::new(5);

    for i in [3, 1, 4, 0, 2] {
        replacer.record_load(FrameId::new(i));
    }
    for i in 0..5 {
        replacer.record_access(FrameId::new(i));
    }

    for i in [3, 1, 4, 0, 2] {
        assert_eq!(replacer.evict(), Some(FrameId::new(i)));
    }
    assert_eq!(replacer.evict(), None);
}

#[test]
fn test_lru_eviction_follows_recency() {
    let mut replacer = LruReplacer::new(5);

    for i in 0..5 {
        replacer.record_load(FrameId::new(i));
    }
    // Reference order leaves 2 oldest, then 0, 4, 1, 3
    for i in [0, 4, 1, 3] {
        replacer.record_access(FrameId::new(i));
    }

    for i in [2, 0, 4, 1, 3] {
        assert_eq!(replacer.evict(), Some(FrameId::new(i)));
    }
    assert_eq!(replacer.size(), 0);
}

#[test]
fn test_replacer_cycle_keeps_size() {
    for policy in [ReplacementPolicy::Fifo, ReplacementPolicy::Lru] {
        let mut replacer = new_replacer(policy, 3);
        for i in 0..3 {
            replacer.record_load(FrameId::new(i));
        }

        for _ in 0..10 {
            let victim = replacer.evict().unwrap();
            replacer.record_load(victim);
            assert_eq!(replacer.size(), 3);
        }
    }
}
