//! Vmsim - a paged virtual memory translation simulator
//!
//! Resolves a stream of logical addresses to physical addresses the way a
//! small paging MMU would: consult the TLB, fall back to the page table, and
//! on a page fault load the page from a read-only backing store into main
//! memory, replacing a resident page when memory is full.
//!
//! # Architecture
//!
//! - **Common** (`common`): constants, identifier types, configuration and errors
//! - **Storage** (`storage`): `BackingStore`, the page-addressed disk image
//! - **Memory** (`memory`): `PhysicalMemory`, `PageTable` and `FrameAllocator`
//! - **Replacement** (`replacer`): `FifoReplacer` and `LruReplacer`
//! - **MMU** (`mmu`): `Tlb`, `Translator` and run `Statistics`
//!
//! # Example
//!
//! ```rust,no_run
//! use vmsim::common::{LogicalAddress, ReplacementPolicy, SimConfig};
//! use vmsim::mmu::Translator;
//! use vmsim::storage::BackingStore;
//!
//! let store = BackingStore::open("BACKING_STORE.bin").unwrap();
//! let config = SimConfig::new(ReplacementPolicy::Lru).with_frames(256);
//! let mut translator = Translator::new(config, store).unwrap();
//!
//! let translation = translator.translate(LogicalAddress::new(16916).unwrap()).unwrap();
//! println!("{}", translation);
//! println!("{}", translator.stats());
//! ```

pub mod common;
pub mod memory;
pub mod mmu;
pub mod replacer;
pub mod storage;

// Re-export commonly used types at the crate root
pub use common::{Result, VmsimError};
