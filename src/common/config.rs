use std::fmt;
use std::str::FromStr;

use super::error::{Result, VmsimError};

/// Number of bits used for the in-page offset
pub const OFFSET_BITS: u32 = 10;

/// Size of a page (and of a physical frame) in bytes
pub const PAGE_SIZE: usize = 1 << OFFSET_BITS;

/// Mask selecting the offset bits of an address
pub const OFFSET_MASK: u32 = (1 << OFFSET_BITS) - 1;

/// Number of logical pages in the address space
pub const PAGES: usize = 1024;

/// Size of the logical address space and of the backing store in bytes
pub const MEMORY_SIZE: usize = PAGES * PAGE_SIZE;

/// Number of entries in the translation lookaside buffer
pub const TLB_SIZE: usize = 16;

/// Replacement discipline used for physical frames and TLB slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReplacementPolicy {
    /// Evict whatever was loaded first
    #[default]
    Fifo,
    /// Evict whatever was referenced least recently
    Lru,
}

impl ReplacementPolicy {
    /// Returns the integer code used on the command line.
    pub fn code(&self) -> u32 {
        match self {
            ReplacementPolicy::Fifo => 0,
            ReplacementPolicy::Lru => 1,
        }
    }
}

impl TryFrom<u32> for ReplacementPolicy {
    type Error = VmsimError;

    fn try_from(code: u32) -> Result<Self> {
        match code {
            0 => Ok(ReplacementPolicy::Fifo),
            1 => Ok(ReplacementPolicy::Lru),
            other => Err(VmsimError::InvalidPolicy(other.to_string())),
        }
    }
}

impl FromStr for ReplacementPolicy {
    type Err = VmsimError;

    fn from_str(s: &str) -> Result<Self> {
        let code: u32 = s
            .trim()
            .parse()
            .map_err(|_| VmsimError::InvalidPolicy(s.to_string()))?;
        Self::try_from(code)
    }
}

impl fmt::Display for ReplacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplacementPolicy::Fifo => write!(f, "FIFO"),
            ReplacementPolicy::Lru => write!(f, "LRU"),
        }
    }
}

/// Settings for a single simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Replacement policy for frames and TLB slots
    pub policy: ReplacementPolicy,
    /// Number of physical frames in main memory
    pub frames: usize,
    /// Number of TLB entries
    pub tlb_size: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            policy: ReplacementPolicy::default(),
            frames: PAGES,
            tlb_size: TLB_SIZE,
        }
    }
}

impl SimConfig {
    /// Creates a configuration with the given policy and default sizes.
    pub fn new(policy: ReplacementPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    /// Overrides the number of physical frames.
    pub fn with_frames(mut self, frames: usize) -> Self {
        self.frames = frames;
        self
    }

    /// Overrides the number of TLB entries.
    pub fn with_tlb_size(mut self, tlb_size: usize) -> Self {
        self.tlb_size = tlb_size;
        self
    }

    /// Checks that the sizes are usable.
    pub fn validate(&self) -> Result<()> {
        if self.frames == 0 || self.frames > PAGES {
            return Err(VmsimError::InvalidConfig(format!(
                "frame count must be in 1..={}, got {}",
                PAGES, self.frames
            )));
        }
        if self.tlb_size == 0 {
            return Err(VmsimError::InvalidConfig(
                "TLB must have at least one entry".to_string(),
            ));
        }
        Ok(())
    }

    /// Size of simulated main memory in bytes.
    pub fn memory_size(&self) -> usize {
        self.frames * PAGE_SIZE
    }
}
