use std::fmt;
use std::io::{BufRead, Write};

use log::{debug, info};

use crate::common::{
    FrameId, LogicalAddress, PageNumber, PhysicalAddress, Result, SimConfig, VmsimError,
};
use crate::memory::{FrameAllocator, FrameSource, PageTable, PhysicalMemory};
use crate::storage::BackingStore;

use super::{Statistics, Tlb};

/// How a translation found its frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    /// The TLB held the mapping
    TlbHit,
    /// The TLB missed but the page was resident
    PageTableHit,
    /// The page was loaded from the backing store, possibly replacing
    /// the page that previously held the frame
    PageFault { evicted: Option<PageNumber> },
}

/// The result of translating one logical address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    pub logical: LogicalAddress,
    pub physical: PhysicalAddress,
    /// The byte stored at the physical address
    pub value: i8,
    pub outcome: AccessOutcome,
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Virtual address: {} Physical address: {} Value: {}",
            self.logical, self.physical, self.value
        )
    }
}

/// Translator owns all simulator state for one run: the TLB, the page
/// table, physical memory, the frame allocator and the backing store.
/// Addresses are resolved one at a time, in order.
pub struct Translator {
    config: SimConfig,
    tlb: Tlb,
    page_table: PageTable,
    allocator: FrameAllocator,
    memory: PhysicalMemory,
    backing_store: BackingStore,
    stats: Statistics,
}

impl Translator {
    /// Creates a translator for the given configuration.
    /// Fails before any translation if the configuration is unusable.
    pub fn new(config: SimConfig, backing_store: BackingStore) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            tlb: Tlb::new(config.tlb_size, config.policy),
            page_table: PageTable::new(),
            allocator: FrameAllocator::new(config.frames, config.policy),
            memory: PhysicalMemory::new(config.frames),
            backing_store,
            stats: Statistics::default(),
            config,
        })
    }

    /// Resolves a logical address to a physical one and reads its byte.
    pub fn translate(&mut self, logical: LogicalAddress) -> Result<Translation> {
        let page = logical.page();

        let (frame_id, outcome) = if let Some(frame_id) = self.tlb.lookup(page) {
            (frame_id, AccessOutcome::TlbHit)
        } else {
            let (frame_id, outcome) = match self.page_table.lookup(page) {
                Some(frame_id) => (frame_id, AccessOutcome::PageTableHit),
                None => self.handle_page_fault(page)?,
            };
            self.tlb.insert(page, frame_id);
            (frame_id, outcome)
        };
        self.allocator.record_access(frame_id);

        let physical = PhysicalAddress::compose(frame_id, logical.offset());
        let value = self.memory.read_byte(physical)?;
        self.stats.record(&outcome);

        Ok(Translation {
            logical,
            physical,
            value,
            outcome,
        })
    }

    /// Parses and translates one input line. Blank lines yield None.
    pub fn translate_line(&mut self, line_no: usize, text: &str) -> Result<Option<Translation>> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let logical = parse_address(line_no, trimmed)?;
        self.translate(logical).map(Some)
    }

    /// Translates every line of `input`, writing one result line per
    /// address to `out`. Stops at the first error.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<Statistics> {
        info!(
            "translating with {} replacement, {} frames, {} TLB entries",
            self.config.policy, self.config.frames, self.config.tlb_size
        );

        for (index, line) in input.lines().enumerate() {
            let line = line?;
            if let Some(translation) = self.translate_line(index + 1, &line)? {
                writeln!(out, "{}", translation)?;
            }
        }
        out.flush()?;

        info!(
            "translated {} addresses: {} faults, {} TLB hits, {} evictions",
            self.stats.total_addresses,
            self.stats.page_faults,
            self.stats.tlb_hits,
            self.stats.evictions
        );
        Ok(self.stats)
    }

    /// Loads a page into a frame, evicting a resident page if needed.
    fn handle_page_fault(&mut self, page: PageNumber) -> Result<(FrameId, AccessOutcome)> {
        let source = self.allocator.allocate()?;
        let frame_id = source.frame_id();

        let bytes = self.backing_store.read_page(page)?;
        let previous = self.memory.load_frame(frame_id, page, bytes)?;
        self.allocator.record_load(frame_id);

        let evicted = match source {
            FrameSource::Free(_) => None,
            FrameSource::Evicted(_) => previous,
        };
        if let Some(old_page) = evicted {
            // The old owner must not resolve to the reused frame
            self.page_table.invalidate(old_page);
            self.tlb.invalidate(old_page);
            debug!("page fault on {}: evicted {} from {}", page, old_page, frame_id);
        } else {
            debug!("page fault on {}: loaded into {}", page, frame_id);
        }
        self.page_table.set(page, frame_id)?;

        Ok((frame_id, AccessOutcome::PageFault { evicted }))
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn tlb(&self) -> &Tlb {
        &self.tlb
    }

    pub fn page_table(&self) -> &PageTable {
        &self.page_table
    }

    pub fn memory(&self) -> &PhysicalMemory {
        &self.memory
    }

    pub fn backing_store(&self) -> &BackingStore {
        &self.backing_store
    }
}

/// Parses a decimal logical address. Anything that is not an integer is
/// rejected rather than read as address 0.
pub fn parse_address(line_no: usize, text: &str) -> Result<LogicalAddress> {
    let raw: i64 = text
        .trim()
        .parse()
        .map_err(|_| VmsimError::MalformedAddress {
            line: line_no,
            text: text.to_string(),
        })?;
    LogicalAddress::new(raw)
}
