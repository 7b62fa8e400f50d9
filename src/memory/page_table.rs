use crate::common::{FrameId, PageNumber, Result, VmsimError, PAGES};

/// PageTable maps every logical page to the frame holding it, if any.
/// One entry per page, indexed directly by page number.
pub struct PageTable {
    entries: Vec<Option<FrameId>>,
}

impl PageTable {
    pub fn new() -> Self {
        Self {
            entries: vec![None; PAGES],
        }
    }

    /// Returns the frame mapped for the page, or None if unmapped.
    pub fn lookup(&self, page: PageNumber) -> Option<FrameId> {
        self.entries.get(page.as_usize()).copied().flatten()
    }

    /// Maps the page to the frame.
    pub fn set(&mut self, page: PageNumber, frame_id: FrameId) -> Result<()> {
        let entry = self
            .entries
            .get_mut(page.as_usize())
            .ok_or(VmsimError::InvalidPageNumber(page))?;
        *entry = Some(frame_id);
        Ok(())
    }

    /// Marks the page unmapped and returns the frame it was mapped to.
    pub fn invalidate(&mut self, page: PageNumber) -> Option<FrameId> {
        self.entries.get_mut(page.as_usize()).and_then(Option::take)
    }

    /// Returns the number of mapped pages.
    pub fn resident_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }
}

impl Default for PageTable {
    fn default() -> Self {
        Self::new()
    }
}
