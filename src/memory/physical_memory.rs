use crate::common::{FrameId, PageNumber, PhysicalAddress, Result, VmsimError, PAGE_SIZE};

/// PhysicalMemory is the simulated main memory: a fixed number of
/// page-sized frames plus a record of which logical page each frame holds.
pub struct PhysicalMemory {
    /// Frame contents, frame N at bytes [N * PAGE_SIZE, (N + 1) * PAGE_SIZE)
    data: Box<[u8]>,
    /// The logical page loaded into each frame (None if never loaded)
    owners: Vec<Option<PageNumber>>,
}

impl PhysicalMemory {
    /// Creates zero-filled memory with the given number of frames.
    pub fn new(num_frames: usize) -> Self {
        Self {
            data: vec![0u8; num_frames * PAGE_SIZE].into_boxed_slice(),
            owners: vec![None; num_frames],
        }
    }

    /// Returns the number of frames.
    pub fn num_frames(&self) -> usize {
        self.owners.len()
    }

    /// Returns the size of memory in bytes.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Copies a page's bytes into a frame and records the new owner.
    /// Returns the page that previously occupied the frame.
    pub fn load_frame(
        &mut self,
        frame_id: FrameId,
        page: PageNumber,
        bytes: &[u8],
    ) -> Result<Option<PageNumber>> {
        assert_eq!(bytes.len(), PAGE_SIZE, "Page data must be PAGE_SIZE bytes");

        let range = self.frame_range(frame_id)?;
        self.data[range].copy_from_slice(bytes);
        Ok(self.owners[frame_id.as_usize()].replace(page))
    }

    /// Returns the logical page currently held by a frame.
    pub fn frame_owner(&self, frame_id: FrameId) -> Option<PageNumber> {
        self.owners.get(frame_id.as_usize()).copied().flatten()
    }

    /// Returns the bytes of a frame.
    pub fn frame_data(&self, frame_id: FrameId) -> Result<&[u8]> {
        let range = self.frame_range(frame_id)?;
        Ok(&self.data[range])
    }

    /// Reads the signed byte stored at a physical address.
    pub fn read_byte(&self, address: PhysicalAddress) -> Result<i8> {
        self.data
            .get(address.as_usize())
            .map(|&b| b as i8)
            .ok_or(VmsimError::InvalidFrameId(address.frame()))
    }

    fn frame_range(&self, frame_id: FrameId) -> Result<std::ops::Range<usize>> {
        if frame_id.as_usize() >= self.num_frames() {
            return Err(VmsimError::InvalidFrameId(frame_id));
        }
        let start = frame_id.as_usize() * PAGE_SIZE;
        Ok(start..start + PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_physical_memory_new() {
        let memory = PhysicalMemory::new(4);
        assert_eq!(memory.num_frames(), 4);
        assert_eq!(memory.size(), 4 * PAGE_SIZE);
        assert_eq!(memory.frame_owner(FrameId::new(0)), None);
    }

    #[test]
    fn test_physical_memory_load_and_read() {
        let mut memory = PhysicalMemory::new(4);

        let mut page = [0u8; PAGE_SIZE];
        page[0] = 42;
        page[10] = 0xFF;

        let previous = memory
            .load_frame(FrameId::new(2), PageNumber::new(9), &page)
            .unwrap();
        assert_eq!(previous, None);
        assert_eq!(memory.frame_owner(FrameId::new(2)), Some(PageNumber::new(9)));

        let base = PhysicalAddress::compose(FrameId::new(2), 0);
        assert_eq!(memory.read_byte(base).unwrap(), 42);
        let signed = PhysicalAddress::compose(FrameId::new(2), 10);
        assert_eq!(memory.read_byte(signed).unwrap(), -1);
    }

    #[test]
    fn test_physical_memory_reload_returns_previous_owner() {
        let mut memory = PhysicalMemory::new(1);
        let page = [1u8; PAGE_SIZE];

        memory.load_frame(FrameId::new(0), PageNumber::new(3), &page).unwrap();
        let previous = memory
            .load_frame(FrameId::new(0), PageNumber::new(4), &[2u8; PAGE_SIZE])
            .unwrap();

        assert_eq!(previous, Some(PageNumber::new(3)));
        assert_eq!(memory.frame_data(FrameId::new(0)).unwrap()[0], 2);
    }

    #[test]
    fn test_physical_memory_invalid_frame() {
        let mut memory = PhysicalMemory::new(2);
        let result = memory.load_frame(FrameId::new(2), PageNumber::new(0), &[0u8; PAGE_SIZE]);
        assert!(matches!(result, Err(VmsimError::InvalidFrameId(_))));
        assert!(memory
            .read_byte(PhysicalAddress::compose(FrameId::new(2), 0))
            .is_err());
    }
}
