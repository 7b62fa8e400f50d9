use std::fmt;

use super::config::{MEMORY_SIZE, OFFSET_BITS, OFFSET_MASK};
use super::error::{Result, VmsimError};

/// Logical page number - index into the page table and the backing store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageNumber(pub u32);

impl PageNumber {
    pub fn new(page: u32) -> Self {
        Self(page)
    }

    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page({})", self.0)
    }
}

/// Frame identifier type - identifies a page-sized slot in physical memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub u32);

impl FrameId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FrameId({})", self.0)
    }
}

/// Address as seen by the simulated program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LogicalAddress(u32);

impl LogicalAddress {
    /// Creates a logical address, rejecting values outside the address space.
    pub fn new(raw: i64) -> Result<Self> {
        if raw < 0 || raw >= MEMORY_SIZE as i64 {
            return Err(VmsimError::AddressOutOfRange(raw));
        }
        Ok(Self(raw as u32))
    }

    pub fn page(&self) -> PageNumber {
        PageNumber(self.0 >> OFFSET_BITS)
    }

    pub fn offset(&self) -> u32 {
        self.0 & OFFSET_MASK
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for LogicalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Address into simulated main memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PhysicalAddress(u32);

impl PhysicalAddress {
    /// Combines a frame and an in-page offset.
    pub fn compose(frame: FrameId, offset: u32) -> Self {
        debug_assert!(offset <= OFFSET_MASK);
        Self((frame.as_u32() << OFFSET_BITS) | offset)
    }

    pub fn frame(&self) -> FrameId {
        FrameId(self.0 >> OFFSET_BITS)
    }

    pub fn as_usize(&self) -> usize {
        self.0 as usize
    }

    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PhysicalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Logical clock value for recency tracking
pub type Timestamp = u64;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_address_split() {
        let addr = LogicalAddress::new(1024).unwrap();
        assert_eq!(addr.page(), PageNumber::new(1));
        assert_eq!(addr.offset(), 0);

        let addr = LogicalAddress::new(16916).unwrap();
        assert_eq!(addr.page(), PageNumber::new(16));
        assert_eq!(addr.offset(), 532);

        let addr = LogicalAddress::new(MEMORY_SIZE as i64 - 1).unwrap();
        assert_eq!(addr.page(), PageNumber::new(1023));
        assert_eq!(addr.offset(), 1023);
    }

    #[test]
    fn test_logical_address_range() {
        assert!(LogicalAddress::new(0).is_ok());
        assert!(matches!(
            LogicalAddress::new(-1),
            Err(VmsimError::AddressOutOfRange(-1))
        ));
        assert!(LogicalAddress::new(MEMORY_SIZE as i64).is_err());
    }

    #[test]
    fn test_physical_address_compose() {
        let phys = PhysicalAddress::compose(FrameId::new(3), 17);
        assert_eq!(phys.as_u32(), 3 * 1024 + 17);
        assert_eq!(phys.frame(), FrameId::new(3));
        assert_eq!(phys.to_string(), "3089");
    }
}
