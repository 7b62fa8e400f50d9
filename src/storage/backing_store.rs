use std::cell::Cell;
use std::fs;
use std::path::Path;

use bytes::Bytes;
use log::info;

use crate::common::{PageNumber, Result, VmsimError, MEMORY_SIZE, PAGES, PAGE_SIZE};

/// BackingStore is the read-only "disk" that pages are loaded from.
/// It holds the whole image in memory and hands out page-sized slices,
/// counting how many page reads were served.
pub struct BackingStore {
    /// The store contents, exactly MEMORY_SIZE bytes
    data: Bytes,
    /// Path the store was loaded from, if any
    path: Option<String>,
    /// Number of page reads performed
    num_reads: Cell<u32>,
}

impl BackingStore {
    /// Loads a backing store image from the given file.
    /// The file must be exactly PAGES * PAGE_SIZE bytes.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy().to_string();
        let contents = fs::read(&path)?;
        let mut store = Self::from_bytes(contents)?;
        info!("loaded backing store {} ({} pages)", path_str, PAGES);
        store.path = Some(path_str);
        Ok(store)
    }

    /// Wraps an in-memory image as a backing store.
    pub fn from_bytes<B: Into<Bytes>>(data: B) -> Result<Self> {
        let data = data.into();
        if data.len() != MEMORY_SIZE {
            return Err(VmsimError::BackingStoreSize {
                expected: MEMORY_SIZE,
                actual: data.len(),
            });
        }

        Ok(Self {
            data,
            path: None,
            num_reads: Cell::new(0),
        })
    }

    /// Returns the PAGE_SIZE bytes that make up the given page.
    pub fn read_page(&self, page: PageNumber) -> Result<&[u8]> {
        if page.as_usize() >= PAGES {
            return Err(VmsimError::InvalidPageNumber(page));
        }

        let start = page.as_usize() * PAGE_SIZE;
        self.num_reads.set(self.num_reads.get() + 1);
        Ok(&self.data[start..start + PAGE_SIZE])
    }

    /// Returns the number of page reads performed.
    pub fn get_num_reads(&self) -> u32 {
        self.num_reads.get()
    }

    /// Returns the path the store was loaded from.
    pub fn get_path(&self) -> Option<&str> {
        self.path.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn patterned_image() -> Vec<u8> {
        (0..MEMORY_SIZE)
            .map(|i| ((i / PAGE_SIZE * 7 + i % PAGE_SIZE) % 128) as u8)
            .collect()
    }

    #[test]
    fn test_backing_store_read_page() {
        let store = BackingStore::from_bytes(patterned_image()).unwrap();

        let page = store.read_page(PageNumber::new(1)).unwrap();
        assert_eq!(page.len(), PAGE_SIZE);
        assert_eq!(page[0], 7);
        assert_eq!(page[5], 12);

        let last = store.read_page(PageNumber::new(1023)).unwrap();
        assert_eq!(last[0], ((1023 * 7) % 128) as u8);
        assert_eq!(store.get_num_reads(), 2);
    }

    #[test]
    fn test_backing_store_rejects_wrong_size() {
        let result = BackingStore::from_bytes(vec![0u8; MEMORY_SIZE - 1]);
        assert!(matches!(
            result,
            Err(VmsimError::BackingStoreSize { actual, .. }) if actual == MEMORY_SIZE - 1
        ));
    }

    #[test]
    fn test_backing_store_invalid_page() {
        let store = BackingStore::from_bytes(vec![0u8; MEMORY_SIZE]).unwrap();
        assert!(matches!(
            store.read_page(PageNumber::new(PAGES as u32)),
            Err(VmsimError::InvalidPageNumber(_))
        ));
        assert_eq!(store.get_num_reads(), 0);
    }

    #[test]
    fn test_backing_store_open_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(&patterned_image()).unwrap();
        temp_file.flush().unwrap();

        let store = BackingStore::open(temp_file.path()).unwrap();
        assert!(store.get_path().is_some());
        assert_eq!(store.read_page(PageNumber::new(2)).unwrap()[1], 15);
    }

    #[test]
    fn test_backing_store_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = BackingStore::open(dir.path().join("missing.bin"));
        assert!(matches!(result, Err(VmsimError::Io(_))));
    }
}
