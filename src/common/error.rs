use thiserror::Error;

use super::types::{FrameId, PageNumber};

/// Simulator error types
#[derive(Error, Debug)]
pub enum VmsimError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed address on line {line}: {text:?}")]
    MalformedAddress { line: usize, text: String },

    #[error("Address {0} is outside the logical address space")]
    AddressOutOfRange(i64),

    #[error("Invalid page replacement policy: {0} (expected 0 for FIFO or 1 for LRU)")]
    InvalidPolicy(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Backing store has {actual} bytes, expected {expected}")]
    BackingStoreSize { expected: usize, actual: usize },

    #[error("Invalid page number: {0}")]
    InvalidPageNumber(PageNumber),

    #[error("Invalid frame ID: {0}")]
    InvalidFrameId(FrameId),

    #[error("Physical memory is full, no evictable frames available")]
    NoEvictableFrame,
}

pub type Result<T> = std::result::Result<T, VmsimError>;
