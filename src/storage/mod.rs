mod backing_store;

pub use backing_store::*;
