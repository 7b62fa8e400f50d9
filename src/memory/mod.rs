mod frame_allocator;
mod page_table;
mod physical_memory;

pub use frame_allocator::*;
pub use page_table::*;
pub use physical_memory::*;
