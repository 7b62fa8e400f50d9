mod statistics;
mod tlb;
mod translator;

pub use statistics::*;
pub use tlb::*;
pub use translator::*;
