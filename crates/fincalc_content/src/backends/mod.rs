pub mod memory;

pub use memory::{MemoryArticles, MemoryCounters};
