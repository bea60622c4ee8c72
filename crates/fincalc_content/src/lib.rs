//! Storage backends and the build-step link pipeline.

pub mod backends;
pub mod files;
pub mod pipeline;

pub use backends::*;
pub use pipeline::{LinkPipeline, LinkReport};

pub mod prelude {
    pub use super::backends::memory::{MemoryArticles, MemoryCounters};
    pub use super::pipeline::LinkPipeline;
    pub use fincalc_core::{Article, ArticleStore, CounterStore, Result};
}
