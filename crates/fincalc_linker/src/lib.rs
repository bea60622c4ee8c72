//! Keyword auto-linking for article content.
//!
//! Rewrites whole-word keyword occurrences in HTML into internal
//! links without touching markup: the input is tokenized into tag
//! and text runs, and only text runs outside existing anchors are
//! ever rewritten. Because linked text ends up inside an anchor,
//! running the linker over its own output is a no-op.

pub mod linker;
pub mod tokenizer;

pub use linker::{AutoLinker, LinkMode, LinkTable};
pub use tokenizer::{tokenize, Token};

pub mod prelude {
    pub use super::linker::{AutoLinker, LinkMode, LinkTable};
    pub use fincalc_core::{InternalLink, Result};
}
