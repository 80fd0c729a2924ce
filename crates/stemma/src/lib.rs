#![forbid(unsafe_code)]

//! `stemma` turns nested genealogy trees (houses, families, people) into
//! Graphviz DOT documents, headless.
//!
//! # Features
//!
//! - `render`: enable DOT rendering (`stemma::render`)
//!
//! ## Example
//!
//! ```
//! let doc = stemma::normalize(serde_json::json!({
//!     "people": { "JeanDupont": {}, "MarieDupont": {} },
//!     "families": [ { "parents": ["JeanDupont"], "children": ["MarieDupont"] } ]
//! }))?;
//!
//! let dot = stemma::render::render(&doc);
//! assert!(dot.starts_with("digraph G {"));
//! # Ok::<(), stemma::Error>(())
//! ```

pub use stemma_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use stemma_render::block::{Block, serialize};
    pub use stemma_render::style::{AttrValue, Attrs, Stylesheet};
    pub use stemma_render::{RenderContext, render, render_with};
}
