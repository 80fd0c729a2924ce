#![forbid(unsafe_code)]

//! Graphviz DOT renderer for stemma genealogy trees (headless).
//!
//! Design goals:
//! - deterministic output: same tree in, byte-identical DOT out
//! - structure over strings: the document is a nested block tree until the
//!   final serialization pass
//! - fail-soft: rendering is total; the normalizer is the only fallible
//!   boundary

pub mod block;
pub mod counter;
pub mod defaults;
pub mod escape;
pub mod graph;
pub mod label;
pub mod slug;
pub mod style;

pub use block::{Block, serialize};
pub use graph::{RenderContext, render, render_with};
pub use slug::{Segment, TreePath, slugify};
pub use style::{AttrValue, Attrs, Stylesheet};
