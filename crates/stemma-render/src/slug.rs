//! Tree paths and slug derivation.
//!
//! Every house, family, and person is addressed by its path from the root:
//! map keys for houses and people, declaration indices for families. Distinct
//! tree positions always yield distinct paths, and the slug keeps that
//! property well enough for DOT cluster ids (segment keys in one house never
//! collide after character mapping).

use std::fmt;

/// One step of a tree path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Key(String),
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => f.write_str(key),
            Segment::Index(idx) => write!(f, "{idx}"),
        }
    }
}

impl From<&str> for Segment {
    fn from(key: &str) -> Self {
        Segment::Key(key.to_string())
    }
}

impl From<String> for Segment {
    fn from(key: String) -> Self {
        Segment::Key(key)
    }
}

impl From<usize> for Segment {
    fn from(idx: usize) -> Self {
        Segment::Index(idx)
    }
}

/// Ordered sequence of segments from the root to the current node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreePath {
    segments: Vec<Segment>,
}

impl TreePath {
    pub fn root() -> Self {
        Self::default()
    }

    /// A new path extended with one segment; the receiver is unchanged.
    pub fn child(&self, segment: impl Into<Segment>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self { segments }
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn last(&self) -> Option<&Segment> {
        self.segments.last()
    }
}

impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str("/")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Maps a path to a DOT-safe token: segments joined with `_`, every
/// non-alphanumeric segment character mapped to `_`.
pub fn slugify(path: &TreePath) -> String {
    let mut out = String::new();
    for (i, segment) in path.segments.iter().enumerate() {
        if i > 0 {
            out.push('_');
        }
        match segment {
            Segment::Index(idx) => out.push_str(&idx.to_string()),
            Segment::Key(key) => {
                for ch in key.chars() {
                    out.push(if ch.is_ascii_alphanumeric() { ch } else { '_' });
                }
            }
        }
    }
    out
}
