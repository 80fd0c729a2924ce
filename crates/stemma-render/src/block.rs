//! Nested-block document builder.
//!
//! Renderers assemble a tree of [`Block`] values and serialize it once at the
//! end. An indent scope adds one indent unit to everything beneath it; a
//! [`Block::Skip`] renders as nothing, which is how conditional fragments are
//! dropped without the caller branching around every push.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// One output line. An empty string renders as a blank line with no
    /// trailing indentation.
    Line(String),
    /// Children rendered one indent unit deeper.
    Indent(Vec<Block>),
    /// Children spliced in at the current depth.
    Seq(Vec<Block>),
    /// Renders as nothing.
    Skip,
}

impl Block {
    pub fn line(text: impl Into<String>) -> Self {
        Block::Line(text.into())
    }

    pub fn blank() -> Self {
        Block::Line(String::new())
    }

    pub fn indent(children: Vec<Block>) -> Self {
        Block::Indent(children)
    }

    pub fn seq(children: Vec<Block>) -> Self {
        Block::Seq(children)
    }

    /// Evaluates `make` only when `cond` holds; otherwise a skip marker.
    pub fn when(cond: bool, make: impl FnOnce() -> Block) -> Self {
        if cond { make() } else { Block::Skip }
    }
}

impl From<String> for Block {
    fn from(text: String) -> Self {
        Block::Line(text)
    }
}

impl From<&str> for Block {
    fn from(text: &str) -> Self {
        Block::Line(text.to_string())
    }
}

impl From<Vec<Block>> for Block {
    fn from(children: Vec<Block>) -> Self {
        Block::Seq(children)
    }
}

/// Flattens a block tree into indented text, one indent unit per scope.
pub fn serialize(block: &Block, indent_unit: &str) -> String {
    let mut out = String::new();
    write_block(&mut out, block, indent_unit, 0);
    out
}

fn write_block(out: &mut String, block: &Block, indent_unit: &str, depth: usize) {
    match block {
        Block::Skip => {}
        Block::Line(text) => {
            if !text.is_empty() {
                for _ in 0..depth {
                    out.push_str(indent_unit);
                }
                out.push_str(text);
            }
            out.push('\n');
        }
        Block::Indent(children) => {
            for child in children {
                write_block(out, child, indent_unit, depth + 1);
            }
        }
        Block::Seq(children) => {
            for child in children {
                write_block(out, child, indent_unit, depth);
            }
        }
    }
}
