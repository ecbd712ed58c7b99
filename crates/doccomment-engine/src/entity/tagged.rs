use crate::markup::Block;

/// A `- Returns:` note. The description is flattened to plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Returns {
    raw: Vec<Block>,
    description: String,
}

impl Returns {
    pub(crate) fn new(description: String, raw: Vec<Block>) -> Self {
        Self { raw, description }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The whole list item's children, tag included.
    pub fn raw(&self) -> &[Block] {
        &self.raw
    }
}

/// A `- Throws:` note. The description is flattened to plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Throws {
    raw: Vec<Block>,
    description: String,
}

impl Throws {
    pub(crate) fn new(description: String, raw: Vec<Block>) -> Self {
        Self { raw, description }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The whole list item's children, tag included.
    pub fn raw(&self) -> &[Block] {
        &self.raw
    }
}
