use crate::markup::{Block, Markup};

/// A named parameter and its formatted description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    raw: Vec<Markup>,
    name: String,
    description: String,
}

impl Parameter {
    pub(crate) fn new(name: String, description: String, raw: Vec<Markup>) -> Self {
        Self {
            raw,
            name,
            description,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Formatted markdown, inline markup preserved.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn raw(&self) -> &[Markup] {
        &self.raw
    }

    /// Append continuation blocks (extra paragraphs, code blocks, ...) found
    /// under the parameter's list item.
    ///
    /// The rendered blocks are joined to each other with a single space and
    /// concatenated directly onto the existing description.
    pub fn append_description(&mut self, appendix: Vec<Block>) {
        let rendered = appendix
            .iter()
            .map(Block::format)
            .collect::<Vec<_>>()
            .join(" ");
        self.description.push_str(&rendered);
        self.raw.extend(appendix.into_iter().map(Markup::Block));
    }
}
