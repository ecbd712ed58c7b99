use crate::markup::Block;

/// The one-sentence summary: the first narrative block of a comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Abstract {
    raw: Block,
}

impl Abstract {
    pub(crate) fn new(raw: Block) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &Block {
        &self.raw
    }

    /// Formatted markdown of the summary block.
    pub fn text(&self) -> String {
        self.raw.format()
    }
}

/// Every narrative block after the abstract, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Description {
    raw: Vec<Block>,
}

impl Description {
    pub(crate) fn new(raw: Vec<Block>) -> Self {
        Self { raw }
    }

    pub fn raw(&self) -> &[Block] {
        &self.raw
    }

    /// Formatted markdown of all blocks, separated by blank lines.
    ///
    /// Leading newlines are stripped: a block that renders with a leading blank
    /// line must not push the whole description down.
    pub fn text(&self) -> String {
        let text = self
            .raw
            .iter()
            .map(Block::format)
            .collect::<Vec<_>>()
            .join("\n\n");
        text.trim_start_matches('\n').to_string()
    }

    /// Append more blocks to the end of the description.
    pub fn append(&mut self, blocks: impl IntoIterator<Item = Block>) {
        self.raw.extend(blocks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::{Inline, parse};
    use pretty_assertions::assert_eq;

    #[test]
    fn abstract_text_is_formatted_block() {
        let doc = parse("Uses `x` **twice**.");
        let summary = Abstract::new(doc.blocks[0].clone());
        assert_eq!(summary.text(), "Uses `x` **twice**.");
    }

    #[test]
    fn description_joins_blocks_with_blank_line() {
        let doc = parse("One.\n\n```\ncode\n```\n\n> quote");
        let description = Description::new(doc.blocks);
        assert_eq!(description.text(), "One.\n\n```\ncode\n```\n\n> quote");
    }

    #[test]
    fn description_strips_leading_newlines() {
        let description = Description::new(vec![
            Block::HtmlBlock(String::new()),
            Block::Paragraph(vec![Inline::Text("Body.".to_string())]),
        ]);
        assert_eq!(description.text(), "Body.");
    }

    #[test]
    fn description_append_extends_raw() {
        let mut description = Description::new(parse("One.").blocks);
        description.append(parse("Two.").blocks);
        assert_eq!(description.raw().len(), 2);
        assert_eq!(description.text(), "One.\n\nTwo.");
    }
}
