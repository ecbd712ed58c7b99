//! # Extraction
//!
//! Walks the top-level blocks of a comment once and sorts them into narrative
//! notes and tagged list items.
//!
//! ## Modules
//!
//! - **`tag`**: [`DocumentationTag`] and `ListItem::match_tag`, the prefix matcher
//! - **`split`**: `name: description` splitting for parameters
//! - **`list_item`**: the per-item extractors (returns, throws, parameter outline,
//!   standalone parameter, field extension)
//!
//! ## Classification
//!
//! Narrative blocks (paragraphs, headings, code, quotes, tables, rules, HTML,
//! custom blocks) become notes unless they render empty. Items of top-level
//! lists are tried against the extractors in a fixed order:
//!
//! 1. Returns
//! 2. Throws
//! 3. Parameter outline
//! 4. Standalone parameter
//! 5. Field extension
//!
//! The first match wins. Items matching none of them are dropped, and list
//! items nested deeper are only reachable through a parameter outline.

pub mod list_item;
pub mod split;
pub mod tag;

pub use split::{extract_parameter, split_name_and_content};
pub use tag::DocumentationTag;

use crate::entity::{Abstract, Description, FieldExtension, Parameter, Returns, Throws};
use crate::markup::{Block, ListItem};

/// Accumulated state of a single pass over a comment's blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    notes: Vec<Block>,
    pub parameters: Vec<Parameter>,
    pub returns: Vec<Returns>,
    pub throws: Vec<Throws>,
    pub field_extensions: Vec<FieldExtension>,
}

impl Extraction {
    /// Fold over top-level blocks in document order.
    pub fn from_blocks(blocks: &[Block]) -> Self {
        blocks.iter().fold(Self::default(), Self::visit)
    }

    /// Classify one top-level block.
    pub fn visit(mut self, block: &Block) -> Self {
        match block {
            Block::Paragraph(_)
            | Block::Heading { .. }
            | Block::Custom(_)
            | Block::HtmlBlock(_)
            | Block::CodeBlock { .. }
            | Block::BlockQuote(_)
            | Block::Table(_)
            | Block::ThematicBreak => self.push_note(block),
            Block::List(list) => {
                for item in &list.items {
                    self.visit_list_item(item);
                }
            }
        }
        self
    }

    /// Narrative blocks in document order.
    pub fn notes(&self) -> &[Block] {
        &self.notes
    }

    /// The first note.
    pub fn abstract_note(&self) -> Option<Abstract> {
        self.notes.first().cloned().map(Abstract::new)
    }

    /// Every note after the first, or `None` when there are none.
    pub fn description(&self) -> Option<Description> {
        match self.notes.get(1..) {
            Some(rest) if !rest.is_empty() => Some(Description::new(rest.to_vec())),
            _ => None,
        }
    }

    fn push_note(&mut self, block: &Block) {
        if block.format().is_empty() {
            log::trace!("skipping empty block {block:?}");
            return;
        }
        self.notes.push(block.clone());
    }

    fn visit_list_item(&mut self, item: &ListItem) {
        if !item.is_top_level() {
            return;
        }

        if let Some(returns) = item.extract_return_description() {
            self.returns.push(returns);
        } else if let Some(throws) = item.extract_throws_description() {
            self.throws.push(throws);
        } else if let Some(parameters) = item.extract_parameter_outline() {
            self.parameters.extend(parameters);
        } else if let Some(parameter) = item.extract_standalone_parameter() {
            self.parameters.push(parameter);
        } else if let Some(field_extension) = item.extract_field_extension() {
            self.field_extensions.push(field_extension);
        } else {
            log::debug!(
                "dropping unrecognised list item: {:?}",
                item.children.first().map(Block::format)
            );
        }
    }
}
