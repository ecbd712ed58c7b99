//! # Markup Tree
//!
//! An owned, immutable block/inline tree built from pulldown-cmark's event stream.
//!
//! pulldown-cmark hands out a flat sequence of `Start`/`End` events. Extraction
//! needs to ask structural questions instead ("is the first child of this list
//! item a paragraph whose first inline is plain text?"), so the events are folded
//! once into the typed tree defined here.
//!
//! ## Modules
//!
//! - **`builder`**: `TreeBuilder` frame stack that turns events into a [`Document`]
//! - **`format`**: canonical markdown rendering (`format`) and plain text flattening
//!
//! ## Key Invariants
//!
//! - Every list item's inline content lives inside a [`Block::Paragraph`], even in
//!   tight lists where pulldown-cmark emits no paragraph events
//! - Adjacent [`Inline::Text`] runs are merged
//! - [`ListItem::depth`] counts the containers enclosing the item's list; the tree
//!   keeps no parent pointers

pub mod builder;
pub mod format;

pub use builder::parse;

/// A parsed markdown document: the root of the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

/// Block-level nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Vec<Inline>),
    Heading {
        /// 1 through 6
        level: u8,
        children: Vec<Inline>,
    },
    /// Fenced or indented code. Indented blocks carry no info string.
    CodeBlock {
        info: Option<String>,
        code: String,
    },
    HtmlBlock(String),
    BlockQuote(Vec<Block>),
    ThematicBreak,
    Table(Table),
    List(List),
    /// Any other block container the parser produces (footnote definitions,
    /// metadata blocks and so on).
    Custom(Vec<Block>),
}

/// An ordered (`start` is set) or unordered list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct List {
    pub start: Option<u64>,
    /// Tight lists separate items with a single newline when rendered.
    pub tight: bool,
    pub items: Vec<ListItem>,
}

impl List {
    pub fn is_ordered(&self) -> bool {
        self.start.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    pub children: Vec<Block>,
    /// Number of container blocks (list items, block quotes, custom blocks)
    /// enclosing this item's list. Zero means the list is a direct child of the
    /// document.
    pub depth: usize,
}

impl ListItem {
    /// True when the item's list sits directly under the document root.
    pub fn is_top_level(&self) -> bool {
        self.depth == 0
    }

    /// Inline children of the first child, if that child is a paragraph.
    pub fn first_paragraph(&self) -> Option<&[Inline]> {
        match self.children.first() {
            Some(Block::Paragraph(inlines)) => Some(inlines),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    None,
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub alignments: Vec<Alignment>,
    /// Header cells.
    pub head: Vec<Vec<Inline>>,
    /// Body rows, each a list of cells.
    pub rows: Vec<Vec<Vec<Inline>>>,
}

/// Inline-level nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Code(String),
    SoftBreak,
    HardBreak,
    Html(String),
    Emphasis(Vec<Inline>),
    Strong(Vec<Inline>),
    Strikethrough(Vec<Inline>),
    Link {
        destination: String,
        title: String,
        children: Vec<Inline>,
    },
    Image {
        destination: String,
        title: String,
        children: Vec<Inline>,
    },
}

/// Either kind of node. Used for backing node sequences that mix the inline
/// content of a paragraph with whole blocks appended after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Markup {
    Block(Block),
    Inline(Inline),
}

impl From<Block> for Markup {
    fn from(block: Block) -> Self {
        Markup::Block(block)
    }
}

impl From<Inline> for Markup {
    fn from(inline: Inline) -> Self {
        Markup::Inline(inline)
    }
}
