use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag};

use super::{Alignment, Block, Document, Inline, List, ListItem, Table};

/// Parse markdown into a [`Document`] tree.
///
/// GFM tables and strikethrough are enabled; everything else follows CommonMark.
/// Parsing never fails: any input produces some tree.
pub fn parse(text: &str) -> Document {
    let mut builder = TreeBuilder::new();
    for event in Parser::new_ext(text, Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH) {
        builder.process_event(event);
    }
    builder.finish()
}

/// A node under construction.
///
/// Every `Start` event pushes a frame and every `End` event pops one, so the
/// stack mirrors the open tags. Implicit paragraphs are the exception: they are
/// opened when inline content lands directly in a block container (tight list
/// items) and closed by whatever event comes next at block level.
#[derive(Debug)]
enum Frame {
    Root(Vec<Block>),
    Paragraph {
        inlines: Vec<Inline>,
        implicit: bool,
    },
    Heading {
        level: u8,
        inlines: Vec<Inline>,
    },
    BlockQuote(Vec<Block>),
    Custom(Vec<Block>),
    CodeBlock {
        info: Option<String>,
        code: String,
    },
    HtmlBlock(String),
    List {
        start: Option<u64>,
        tight: bool,
        depth: usize,
        items: Vec<ListItem>,
    },
    Item(Vec<Block>),
    Table(Table),
    TableHead(Vec<Vec<Inline>>),
    TableRow(Vec<Vec<Inline>>),
    TableCell(Vec<Inline>),
    Span {
        kind: SpanKind,
        inlines: Vec<Inline>,
    },
    /// Unknown inline container; its children are spliced into the parent.
    Passthrough(Vec<Inline>),
}

#[derive(Debug)]
enum SpanKind {
    Emphasis,
    Strong,
    Strikethrough,
    Link { destination: String, title: String },
    Image { destination: String, title: String },
}

impl SpanKind {
    fn into_inline(self, children: Vec<Inline>) -> Inline {
        match self {
            SpanKind::Emphasis => Inline::Emphasis(children),
            SpanKind::Strong => Inline::Strong(children),
            SpanKind::Strikethrough => Inline::Strikethrough(children),
            SpanKind::Link { destination, title } => Inline::Link {
                destination,
                title,
                children,
            },
            SpanKind::Image { destination, title } => Inline::Image {
                destination,
                title,
                children,
            },
        }
    }
}

impl Frame {
    /// Frames that hold blocks and accept stray inline content via an implicit paragraph.
    fn is_block_container(&self) -> bool {
        matches!(
            self,
            Frame::Root(_) | Frame::BlockQuote(_) | Frame::Custom(_) | Frame::Item(_)
        )
    }

    fn is_implicit_paragraph(&self) -> bool {
        matches!(self, Frame::Paragraph { implicit: true, .. })
    }

    fn accepts_inlines(&self) -> bool {
        matches!(
            self,
            Frame::Paragraph { .. }
                | Frame::Heading { .. }
                | Frame::TableCell(_)
                | Frame::Span { .. }
                | Frame::Passthrough(_)
        )
    }

    fn inlines_mut(&mut self) -> Option<&mut Vec<Inline>> {
        match self {
            Frame::Paragraph { inlines, .. }
            | Frame::Heading { inlines, .. }
            | Frame::TableCell(inlines)
            | Frame::Span { inlines, .. }
            | Frame::Passthrough(inlines) => Some(inlines),
            _ => None,
        }
    }

    fn blocks_mut(&mut self) -> Option<&mut Vec<Block>> {
        match self {
            Frame::Root(blocks)
            | Frame::BlockQuote(blocks)
            | Frame::Custom(blocks)
            | Frame::Item(blocks) => Some(blocks),
            _ => None,
        }
    }
}

impl From<pulldown_cmark::Alignment> for Alignment {
    fn from(alignment: pulldown_cmark::Alignment) -> Self {
        match alignment {
            pulldown_cmark::Alignment::None => Alignment::None,
            pulldown_cmark::Alignment::Left => Alignment::Left,
            pulldown_cmark::Alignment::Center => Alignment::Center,
            pulldown_cmark::Alignment::Right => Alignment::Right,
        }
    }
}

/// Folds pulldown-cmark events into a [`Document`].
///
/// # Tight lists
///
/// ```markdown
/// - Parameters:
///   - x: a number
/// ```
///
/// pulldown-cmark emits `Start(Item)`, `Text("Parameters:")`, `Start(List)`...
/// with no paragraph around the text. The builder opens an implicit paragraph
/// for the text and closes it at `Start(List)`, so the item ends up as
/// `[Paragraph([Text]), List]` exactly like a loose item would.
pub(crate) struct TreeBuilder {
    stack: Vec<Frame>,
}

impl TreeBuilder {
    pub(crate) fn new() -> Self {
        Self {
            stack: vec![Frame::Root(Vec::new())],
        }
    }

    pub(crate) fn process_event(&mut self, event: Event) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(_) => self.end(),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.push_inline(Inline::Code(code.to_string())),
            Event::Html(html) => self.html(&html),
            Event::InlineHtml(html) => self.push_inline(Inline::Html(html.to_string())),
            Event::FootnoteReference(label) => {
                self.push_inline(Inline::Text(format!("[^{label}]")));
            }
            Event::SoftBreak => self.push_inline(Inline::SoftBreak),
            Event::HardBreak => self.push_inline(Inline::HardBreak),
            Event::Rule => self.push_block(Block::ThematicBreak),
            Event::TaskListMarker(checked) => {
                let marker = if checked { "[x] " } else { "[ ] " };
                self.push_inline(Inline::Text(marker.to_string()));
            }
            other => log::trace!("ignoring markdown event {other:?}"),
        }
    }

    pub(crate) fn finish(mut self) -> Document {
        while self.stack.len() > 1 {
            self.close_top();
        }
        match self.stack.pop() {
            Some(Frame::Root(blocks)) => Document { blocks },
            _ => Document::default(),
        }
    }

    fn start(&mut self, tag: Tag) {
        let frame = match tag {
            Tag::Paragraph => {
                self.close_implicit_paragraph();
                self.mark_list_loose();
                Frame::Paragraph {
                    inlines: Vec::new(),
                    implicit: false,
                }
            }
            Tag::Heading { level, .. } => {
                self.close_implicit_paragraph();
                Frame::Heading {
                    level: level as u8,
                    inlines: Vec::new(),
                }
            }
            Tag::BlockQuote(_) => {
                self.close_implicit_paragraph();
                Frame::BlockQuote(Vec::new())
            }
            Tag::CodeBlock(kind) => {
                self.close_implicit_paragraph();
                let info = match kind {
                    CodeBlockKind::Fenced(info) if !info.is_empty() => Some(info.to_string()),
                    _ => None,
                };
                Frame::CodeBlock {
                    info,
                    code: String::new(),
                }
            }
            Tag::HtmlBlock => {
                self.close_implicit_paragraph();
                Frame::HtmlBlock(String::new())
            }
            Tag::List(start) => {
                self.close_implicit_paragraph();
                Frame::List {
                    start,
                    tight: true,
                    depth: self.container_depth(),
                    items: Vec::new(),
                }
            }
            Tag::Item => Frame::Item(Vec::new()),
            Tag::Table(alignments) => {
                self.close_implicit_paragraph();
                Frame::Table(Table {
                    alignments: alignments.into_iter().map(Alignment::from).collect(),
                    head: Vec::new(),
                    rows: Vec::new(),
                })
            }
            Tag::TableHead => Frame::TableHead(Vec::new()),
            Tag::TableRow => Frame::TableRow(Vec::new()),
            Tag::TableCell => Frame::TableCell(Vec::new()),
            Tag::Emphasis => self.span(SpanKind::Emphasis),
            Tag::Strong => self.span(SpanKind::Strong),
            Tag::Strikethrough => self.span(SpanKind::Strikethrough),
            Tag::Link {
                dest_url, title, ..
            } => self.span(SpanKind::Link {
                destination: dest_url.to_string(),
                title: title.to_string(),
            }),
            Tag::Image {
                dest_url, title, ..
            } => self.span(SpanKind::Image {
                destination: dest_url.to_string(),
                title: title.to_string(),
            }),
            other => {
                if self.top().is_some_and(Frame::accepts_inlines) {
                    Frame::Passthrough(Vec::new())
                } else {
                    log::trace!("treating {other:?} as a custom block");
                    self.close_implicit_paragraph();
                    Frame::Custom(Vec::new())
                }
            }
        };
        self.stack.push(frame);
    }

    fn end(&mut self) {
        self.close_implicit_paragraph();
        if self.stack.len() > 1 {
            self.close_top();
        }
    }

    fn span(&mut self, kind: SpanKind) -> Frame {
        self.open_implicit_paragraph();
        Frame::Span {
            kind,
            inlines: Vec::new(),
        }
    }

    fn text(&mut self, text: &str) {
        match self.stack.last_mut() {
            Some(Frame::CodeBlock { code, .. }) => code.push_str(text),
            Some(Frame::HtmlBlock(html)) => html.push_str(text),
            _ => self.push_inline(Inline::Text(text.to_string())),
        }
    }

    fn html(&mut self, html: &str) {
        match self.stack.last_mut() {
            Some(Frame::HtmlBlock(block)) => block.push_str(html),
            _ => self.push_inline(Inline::Html(html.to_string())),
        }
    }

    fn push_inline(&mut self, inline: Inline) {
        self.open_implicit_paragraph();
        match self.stack.last_mut().and_then(Frame::inlines_mut) {
            Some(inlines) => push_merged(inlines, inline),
            None => log::trace!("dropping inline {inline:?} outside inline context"),
        }
    }

    fn push_block(&mut self, block: Block) {
        self.close_implicit_paragraph();
        match self.stack.last_mut().and_then(Frame::blocks_mut) {
            Some(blocks) => blocks.push(block),
            None => log::trace!("dropping block {block:?} outside block container"),
        }
    }

    fn top(&self) -> Option<&Frame> {
        self.stack.last()
    }

    fn open_implicit_paragraph(&mut self) {
        if self.top().is_some_and(Frame::is_block_container) {
            self.stack.push(Frame::Paragraph {
                inlines: Vec::new(),
                implicit: true,
            });
        }
    }

    fn close_implicit_paragraph(&mut self) {
        if self.top().is_some_and(Frame::is_implicit_paragraph) {
            self.close_top();
        }
    }

    /// An explicit paragraph directly inside an item makes the enclosing list loose.
    fn mark_list_loose(&mut self) {
        let len = self.stack.len();
        if len < 2 || !matches!(self.stack[len - 1], Frame::Item(_)) {
            return;
        }
        if let Frame::List { tight, .. } = &mut self.stack[len - 2] {
            *tight = false;
        }
    }

    fn container_depth(&self) -> usize {
        self.stack
            .iter()
            .filter(|frame| matches!(frame, Frame::Item(_) | Frame::BlockQuote(_) | Frame::Custom(_)))
            .count()
    }

    /// Pop the top frame and attach the finished node to its parent.
    fn close_top(&mut self) {
        let Some(frame) = self.stack.pop() else {
            return;
        };
        match frame {
            Frame::Root(blocks) => {
                // Only reachable if the stack was unbalanced; keep the content.
                self.stack.push(Frame::Root(blocks));
            }
            Frame::Paragraph { inlines, .. } => self.push_block(Block::Paragraph(inlines)),
            Frame::Heading { level, inlines } => self.push_block(Block::Heading {
                level,
                children: inlines,
            }),
            Frame::BlockQuote(blocks) => self.push_block(Block::BlockQuote(blocks)),
            Frame::Custom(blocks) => self.push_block(Block::Custom(blocks)),
            Frame::CodeBlock { info, code } => self.push_block(Block::CodeBlock { info, code }),
            Frame::HtmlBlock(html) => self.push_block(Block::HtmlBlock(html)),
            Frame::List {
                start,
                tight,
                items,
                ..
            } => self.push_block(Block::List(List {
                start,
                tight,
                items,
            })),
            Frame::Item(children) => {
                if let Some(Frame::List { items, depth, .. }) = self.stack.last_mut() {
                    items.push(ListItem {
                        children,
                        depth: *depth,
                    });
                }
            }
            Frame::Table(table) => self.push_block(Block::Table(table)),
            Frame::TableHead(cells) => {
                if let Some(Frame::Table(table)) = self.stack.last_mut() {
                    table.head = cells;
                }
            }
            Frame::TableRow(cells) => {
                if let Some(Frame::Table(table)) = self.stack.last_mut() {
                    table.rows.push(cells);
                }
            }
            Frame::TableCell(inlines) => match self.stack.last_mut() {
                Some(Frame::TableHead(cells) | Frame::TableRow(cells)) => cells.push(inlines),
                _ => log::trace!("dropping table cell outside a row"),
            },
            Frame::Span { kind, inlines } => self.push_inline(kind.into_inline(inlines)),
            Frame::Passthrough(inlines) => {
                for inline in inlines {
                    self.push_inline(inline);
                }
            }
        }
    }
}

/// Push an inline node, merging it into a preceding text run when both are text.
fn push_merged(inlines: &mut Vec<Inline>, inline: Inline) {
    if let Inline::Text(text) = &inline
        && let Some(Inline::Text(last)) = inlines.last_mut()
    {
        last.push_str(text);
        return;
    }
    inlines.push(inline);
}
