//! Canonical markdown rendering and plain text flattening.
//!
//! `format` produces markdown that parses back into an equivalent tree: ATX
//! headings, fenced code, `- `/`N. ` list markers with a hanging indent, `> `
//! quote prefixes and pipe tables. `plain_text` discards inline formatting,
//! except that code spans keep their backticks.

use super::{Alignment, Block, Document, Inline, List, Markup, Table};

const THEMATIC_BREAK: &str = "-----";

impl Document {
    /// Render the whole document, blocks separated by a blank line.
    pub fn format(&self) -> String {
        join_blocks(&self.blocks, "\n\n")
    }
}

impl Block {
    pub fn format(&self) -> String {
        match self {
            Block::Paragraph(inlines) => format_inlines(inlines),
            Block::Heading { level, children } => {
                format!("{} {}", "#".repeat(usize::from(*level)), format_inlines(children))
            }
            Block::CodeBlock { info, code } => format_code_block(info.as_deref(), code),
            Block::HtmlBlock(html) => html.trim_end_matches('\n').to_string(),
            Block::BlockQuote(children) => prefix_lines(&join_blocks(children, "\n\n"), "> ", ">"),
            Block::ThematicBreak => THEMATIC_BREAK.to_string(),
            Block::Table(table) => table.format(),
            Block::List(list) => list.format(),
            Block::Custom(children) => join_blocks(children, "\n\n"),
        }
    }
}

impl List {
    pub fn format(&self) -> String {
        let separator = if self.tight { "\n" } else { "\n\n" };
        self.items
            .iter()
            .zip(0u64..)
            .map(|(item, index)| {
                let marker = match self.start {
                    Some(start) => format!("{}. ", start + index),
                    None => "- ".to_string(),
                };
                hang(&marker, &join_blocks(&item.children, separator))
            })
            .collect::<Vec<_>>()
            .join(separator)
    }
}

impl Table {
    pub fn format(&self) -> String {
        let mut lines = vec![format_row(&self.head)];
        let delimiters = self
            .alignments
            .iter()
            .map(|alignment| match alignment {
                Alignment::None => "---",
                Alignment::Left => ":--",
                Alignment::Center => ":-:",
                Alignment::Right => "--:",
            })
            .collect::<Vec<_>>();
        lines.push(format!("| {} |", delimiters.join(" | ")));
        lines.extend(self.rows.iter().map(|row| format_row(row)));
        lines.join("\n")
    }
}

impl Inline {
    /// Render a single node. Text is escaped as if it sat mid-line.
    pub fn format(&self) -> String {
        let mut out = String::new();
        let mut line_start = false;
        write_inline(self, &mut out, &mut line_start);
        out
    }

    /// Literal characters only. Code spans keep their backticks.
    pub fn plain_text(&self) -> String {
        match self {
            Inline::Text(text) => text.clone(),
            Inline::Code(code) => format!("`{code}`"),
            Inline::SoftBreak => " ".to_string(),
            Inline::HardBreak => "\n".to_string(),
            Inline::Html(html) => html.clone(),
            Inline::Emphasis(children)
            | Inline::Strong(children)
            | Inline::Strikethrough(children)
            | Inline::Link { children, .. }
            | Inline::Image { children, .. } => plain_text(children, ""),
        }
    }
}

impl Markup {
    pub fn format(&self) -> String {
        match self {
            Markup::Block(block) => block.format(),
            Markup::Inline(inline) => inline.format(),
        }
    }
}

/// Render inline nodes back to back as the content of one block.
///
/// Literal text is escaped so it parses back as text: markdown punctuation
/// everywhere, and block markers (`-`, `+`, `#`, `>`, `=`, `1.`) at the start
/// of a line.
pub fn format_inlines(inlines: &[Inline]) -> String {
    let mut out = String::new();
    let mut line_start = true;
    write_inlines(inlines, &mut out, &mut line_start);
    out
}

fn write_inlines(inlines: &[Inline], out: &mut String, line_start: &mut bool) {
    for inline in inlines {
        write_inline(inline, out, line_start);
    }
}

fn write_inline(inline: &Inline, out: &mut String, line_start: &mut bool) {
    match inline {
        Inline::Text(text) if text.is_empty() => return,
        Inline::Text(text) => escape_text(text, *line_start, out),
        Inline::Code(code) => out.push_str(&format_code_span(code)),
        Inline::SoftBreak => {
            out.push('\n');
            *line_start = true;
            return;
        }
        Inline::HardBreak => {
            out.push_str("\\\n");
            *line_start = true;
            return;
        }
        Inline::Html(html) => out.push_str(html),
        Inline::Emphasis(children) => write_delimited("*", children, out, line_start),
        Inline::Strong(children) => write_delimited("**", children, out, line_start),
        Inline::Strikethrough(children) => write_delimited("~~", children, out, line_start),
        Inline::Link {
            destination,
            title,
            children,
        } => write_link("[", children, destination, title, out, line_start),
        Inline::Image {
            destination,
            title,
            children,
        } => write_link("![", children, destination, title, out, line_start),
    }
    *line_start = false;
}

/// `delimiter`, the children, then `delimiter` again.
fn write_delimited(delimiter: &str, children: &[Inline], out: &mut String, line_start: &mut bool) {
    out.push_str(delimiter);
    *line_start = false;
    write_inlines(children, out, line_start);
    out.push_str(delimiter);
}

fn write_link(
    open: &str,
    children: &[Inline],
    destination: &str,
    title: &str,
    out: &mut String,
    line_start: &mut bool,
) {
    out.push_str(open);
    *line_start = false;
    write_inlines(children, out, line_start);
    out.push_str("](");
    out.push_str(&link_target(destination, title));
    out.push(')');
}

fn escape_text(text: &str, line_start: bool, out: &mut String) {
    let rest = if line_start {
        escape_block_marker(text, out)
    } else {
        text
    };
    for (index, c) in rest.char_indices() {
        match c {
            '\\' | '`' | '*' | '_' | '[' | ']' | '<' | '~' => {
                out.push('\\');
                out.push(c);
            }
            '&' if looks_like_entity(&rest[index + 1..]) => out.push_str("\\&"),
            _ => out.push(c),
        }
    }
}

/// Escape a marker that would open a block at the start of a line and return
/// the text after it.
fn escape_block_marker<'a>(text: &'a str, out: &mut String) -> &'a str {
    let digits = text.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0
        && let Some(&delimiter @ (b'.' | b')')) = text.as_bytes().get(digits)
    {
        out.push_str(&text[..digits]);
        out.push('\\');
        out.push(char::from(delimiter));
        return &text[digits + 1..];
    }
    match text.chars().next() {
        Some(marker @ ('-' | '+' | '#' | '>' | '=')) => {
            out.push('\\');
            out.push(marker);
            &text[1..]
        }
        _ => text,
    }
}

/// `name;` or `#123;` following an `&`.
fn looks_like_entity(after_ampersand: &str) -> bool {
    let name = after_ampersand.strip_prefix('#').unwrap_or(after_ampersand);
    let len = name.bytes().take_while(u8::is_ascii_alphanumeric).count();
    len > 0 && name[len..].starts_with(';')
}

/// Flatten inline nodes to plain text, joined with `separator`.
pub fn plain_text(inlines: &[Inline], separator: &str) -> String {
    inlines
        .iter()
        .map(Inline::plain_text)
        .collect::<Vec<_>>()
        .join(separator)
}

fn join_blocks(blocks: &[Block], separator: &str) -> String {
    blocks
        .iter()
        .map(Block::format)
        .collect::<Vec<_>>()
        .join(separator)
}

fn format_code_block(info: Option<&str>, code: &str) -> String {
    let fence = "`".repeat(longest_run(code, '`').max(2) + 1);
    let mut out = format!("{fence}{}\n", info.unwrap_or_default());
    out.push_str(code);
    if !code.is_empty() && !code.ends_with('\n') {
        out.push('\n');
    }
    out.push_str(&fence);
    out
}

fn format_code_span(code: &str) -> String {
    let fence = "`".repeat(longest_run(code, '`') + 1);
    if fence.len() > 1 || code.starts_with(' ') || code.ends_with(' ') {
        format!("{fence} {code} {fence}")
    } else {
        format!("{fence}{code}{fence}")
    }
}

fn format_row(cells: &[Vec<Inline>]) -> String {
    let cells = cells
        .iter()
        .map(|cell| format_inlines(cell).replace('|', "\\|"))
        .collect::<Vec<_>>();
    format!("| {} |", cells.join(" | "))
}

fn link_target(destination: &str, title: &str) -> String {
    let needs_brackets = destination.is_empty()
        || destination
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '(' | ')' | '<' | '>' | '\\'));
    let destination = if needs_brackets {
        let mut escaped = String::from("<");
        for c in destination.chars() {
            if matches!(c, '<' | '>' | '\\') {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        escaped.push('>');
        escaped
    } else {
        destination.to_string()
    };
    if title.is_empty() {
        destination
    } else {
        let title = title.replace('\\', "\\\\").replace('"', "\\\"");
        format!("{destination} \"{title}\"")
    }
}

fn longest_run(text: &str, needle: char) -> usize {
    let mut longest = 0;
    let mut current = 0;
    for c in text.chars() {
        if c == needle {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }
    longest
}

/// Prefix every line, using `empty` for blank lines so no trailing spaces appear.
fn prefix_lines(text: &str, prefix: &str, empty: &str) -> String {
    text.lines()
        .map(|line| {
            if line.is_empty() {
                empty.to_string()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Put `marker` before the first line and indent the rest to line up under it.
fn hang(marker: &str, body: &str) -> String {
    if body.is_empty() {
        return marker.trim_end().to_string();
    }
    let indent = " ".repeat(marker.len());
    body.lines()
        .enumerate()
        .map(|(index, line)| match index {
            0 => format!("{marker}{line}"),
            _ if line.is_empty() => String::new(),
            _ => format!("{indent}{line}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::parse;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("Plain paragraph.")]
    #[case("# Heading")]
    #[case("Line one\nline two")]
    #[case("Some `code` and **strong** and *emphasis*.")]
    #[case("```\nlet x = 1\n```")]
    #[case("```swift\nlet x = 1\n```")]
    #[case("> quoted\n> lines")]
    #[case("- a\n- b\n  - c")]
    #[case("1. first\n2. second")]
    #[case("-----")]
    #[case("[link](https://example.com)")]
    #[case("| a | b |\n| --- | --: |\n| c | d |")]
    #[case("\\- not a list")]
    #[case("1\\. not a list")]
    #[case("\\# not a heading")]
    #[case("\\> not a quote")]
    #[case("first line\n\\+ not a list")]
    #[case("a \\*b\\* c")]
    #[case("a \\[b\\] \\<c> \\_d\\_ \\`e\\`")]
    #[case("C:\\\\path")]
    #[case("\\&copy; but AT&T")]
    #[case("[docs](<a b>)")]
    #[case("[docs](https://x.dev \"say \\\"hi\\\"\")")]
    fn canonical_markdown_formats_unchanged(#[case] markdown: &str) {
        assert_eq!(parse(markdown).format(), markdown);
    }

    #[test]
    fn blocks_are_separated_by_blank_line() {
        let doc = parse("First.\nStill first.\n\n```\ncode\n```\n\n> quote");
        assert_eq!(
            doc.format(),
            "First.\nStill first.\n\n```\ncode\n```\n\n> quote"
        );
    }

    #[test]
    fn setext_heading_formats_as_atx() {
        assert_eq!(parse("Title\n=====").format(), "# Title");
    }

    #[test]
    fn indented_code_formats_as_fenced() {
        assert_eq!(parse("    let x = 1\n").format(), "```\nlet x = 1\n```");
    }

    #[test]
    fn code_block_containing_fence_uses_longer_fence() {
        let block = Block::CodeBlock {
            info: None,
            code: "```\n".to_string(),
        };
        assert_eq!(block.format(), "````\n```\n````");
    }

    #[test]
    fn loose_list_keeps_blank_lines() {
        let markdown = "- a\n\n  more a\n\n- b";
        assert_eq!(parse(markdown).format(), markdown);
    }

    #[test]
    fn empty_list_item_renders_bare_marker() {
        assert_eq!(parse("-\n- b").format(), "-\n- b");
    }

    #[test]
    fn plain_text_drops_formatting_but_keeps_code_ticks() {
        let doc = parse("A **bold** `tick` and [link](https://x.dev)\nnext");
        let Block::Paragraph(inlines) = &doc.blocks[0] else {
            panic!("expected a paragraph");
        };
        assert_eq!(plain_text(inlines, ""), "A bold `tick` and link next");
    }

    #[test]
    fn plain_text_is_not_escaped() {
        let doc = parse("\\- a \\*b\\* C:\\\\x");
        let Block::Paragraph(inlines) = &doc.blocks[0] else {
            panic!("expected a paragraph");
        };
        assert_eq!(plain_text(inlines, ""), "- a *b* C:\\x");
        assert_eq!(format_inlines(inlines), "\\- a \\*b\\* C:\\\\x");
    }

    #[test]
    fn single_inline_format_skips_block_marker_escape() {
        assert_eq!(Inline::Text("- x".to_string()).format(), "- x");
        assert_eq!(format_inlines(&[Inline::Text("- x".to_string())]), "\\- x");
    }

    #[test]
    fn link_destination_with_parentheses_uses_angle_brackets() {
        let link = Inline::Link {
            destination: "a(b)".to_string(),
            title: String::new(),
            children: vec![Inline::Text("x".to_string())],
        };
        assert_eq!(link.format(), "[x](<a(b)>)");
    }

    #[test]
    fn plain_text_separator_is_inserted_between_nodes() {
        let inlines = vec![
            Inline::Text("a".to_string()),
            Inline::Code("b".to_string()),
        ];
        assert_eq!(plain_text(&inlines, " "), "a `b`");
    }
}
