use crate::entity::Parameter;
use crate::markup::{Block, Inline, Markup};

/// Split ` name: description` inline content into the name and a paragraph
/// holding the description.
///
/// Only the word directly before the first colon is the name; any words before
/// it are discarded, so `- some words x: text` yields `x`. Returns `None` when
/// the first inline isn't text, has no colon, or the name is empty.
pub fn split_name_and_content(inlines: &[Inline]) -> Option<(String, Block)> {
    let Some((Inline::Text(text), rest)) = inlines.split_first() else {
        return None;
    };

    let colon = text.find(':')?;
    let name_start = text[..colon].rfind(' ').map_or(0, |space| space + 1);
    let name = &text[name_start..colon];
    if name.is_empty() {
        return None;
    }

    let remaining = text[colon + 1..].trim_start_matches(' ');
    let mut content = Vec::with_capacity(inlines.len());
    content.push(Inline::Text(remaining.to_string()));
    content.extend(rest.iter().cloned());

    Some((name.to_string(), Block::Paragraph(content)))
}

/// Build a [`Parameter`] from `name: description` inline content. The
/// description keeps its inline formatting.
pub fn extract_parameter(inlines: &[Inline]) -> Option<Parameter> {
    let (name, content) = split_name_and_content(inlines)?;
    let raw = inlines.iter().cloned().map(Markup::Inline).collect();
    Some(Parameter::new(name, content.format(), raw))
}
