use crate::markup::{Inline, ListItem};

/// Tags with structural meaning: they produce parameters, returns or throws
/// rather than a field extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentationTag {
    Parameters,
    Parameter,
    Returns,
    Throws,
}

impl DocumentationTag {
    pub fn name(self) -> &'static str {
        match self {
            DocumentationTag::Parameters => "parameters",
            DocumentationTag::Parameter => "parameter",
            DocumentationTag::Returns => "returns",
            DocumentationTag::Throws => "throws",
        }
    }

    /// The prefix a list item must start with.
    ///
    /// `parameter` has no colon: in `- parameter x: ...` the colon belongs to
    /// the parameter name.
    pub fn keyword(self) -> String {
        match self {
            DocumentationTag::Parameter => self.name().to_string(),
            _ => format!("{}:", self.name()),
        }
    }
}

impl ListItem {
    /// Check whether this item starts with `tag` and return its content.
    ///
    /// The item's first child must be a paragraph whose first inline is plain
    /// text. Leading whitespace is ignored and the comparison is a
    /// case-insensitive prefix match.
    ///
    /// With `drop_tag`, the tag and any spaces after it are removed from the
    /// text; otherwise the text is returned untouched. The remaining inline
    /// siblings of the paragraph follow unchanged.
    pub fn match_tag(&self, tag: &str, drop_tag: bool) -> Option<Vec<Inline>> {
        let inlines = self.first_paragraph()?;
        let Some((Inline::Text(text), rest)) = inlines.split_first() else {
            return None;
        };

        let remainder = strip_prefix_ignore_case(text.trim_start(), tag)?;
        let head = if drop_tag {
            remainder.trim_start_matches(' ').to_string()
        } else {
            text.clone()
        };

        let mut content = Vec::with_capacity(inlines.len());
        content.push(Inline::Text(head));
        content.extend(rest.iter().cloned());
        Some(content)
    }
}

fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = text.chars();
    for expected in prefix.chars() {
        let actual = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    Some(chars.as_str())
}
