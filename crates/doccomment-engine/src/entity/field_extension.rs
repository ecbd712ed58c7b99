use std::fmt;
use std::str::FromStr;

use crate::markup::Block;

/// The closed vocabulary of field extension tags.
///
/// Declaration order is the order tags are tried in when classifying a list
/// item; the first one whose `name:` prefix matches wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldExtensionKind {
    Attention,
    Author,
    Authors,
    Bug,
    Complexity,
    Copyright,
    Date,
    Experiment,
    Important,
    Invariant,
    Note,
    Postcondition,
    Precondition,
    Remark,
    Remarks,
    Requires,
    See,
    Since,
    Todo,
    Version,
    Warning,
}

impl FieldExtensionKind {
    pub const ALL: [FieldExtensionKind; 21] = [
        FieldExtensionKind::Attention,
        FieldExtensionKind::Author,
        FieldExtensionKind::Authors,
        FieldExtensionKind::Bug,
        FieldExtensionKind::Complexity,
        FieldExtensionKind::Copyright,
        FieldExtensionKind::Date,
        FieldExtensionKind::Experiment,
        FieldExtensionKind::Important,
        FieldExtensionKind::Invariant,
        FieldExtensionKind::Note,
        FieldExtensionKind::Postcondition,
        FieldExtensionKind::Precondition,
        FieldExtensionKind::Remark,
        FieldExtensionKind::Remarks,
        FieldExtensionKind::Requires,
        FieldExtensionKind::See,
        FieldExtensionKind::Since,
        FieldExtensionKind::Todo,
        FieldExtensionKind::Version,
        FieldExtensionKind::Warning,
    ];

    /// Lowercase tag name as written before the colon.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldExtensionKind::Attention => "attention",
            FieldExtensionKind::Author => "author",
            FieldExtensionKind::Authors => "authors",
            FieldExtensionKind::Bug => "bug",
            FieldExtensionKind::Complexity => "complexity",
            FieldExtensionKind::Copyright => "copyright",
            FieldExtensionKind::Date => "date",
            FieldExtensionKind::Experiment => "experiment",
            FieldExtensionKind::Important => "important",
            FieldExtensionKind::Invariant => "invariant",
            FieldExtensionKind::Note => "note",
            FieldExtensionKind::Postcondition => "postcondition",
            FieldExtensionKind::Precondition => "precondition",
            FieldExtensionKind::Remark => "remark",
            FieldExtensionKind::Remarks => "remarks",
            FieldExtensionKind::Requires => "requires",
            FieldExtensionKind::See => "see",
            FieldExtensionKind::Since => "since",
            FieldExtensionKind::Todo => "todo",
            FieldExtensionKind::Version => "version",
            FieldExtensionKind::Warning => "warning",
        }
    }

    /// The prefix matched against a list item, e.g. `note:`.
    pub fn keyword(self) -> String {
        format!("{}:", self.as_str())
    }
}

impl fmt::Display for FieldExtensionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown field extension: {0}")]
pub struct UnknownFieldExtension(pub String);

impl FromStr for FieldExtensionKind {
    type Err = UnknownFieldExtension;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownFieldExtension(s.to_string()))
    }
}

/// A `- Note:`, `- Warning:`, ... annotation. The description is flattened to
/// plain text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldExtension {
    raw: Vec<Block>,
    name: FieldExtensionKind,
    description: String,
}

impl FieldExtension {
    pub(crate) fn new(name: FieldExtensionKind, description: String, raw: Vec<Block>) -> Self {
        Self {
            raw,
            name,
            description,
        }
    }

    pub fn name(&self) -> FieldExtensionKind {
        self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// The whole list item's children, tag included.
    pub fn raw(&self) -> &[Block] {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn all_kinds_are_listed_in_order() {
        let names = FieldExtensionKind::ALL.map(FieldExtensionKind::as_str);
        assert_eq!(
            names,
            [
                "attention",
                "author",
                "authors",
                "bug",
                "complexity",
                "copyright",
                "date",
                "experiment",
                "important",
                "invariant",
                "note",
                "postcondition",
                "precondition",
                "remark",
                "remarks",
                "requires",
                "see",
                "since",
                "todo",
                "version",
                "warning",
            ]
        );
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Note".parse::<FieldExtensionKind>(), Ok(FieldExtensionKind::Note));
        assert_eq!("WARNING".parse::<FieldExtensionKind>(), Ok(FieldExtensionKind::Warning));
        assert_eq!(
            "seeAlso".parse::<FieldExtensionKind>(),
            Err(UnknownFieldExtension("seeAlso".to_string()))
        );
    }

    #[test]
    fn keyword_has_trailing_colon() {
        assert_eq!(FieldExtensionKind::Todo.keyword(), "todo:");
        assert_eq!(FieldExtensionKind::See.to_string(), "see");
    }
}
