use serde::Serialize;

use super::DocumentationComment;

/// A flat, serialisable view of a [`DocumentationComment`]: names and text only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    pub r#abstract: Option<String>,
    pub description: Option<String>,
    pub parameters: Vec<NamedText>,
    pub returns: Vec<String>,
    pub throws: Vec<String>,
    pub field_extensions: Vec<NamedText>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedText {
    pub name: String,
    pub description: String,
}

impl CommentSummary {
    pub fn new(comment: &DocumentationComment, include_raw: bool) -> Self {
        Self {
            raw: include_raw.then(|| comment.raw().to_string()),
            r#abstract: comment.r#abstract().map(|summary| summary.text()),
            description: comment.description().map(|description| description.text()),
            parameters: comment
                .parameters()
                .iter()
                .map(|parameter| NamedText {
                    name: parameter.name().to_string(),
                    description: parameter.description().to_string(),
                })
                .collect(),
            returns: comment
                .returns()
                .iter()
                .map(|returns| returns.description().to_string())
                .collect(),
            throws: comment
                .throws()
                .iter()
                .map(|throws| throws.description().to_string())
                .collect(),
            field_extensions: comment
                .field_extensions()
                .iter()
                .map(|extension| NamedText {
                    name: extension.name().to_string(),
                    description: extension.description().to_string(),
                })
                .collect(),
        }
    }
}
