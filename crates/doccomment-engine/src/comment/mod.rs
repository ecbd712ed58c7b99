//! # Documentation Comments
//!
//! Entry point of the engine. A raw comment goes through three steps:
//!
//! ```text
//! "/// Summary.\n/// - Returns: x" → strip_comment_syntax → markup::parse → Extraction → DocumentationComment
//! ```
//!
//! The result is immutable; all accessors borrow.

pub mod error;
pub mod summary;
pub mod syntax;

pub use error::DocCommentError;
pub use summary::{CommentSummary, NamedText};
pub use syntax::strip_comment_syntax;

use std::path::Path;
use std::str::FromStr;

use crate::entity::{Abstract, Description, FieldExtension, Parameter, Returns, Throws};
use crate::extract::Extraction;
use crate::markup::{self, Document};

/// Structured metadata extracted from one documentation comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentationComment {
    raw: String,
    r#abstract: Option<Abstract>,
    description: Option<Description>,
    parameters: Vec<Parameter>,
    returns: Vec<Returns>,
    throws: Vec<Throws>,
    field_extensions: Vec<FieldExtension>,
}

impl DocumentationComment {
    /// Parse a comment written with `///` line prefixes or `/* ... */` delimiters.
    pub fn parse(comment: &str) -> Self {
        Self::from_markdown(&strip_comment_syntax(comment))
    }

    /// Parse a comment given as separate source lines.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let comment = lines
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join("\n");
        Self::parse(&comment)
    }

    /// Parse a comment from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DocCommentError> {
        let comment = std::str::from_utf8(bytes)?;
        Ok(Self::parse(comment))
    }

    /// Read and parse a comment file.
    pub fn read_file(path: impl AsRef<Path>) -> Result<Self, DocCommentError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| DocCommentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes(&bytes)
    }

    /// Parse markdown that has no comment delimiters.
    pub fn from_markdown(markdown: &str) -> Self {
        Self::from_document(&markup::parse(markdown))
    }

    /// Extract from an already parsed markup tree.
    pub fn from_document(document: &Document) -> Self {
        let extraction = Extraction::from_blocks(&document.blocks);
        let comment = Self {
            raw: document.format(),
            r#abstract: extraction.abstract_note(),
            description: extraction.description(),
            parameters: extraction.parameters,
            returns: extraction.returns,
            throws: extraction.throws,
            field_extensions: extraction.field_extensions,
        };
        log::debug!(
            "extracted comment: abstract={} description={} parameters={} returns={} throws={} field_extensions={}",
            comment.r#abstract.is_some(),
            comment.description.is_some(),
            comment.parameters.len(),
            comment.returns.len(),
            comment.throws.len(),
            comment.field_extensions.len(),
        );
        comment
    }

    /// Canonical markdown of the whole comment, list items included.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn r#abstract(&self) -> Option<&Abstract> {
        self.r#abstract.as_ref()
    }

    pub fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    pub fn parameters(&self) -> &[Parameter] {
        &self.parameters
    }

    pub fn returns(&self) -> &[Returns] {
        &self.returns
    }

    pub fn throws(&self) -> &[Throws] {
        &self.throws
    }

    pub fn field_extensions(&self) -> &[FieldExtension] {
        &self.field_extensions
    }

    /// Names and text only, ready for serialisation.
    pub fn summary(&self, include_raw: bool) -> CommentSummary {
        CommentSummary::new(self, include_raw)
    }
}

impl FromStr for DocumentationComment {
    type Err = DocCommentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
