pub mod comment;
pub mod entity;
pub mod extract;
pub mod markup;

// Re-export key types for easier usage
pub use comment::{
    CommentSummary, DocCommentError, DocumentationComment, NamedText, strip_comment_syntax,
};
pub use entity::*;
pub use extract::{DocumentationTag, Extraction};
pub use markup::{Document, parse};
