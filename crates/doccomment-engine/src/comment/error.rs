use std::path::PathBuf;

/// Errors raised before a comment reaches the markdown parser.
///
/// Markdown parsing itself accepts any text, so these only cover getting the
/// text in the first place.
#[derive(Debug, thiserror::Error)]
pub enum DocCommentError {
    #[error("Comment is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),
    #[error("Failed to read comment file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}
