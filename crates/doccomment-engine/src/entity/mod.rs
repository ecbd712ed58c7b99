//! # Entities
//!
//! The pieces a documentation comment is broken into. Each entity keeps the
//! markup it was built from (`raw`) next to its rendered text, so downstream
//! tooling can re-render it however it likes.
//!
//! - **`notes`**: [`Abstract`] and [`Description`], the narrative prose
//! - **`parameter`**: [`Parameter`], a named argument description
//! - **`tagged`**: [`Returns`] and [`Throws`]
//! - **`field_extension`**: [`FieldExtension`] and the closed [`FieldExtensionKind`] vocabulary

pub mod field_extension;
pub mod notes;
pub mod parameter;
pub mod tagged;

pub use field_extension::{FieldExtension, FieldExtensionKind, UnknownFieldExtension};
pub use notes::{Abstract, Description};
pub use parameter::Parameter;
pub use tagged::{Returns, Throws};
