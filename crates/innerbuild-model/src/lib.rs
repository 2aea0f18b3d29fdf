//! Owned in-memory class tree mutated by the innerbuild generation passes.
//!
//! The boundary to any real host representation (an editor's syntax tree, a
//! source file) is a serialization adapter supplied by the caller; every
//! node here derives serde and renders Java source text via `Display` with
//! fully qualified references.

pub mod node;
pub mod types;
pub mod validate;

/// Maximum length for class identifiers.
pub const MAX_CLASS_NAME_LEN: usize = 64;

/// Maximum length for field identifiers.
pub const MAX_FIELD_NAME_LEN: usize = 64;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
///

pub mod prelude {
    pub use crate::{
        node::{
            Annotation, Class, Expr, Field, FieldList, Method, Modifiers, Param, Stmt, Type,
            Visibility,
        },
        types::{Nullability, Primitive},
    };
}
