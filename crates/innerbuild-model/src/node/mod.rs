//! Class-tree nodes mutated in place by the generation passes.

mod annotation;
mod class;
mod field;
mod method;
mod modifiers;
mod stmt;
mod ty;

pub use annotation::{Annotation, NONNULL, NULLABLE, PARAMETERS_ARE_NONNULL_BY_DEFAULT};
pub use class::Class;
pub use field::{Field, FieldList};
pub use method::{Method, Param};
pub use modifiers::{Modifiers, Visibility};
pub use stmt::{Expr, Stmt};
pub use ty::Type;

use thiserror::Error as ThisError;

///
/// NodeError
///
/// Structural defects in a class model. Surfaced once, at the generation
/// boundary; the passes themselves assume a validated tree.
///

#[derive(Debug, ThisError)]
#[remain::sorted]
pub enum NodeError {
    #[error("class '{class}': {reason}")]
    InvalidClass { class: String, reason: String },

    #[error("field '{field}': {reason}")]
    InvalidField { field: String, reason: String },
}
