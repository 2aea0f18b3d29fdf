use derive_more::Display;
use serde::{Deserialize, Serialize};

///
/// Primitive
///
/// The eight Java primitive kinds. `Display` renders the source keyword.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum Primitive {
    #[display("boolean")]
    Boolean,
    #[display("byte")]
    Byte,
    #[display("char")]
    Char,
    #[display("double")]
    Double,
    #[display("float")]
    Float,
    #[display("int")]
    Int,
    #[display("long")]
    Long,
    #[display("short")]
    Short,
}

impl Primitive {
    /// Qualified name of the boxed counterpart (`int` -> `java.lang.Integer`).
    #[must_use]
    pub const fn boxed_qualified(self) -> &'static str {
        match self {
            Self::Boolean => "java.lang.Boolean",
            Self::Byte => "java.lang.Byte",
            Self::Char => "java.lang.Character",
            Self::Double => "java.lang.Double",
            Self::Float => "java.lang.Float",
            Self::Int => "java.lang.Integer",
            Self::Long => "java.lang.Long",
            Self::Short => "java.lang.Short",
        }
    }
}

///
/// Nullability
///
/// The contract a field or parameter carries about whether it may be
/// absent. Derived from marker presence; a field is never both.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum Nullability {
    NonNull,
    Nullable,
    #[default]
    Unannotated,
}

impl Nullability {
    #[must_use]
    pub const fn is_annotated(self) -> bool {
        !matches!(self, Self::Unannotated)
    }
}
