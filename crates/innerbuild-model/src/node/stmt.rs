use crate::node::Type;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// Stmt
///
/// Structured method-body statements. Bodies are never assembled from
/// text; every synthesized statement is one of these nodes.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Stmt {
    /// `<target> = <value>;`
    Assign { target: Expr, value: Expr },

    /// `return <expr>;`
    Return(Expr),
}

impl Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assign { target, value } => write!(f, "{target} = {value};"),
            Self::Return(expr) => write!(f, "return {expr};"),
        }
    }
}

///
/// Expr
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Expr {
    /// `this`
    This,

    /// A bare identifier.
    Name(String),

    /// `<base>.<name>`
    Field { base: Box<Expr>, name: String },

    /// `new <ty>(<args>)`
    New { ty: Type, args: Vec<Expr> },

    /// `java.util.Objects.requireNonNull(<value>, "<message>")`
    RequireNonNull { value: Box<Expr>, message: String },
}

impl Expr {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }

    /// `this.<name>`
    pub fn this_field(name: impl Into<String>) -> Self {
        Self::Field {
            base: Box::new(Self::This),
            name: name.into(),
        }
    }

    /// `<base>.<name>`
    pub fn field_of(base: Self, name: impl Into<String>) -> Self {
        Self::Field {
            base: Box::new(base),
            name: name.into(),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::This => f.write_str("this"),
            Self::Name(name) => f.write_str(name),
            Self::Field { base, name } => write!(f, "{base}.{name}"),
            Self::New { ty, args } => {
                write!(f, "new {ty}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            }
            Self::RequireNonNull { value, message } => {
                write!(f, "java.util.Objects.requireNonNull({value}, \"{message}\")")
            }
        }
    }
}
