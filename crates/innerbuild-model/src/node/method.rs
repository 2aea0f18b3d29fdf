use crate::node::{Annotation, Modifiers, Stmt, Type};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// Param
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Param {
    pub name: String,
    pub ty: Type,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

impl Param {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            annotations: Vec::new(),
        }
    }

    #[must_use]
    pub fn has_annotation(&self, path: &str) -> bool {
        self.annotations.iter().any(|a| a.is(path))
    }

    pub fn add_annotation(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }
}

impl Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for annotation in &self.annotations {
            write!(f, "{annotation} ")?;
        }

        write!(f, "{} {}", self.ty, self.name)
    }
}

///
/// Method
///
/// A synthesized method. A method with no return type is a constructor;
/// its name is the enclosing type's name.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Method {
    pub name: String,

    #[serde(default)]
    pub modifiers: Modifiers,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_type: Option<Type>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<Param>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub body: Vec<Stmt>,
}

impl Method {
    pub fn new(name: impl Into<String>, modifiers: Modifiers, return_type: Type) -> Self {
        Self {
            name: name.into(),
            modifiers,
            return_type: Some(return_type),
            annotations: Vec::new(),
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn constructor(name: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            name: name.into(),
            modifiers,
            return_type: None,
            annotations: Vec::new(),
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    #[must_use]
    pub const fn is_constructor(&self) -> bool {
        self.return_type.is_none()
    }

    #[must_use]
    pub fn has_annotation(&self, path: &str) -> bool {
        self.annotations.iter().any(|a| a.is(path))
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for annotation in &self.annotations {
            writeln!(f, "{annotation}")?;
        }

        let modifiers = self.modifiers.to_string();
        if !modifiers.is_empty() {
            write!(f, "{modifiers} ")?;
        }
        if let Some(ty) = &self.return_type {
            write!(f, "{ty} ")?;
        }

        write!(f, "{}(", self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
        }
        writeln!(f, ") {{")?;

        for stmt in &self.body {
            writeln!(f, "    {stmt}")?;
        }

        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Expr, NULLABLE};

    #[test]
    fn renders_accessor_with_return_annotation() {
        let mut method = Method::new(
            "getName",
            Modifiers::public(),
            Type::reference("java.lang.String"),
        );
        method.annotations.push(Annotation::new(NULLABLE));
        method.body.push(Stmt::Return(Expr::name("name")));

        assert_eq!(
            method.to_string(),
            "@javax.annotation.Nullable\npublic java.lang.String getName() {\n    return name;\n}"
        );
    }

    #[test]
    fn constructors_render_without_return_type() {
        let mut ctor = Method::constructor("Builder", Modifiers::private());
        assert!(ctor.is_constructor());

        ctor.params.push(Param::new(
            "value",
            Type::reference("java.lang.String"),
        ));

        assert_eq!(
            ctor.to_string(),
            "private Builder(java.lang.String value) {\n}"
        );
    }
}
