use crate::{
    MAX_FIELD_NAME_LEN,
    node::{Annotation, Modifiers, NodeError, Type},
    validate::validate_ident,
};
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display},
    slice,
};

///
/// FieldList
///
/// Ordered field collection. Passes mutate fields in place but never
/// reorder or remove them; declaration order is observable downstream.
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct FieldList {
    pub fields: Vec<Field>,
}

impl FieldList {
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    pub fn iter(&self) -> slice::Iter<'_, Field> {
        self.fields.iter()
    }

    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Field> {
        self.fields.iter_mut()
    }
}

impl<'a> IntoIterator for &'a FieldList {
    type Item = &'a Field;
    type IntoIter = slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

impl<'a> IntoIterator for &'a mut FieldList {
    type Item = &'a mut Field;
    type IntoIter = slice::IterMut<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter_mut()
    }
}

///
/// Field
///
/// A field declaration. Nullability classification is derived from the
/// marker annotations the field carries, never stored separately.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Field {
    pub name: String,
    pub ty: Type,

    #[serde(default)]
    pub modifiers: Modifiers,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            modifiers: Modifiers::default(),
            annotations: Vec::new(),
        }
    }

    #[must_use]
    pub const fn is_static(&self) -> bool {
        self.modifiers.is_static
    }

    #[must_use]
    pub fn has_annotation(&self, path: &str) -> bool {
        self.annotations.iter().any(|a| a.is(path))
    }

    pub fn add_annotation(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    pub fn remove_annotation(&mut self, path: &str) {
        self.annotations.retain(|a| !a.is(path));
    }

    pub fn validate(&self) -> Result<(), NodeError> {
        validate_ident(&self.name, MAX_FIELD_NAME_LEN).map_err(|reason| {
            NodeError::InvalidField {
                field: self.name.clone(),
                reason,
            }
        })?;

        if let Type::Reference(path) = &self.ty
            && path.is_empty()
        {
            return Err(NodeError::InvalidField {
                field: self.name.clone(),
                reason: "reference type has an empty qualified name".to_string(),
            });
        }

        Ok(())
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for annotation in &self.annotations {
            write!(f, "{annotation} ")?;
        }

        let modifiers = self.modifiers.to_string();
        if !modifiers.is_empty() {
            write!(f, "{modifiers} ")?;
        }

        write!(f, "{} {};", self.ty, self.name)
    }
}
