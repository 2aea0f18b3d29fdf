use crate::{
    MAX_CLASS_NAME_LEN,
    node::{Annotation, Field, FieldList, Method, Modifiers, NodeError},
    validate::validate_ident,
};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

///
/// Class
///
/// The root of the owned class tree. Generation passes mutate fields in
/// place and append methods, nested classes, and class-level annotations;
/// nothing is ever reordered or removed.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Class {
    pub name: String,

    #[serde(default)]
    pub modifiers: Modifiers,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,

    #[serde(default, skip_serializing_if = "FieldList::is_empty")]
    pub fields: FieldList,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<Method>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub classes: Vec<Class>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            modifiers: Modifiers::public(),
            annotations: Vec::new(),
            fields: FieldList::default(),
            methods: Vec::new(),
            classes: Vec::new(),
        }
    }

    /// Fields that participate in generation; static fields are invariant
    /// under every pass.
    pub fn instance_fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter().filter(|f| !f.is_static())
    }

    pub fn instance_fields_mut(&mut self) -> impl Iterator<Item = &mut Field> {
        self.fields.iter_mut().filter(|f| !f.is_static())
    }

    pub fn add_method(&mut self, method: Method) {
        self.methods.push(method);
    }

    pub fn add_class(&mut self, class: Self) {
        self.classes.push(class);
    }

    #[must_use]
    pub fn method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }

    #[must_use]
    pub fn nested(&self, name: &str) -> Option<&Self> {
        self.classes.iter().find(|c| c.name == name)
    }

    #[must_use]
    pub fn has_annotation(&self, path: &str) -> bool {
        self.annotations.iter().any(|a| a.is(path))
    }

    pub fn add_annotation(&mut self, annotation: Annotation) {
        self.annotations.push(annotation);
    }

    pub fn validate(&self) -> Result<(), NodeError> {
        validate_ident(&self.name, MAX_CLASS_NAME_LEN).map_err(|reason| {
            NodeError::InvalidClass {
                class: self.name.clone(),
                reason,
            }
        })?;

        for field in &self.fields {
            field.validate()?;
        }
        for class in &self.classes {
            class.validate()?;
        }

        Ok(())
    }
}

impl Display for Class {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for annotation in &self.annotations {
            writeln!(f, "{annotation}")?;
        }

        let modifiers = self.modifiers.to_string();
        if modifiers.is_empty() {
            writeln!(f, "class {} {{", self.name)?;
        } else {
            writeln!(f, "{modifiers} class {} {{", self.name)?;
        }

        let mut wrote_member = false;

        for field in &self.fields {
            writeln!(f, "    {field}")?;
            wrote_member = true;
        }

        for method in &self.methods {
            if wrote_member {
                writeln!(f)?;
            }
            write_indented(f, &method.to_string())?;
            wrote_member = true;
        }

        for class in &self.classes {
            if wrote_member {
                writeln!(f)?;
            }
            write_indented(f, &class.to_string())?;
            wrote_member = true;
        }

        write!(f, "}}")
    }
}

// Indent a rendered member one level, preserving blank lines.
fn write_indented(f: &mut fmt::Formatter<'_>, text: &str) -> fmt::Result {
    for line in text.lines() {
        if line.is_empty() {
            writeln!(f)?;
        } else {
            writeln!(f, "    {line}")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        node::{Expr, NONNULL, Stmt, Type},
        types::Primitive,
    };

    fn sample() -> Class {
        let mut class = Class::new("Person");

        let mut name = Field::new("name", Type::reference("java.lang.String"));
        name.modifiers = Modifiers::private_final();
        name.add_annotation(Annotation::new(NONNULL));
        class.fields.push(name);

        let mut age = Field::new("age", Type::Primitive(Primitive::Int));
        age.modifiers = Modifiers::private_final();
        class.fields.push(age);

        let mut getter = Method::new(
            "getAge",
            Modifiers::public(),
            Type::Primitive(Primitive::Int),
        );
        getter.body.push(Stmt::Return(Expr::name("age")));
        class.add_method(getter);

        class
    }

    #[test]
    fn renders_fields_then_methods() {
        let expected = "\
public class Person {
    @javax.annotation.Nonnull private final java.lang.String name;
    private final int age;

    public int getAge() {
        return age;
    }
}";

        assert_eq!(sample().to_string(), expected);
    }

    #[test]
    fn static_fields_are_not_instance_fields() {
        let mut class = sample();
        let mut counter = Field::new("counter", Type::Primitive(Primitive::Long));
        counter.modifiers.is_static = true;
        class.fields.push(counter);

        assert_eq!(class.instance_fields().count(), 2);
        assert_eq!(class.fields.len(), 3);
    }

    #[test]
    fn validation_rejects_reserved_class_names() {
        assert!(Class::new("Person").validate().is_ok());
        assert!(Class::new("class").validate().is_err());
        assert!(Class::new("").validate().is_err());
    }

    #[test]
    fn validation_recurses_into_fields_and_nested_classes() {
        let mut class = Class::new("Outer");
        let mut inner = Class::new("Inner");
        inner.fields.push(Field::new("1bad", Type::reference("java.lang.String")));
        class.add_class(inner);

        assert!(class.validate().is_err());
    }

    #[test]
    fn serde_round_trip_is_lossless() {
        let class = sample();

        let json = serde_json::to_string(&class).expect("serialize");
        let back: Class = serde_json::from_str(&json).expect("deserialize");

        assert_eq!(class, back);
    }
}
