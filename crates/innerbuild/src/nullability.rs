//! Reads and writes a field's nullability classification through its
//! marker annotations.

use innerbuild_model::{
    node::{Annotation, Class, Field, NONNULL, NULLABLE},
    types::Nullability,
};

/// Classify a field by the marker annotation it carries. Markers are
/// mutually exclusive by construction.
#[must_use]
pub fn classify(field: &Field) -> Nullability {
    if field.has_annotation(NULLABLE) {
        Nullability::Nullable
    } else if field.has_annotation(NONNULL) {
        Nullability::NonNull
    } else {
        Nullability::Unannotated
    }
}

/// Realize a classification on a field, removing any prior marker of the
/// other kind first.
pub fn set_classification(field: &mut Field, nullability: Nullability) {
    field.remove_annotation(NONNULL);
    field.remove_annotation(NULLABLE);

    match nullability {
        Nullability::NonNull => field.add_annotation(Annotation::new(NONNULL)),
        Nullability::Nullable => field.add_annotation(Annotation::new(NULLABLE)),
        Nullability::Unannotated => {}
    }
}

/// True when every non-static reference field carries a marker.
/// Primitive fields are never marker-eligible and do not count.
#[must_use]
pub fn all_fields_annotated(class: &Class) -> bool {
    class
        .instance_fields()
        .filter(|f| !f.ty.is_primitive())
        .all(|f| classify(f).is_annotated())
}

#[cfg(test)]
mod tests {
    use super::*;
    use innerbuild_model::{node::Type, types::Primitive};

    #[test]
    fn classification_round_trips_through_markers() {
        let mut field = Field::new("name", Type::reference("java.lang.String"));
        assert_eq!(classify(&field), Nullability::Unannotated);

        set_classification(&mut field, Nullability::Nullable);
        assert_eq!(classify(&field), Nullability::Nullable);

        set_classification(&mut field, Nullability::NonNull);
        assert_eq!(classify(&field), Nullability::NonNull);
        assert!(!field.has_annotation(NULLABLE));

        set_classification(&mut field, Nullability::Unannotated);
        assert_eq!(classify(&field), Nullability::Unannotated);
        assert!(field.annotations.is_empty());
    }

    #[test]
    fn primitive_fields_do_not_count_toward_full_annotation() {
        let mut class = Class::new("Subject");
        class.fields.push(Field::new("age", Type::Primitive(Primitive::Int)));

        assert!(all_fields_annotated(&class));

        class
            .fields
            .push(Field::new("name", Type::reference("java.lang.String")));
        assert!(!all_fields_annotated(&class));
    }

    #[test]
    fn static_fields_do_not_count_toward_full_annotation() {
        let mut class = Class::new("Subject");
        let mut constant = Field::new("DEFAULT", Type::reference("java.lang.String"));
        constant.modifiers.is_static = true;
        class.fields.push(constant);

        assert!(all_fields_annotated(&class));
    }
}
