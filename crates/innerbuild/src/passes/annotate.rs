use crate::nullability;
use innerbuild_model::{node::Class, types::Nullability};

/// Default every unmarked non-static reference field to non-null: an
/// unmarked reference field is assumed required. Primitive fields are
/// never marker-eligible and are skipped; fields already classified are
/// untouched.
pub fn complete_annotations(class: &mut Class) {
    for field in class.instance_fields_mut() {
        if !field.ty.is_primitive()
            && nullability::classify(field) == Nullability::Unannotated
        {
            nullability::set_classification(field, Nullability::NonNull);
        }
    }
}
