use crate::nullability;
use innerbuild_model::{
    node::{Class, Modifiers},
    types::Nullability,
};

/// Force every non-static field to `private final`, preserving its
/// nullability classification across the modifier rewrite.
///
/// The marker is stripped and re-applied rather than left in place, so it
/// ends up in a canonical position regardless of prior source layout.
pub fn harden_fields(class: &mut Class) {
    for field in class.instance_fields_mut() {
        let classification = nullability::classify(field);

        nullability::set_classification(field, Nullability::Unannotated);
        field.modifiers = Modifiers::private_final();
        nullability::set_classification(field, classification);
    }
}
