use crate::{naming, nullability};
use innerbuild_model::{
    node::{Annotation, Class, Expr, Field, Method, Modifiers, NONNULL, NULLABLE, Stmt},
    types::Nullability,
};

/// Append one public accessor per non-static field, in declaration order,
/// propagating the field's classification onto the return position.
pub fn generate_getters(class: &mut Class) {
    let getters: Vec<Method> = class.instance_fields().map(getter).collect();

    for method in getters {
        class.add_method(method);
    }
}

fn getter(field: &Field) -> Method {
    let mut method = Method::new(
        naming::getter_name(&field.name),
        Modifiers::public(),
        field.ty.clone(),
    );
    method.body.push(Stmt::Return(Expr::name(&field.name)));

    // Primitives are never marker-eligible, regardless of classification.
    if !field.ty.is_primitive() {
        match nullability::classify(field) {
            Nullability::Nullable => method.annotations.push(Annotation::new(NULLABLE)),
            Nullability::NonNull => method.annotations.push(Annotation::new(NONNULL)),
            Nullability::Unannotated => {}
        }
    }

    method
}
