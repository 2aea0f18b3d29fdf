use crate::{naming, nullability};
use innerbuild_model::{
    node::{
        Annotation, Class, Expr, Field, Method, Modifiers, NONNULL, NULLABLE, Param, Stmt, Type,
    },
    types::Nullability,
};

/// Name of the nested builder type.
pub const BUILDER_CLASS: &str = "Builder";

/// Name of the static factory method on the enclosing class — the sole
/// supported way to obtain a builder instance.
pub const FACTORY_METHOD: &str = "builder";

/// Append the nested builder type and its static factory method.
///
/// Assumes the field list is already finalized; `all_annotated` must
/// reflect the classification state after any hardening/completion.
pub fn generate_builder(class: &mut Class, check_nulls: bool, all_annotated: bool) {
    let builder = builder_class(class, check_nulls, all_annotated);

    class.add_method(factory_method());
    class.add_class(builder);
}

fn builder_class(class: &Class, check_nulls: bool, all_annotated: bool) -> Class {
    let mut builder = Class::new(BUILDER_CLASS);
    builder.modifiers = Modifiers::public_static();

    // Callers go through the factory method.
    builder.add_method(Method::constructor(BUILDER_CLASS, Modifiers::private()));

    for field in class.instance_fields() {
        builder.fields.push(builder_field(field, check_nulls));
        builder.add_method(setter(field, all_annotated));
    }

    builder.add_method(of_method(class));
    builder.add_method(build_method(class));

    builder
}

fn factory_method() -> Method {
    let mut method = Method::new(
        FACTORY_METHOD,
        Modifiers::public_static(),
        Type::reference(BUILDER_CLASS),
    );
    method.body.push(Stmt::Return(Expr::New {
        ty: Type::reference(BUILDER_CLASS),
        args: Vec::new(),
    }));

    method
}

// A never-set primitive-backed builder field must default to a null
// sentinel the constructor validation can detect, so primitives widen to
// their boxed type when validation is on.
fn builder_field(field: &Field, check_nulls: bool) -> Field {
    let ty = if check_nulls {
        field.ty.boxed()
    } else {
        field.ty.clone()
    };

    Field::new(&field.name, ty)
}

fn setter(field: &Field, all_annotated: bool) -> Method {
    let mut method = Method::new(
        naming::setter_name(&field.name),
        Modifiers::public(),
        Type::reference(BUILDER_CLASS),
    );

    // The parameter keeps the source field's original, unwidened type.
    let mut param = Param::new(&field.name, field.ty.clone());
    match nullability::classify(field) {
        Nullability::Nullable => param.add_annotation(Annotation::new(NULLABLE)),
        // When every field is annotated, the class-level default marker
        // covers non-null parameters.
        Nullability::NonNull if !all_annotated => param.add_annotation(Annotation::new(NONNULL)),
        _ => {}
    }
    method.params.push(param);

    method.body.push(Stmt::Assign {
        target: Expr::this_field(&field.name),
        value: Expr::name(&field.name),
    });
    method.body.push(Stmt::Return(Expr::This));

    method
}

fn of_method(class: &Class) -> Method {
    let param = naming::instance_param(&class.name);

    let mut method = Method::new("of", Modifiers::public(), Type::reference(BUILDER_CLASS));
    method
        .params
        .push(Param::new(&param, Type::reference(&class.name)));

    for field in class.instance_fields() {
        method.body.push(Stmt::Assign {
            target: Expr::this_field(&field.name),
            value: Expr::field_of(Expr::name(&param), &field.name),
        });
    }
    method.body.push(Stmt::Return(Expr::This));

    method
}

fn build_method(class: &Class) -> Method {
    let mut method = Method::new("build", Modifiers::public(), Type::reference(&class.name));
    method.body.push(Stmt::Return(Expr::New {
        ty: Type::reference(&class.name),
        args: vec![Expr::This],
    }));

    method
}
