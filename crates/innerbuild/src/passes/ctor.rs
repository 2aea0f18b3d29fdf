use crate::{nullability, passes::builder::BUILDER_CLASS};
use innerbuild_model::{
    node::{Class, Expr, Method, Modifiers, Param, Stmt, Type},
    types::Nullability,
};

/// Parameter name of the builder-accepting constructor.
const BUILDER_PARAM: &str = "builder";

/// Append the private builder-accepting constructor. Each assignment
/// reads the like-named field off the builder parameter, in declaration
/// order; with `check_nulls`, non-null and primitive-backed assignments
/// are validated with the field's name as the failure message.
pub fn generate_constructor(class: &mut Class, check_nulls: bool) {
    let mut ctor = Method::constructor(&class.name, Modifiers::private());
    ctor.params
        .push(Param::new(BUILDER_PARAM, Type::reference(BUILDER_CLASS)));

    for field in class.instance_fields() {
        let source = Expr::field_of(Expr::name(BUILDER_PARAM), &field.name);

        let validated = check_nulls
            && (nullability::classify(field) == Nullability::NonNull || field.ty.is_primitive());
        let value = if validated {
            Expr::RequireNonNull {
                value: Box::new(source),
                message: field.name.clone(),
            }
        } else {
            source
        };

        ctor.body.push(Stmt::Assign {
            target: Expr::this_field(&field.name),
            value,
        });
    }

    class.add_method(ctor);
}
