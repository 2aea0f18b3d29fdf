use crate::{Error, Options, nullability, passes};
use innerbuild_model::node::{Annotation, Class, PARAMETERS_ARE_NONNULL_BY_DEFAULT};
use tracing::debug;

/// Run the full generation sequence against a class model, mutating it in
/// place.
///
/// Stages run in a fixed order, each gated by its option switch:
/// hardening, annotation completion, getter synthesis, builder synthesis,
/// constructor synthesis, and the conditional class-level default marker.
/// The `all_fields_annotated` flag is computed exactly once — after
/// hardening and completion, immediately before builder synthesis — and
/// is consumed by both the setter-parameter and class-level marker
/// decisions. It is not re-derived afterwards.
///
/// The model is validated once at this boundary; a malformed model aborts
/// before any stage runs. There is no rollback — the caller's atomic
/// wrapper is responsible for discarding partial edits on failure.
pub fn generate(class: &mut Class, options: Options) -> Result<(), Error> {
    class.validate()?;

    if options.harden_fields {
        debug!(class = %class.name, "hardening fields");
        passes::harden::harden_fields(class);
    }

    if options.complete_annotations {
        debug!(class = %class.name, "completing annotations");
        passes::annotate::complete_annotations(class);
    }

    if options.generate_getters {
        debug!(class = %class.name, "generating getters");
        passes::getters::generate_getters(class);
    }

    if options.generate_builder {
        let all_annotated = nullability::all_fields_annotated(class);
        debug!(class = %class.name, all_annotated, "generating builder");

        passes::builder::generate_builder(
            class,
            options.validate_non_null_in_constructor,
            all_annotated,
        );
        passes::ctor::generate_constructor(class, options.validate_non_null_in_constructor);

        if all_annotated {
            class.add_annotation(Annotation::new(PARAMETERS_ARE_NONNULL_BY_DEFAULT));
        }
    }

    Ok(())
}
