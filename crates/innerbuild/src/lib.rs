//! Builder-pattern and accessor synthesis for class models: field
//! hardening, nullability completion, getter/builder/constructor
//! generation, sequenced by a single orchestrator.
//!
//! The engine consumes an owned [`model`] tree plus an [`Options`] value
//! and mutates the tree in place. Locating a class in a live document,
//! presenting options to a user, and committing the edits atomically are
//! the caller's concerns.

pub mod error;
pub mod generate;
pub mod naming;
pub mod nullability;
pub mod options;
pub mod passes;

pub use error::Error;
pub use generate::generate;
pub use options::Options;

pub use innerbuild_model as model;

///
/// Prelude
///

pub mod prelude {
    pub use crate::{Error, Options, generate::generate};
    pub use innerbuild_model::prelude::*;
}
