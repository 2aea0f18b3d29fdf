use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// Qualified name of the JSR-305 non-null marker.
pub const NONNULL: &str = "javax.annotation.Nonnull";

/// Qualified name of the JSR-305 nullable marker.
pub const NULLABLE: &str = "javax.annotation.Nullable";

/// Qualified name of the JSR-305 class-level parameter default marker.
pub const PARAMETERS_ARE_NONNULL_BY_DEFAULT: &str =
    "javax.annotation.ParametersAreNonnullByDefault";

///
/// Annotation
///
/// An annotation reference by fully qualified name. Shortening emitted
/// references is the host formatter's concern, not the model's.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Annotation {
    pub path: String,
}

impl Annotation {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn is(&self, path: &str) -> bool {
        self.path == path
    }
}

impl Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.path)
    }
}
