use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display},
    ops::Not,
};

///
/// Visibility
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[remain::sorted]
pub enum Visibility {
    #[default]
    Package,
    Private,
    Protected,
    Public,
}

///
/// Modifiers
///
/// Declaration modifiers for classes, fields, and methods. Package
/// visibility renders as nothing.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct Modifiers {
    pub visibility: Visibility,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub is_static: bool,

    #[serde(default, skip_serializing_if = "Not::not")]
    pub is_final: bool,
}

impl Modifiers {
    #[must_use]
    pub const fn private() -> Self {
        Self {
            visibility: Visibility::Private,
            is_static: false,
            is_final: false,
        }
    }

    #[must_use]
    pub const fn private_final() -> Self {
        Self {
            visibility: Visibility::Private,
            is_static: false,
            is_final: true,
        }
    }

    #[must_use]
    pub const fn public() -> Self {
        Self {
            visibility: Visibility::Public,
            is_static: false,
            is_final: false,
        }
    }

    #[must_use]
    pub const fn public_static() -> Self {
        Self {
            visibility: Visibility::Public,
            is_static: true,
            is_final: false,
        }
    }
}

impl Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();

        match self.visibility {
            Visibility::Package => {}
            Visibility::Private => parts.push("private"),
            Visibility::Protected => parts.push("protected"),
            Visibility::Public => parts.push("public"),
        }
        if self.is_static {
            parts.push("static");
        }
        if self.is_final {
            parts.push("final");
        }

        f.write_str(&parts.join(" "))
    }
}
