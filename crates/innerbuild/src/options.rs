use serde::{Deserialize, Serialize};

///
/// Options
///
/// The five generation switches. All are independent; no combination is
/// disallowed, though `validate_non_null_in_constructor` only has visible
/// effect when `generate_builder` is also set, since it shapes the
/// generated constructor and the builder's internal field types.
///

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Options {
    /// Normalize every non-static field to `private final`.
    pub harden_fields: bool,

    /// Default unmarked reference fields to non-null.
    pub complete_annotations: bool,

    /// Emit one accessor per non-static field.
    pub generate_getters: bool,

    /// Emit the nested builder, its factory method, and the private
    /// builder-accepting constructor.
    pub generate_builder: bool,

    /// Validate non-null and primitive-backed assignments in the
    /// generated constructor.
    pub validate_non_null_in_constructor: bool,
}

impl Options {
    /// Every switch enabled.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            harden_fields: true,
            complete_annotations: true,
            generate_getters: true,
            generate_builder: true,
            validate_non_null_in_constructor: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_everything_off() {
        let parsed: Options = serde_json::from_str("{}").unwrap();

        assert_eq!(Options::default(), parsed);
        assert!(!Options::default().generate_builder);
    }

    #[test]
    fn partial_config_fills_remaining_switches() {
        let options: Options = serde_json::from_str(r#"{"generate_builder": true}"#).unwrap();

        assert!(options.generate_builder);
        assert!(!options.harden_fields);
    }
}
