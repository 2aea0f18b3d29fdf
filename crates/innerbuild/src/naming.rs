//! Naming rules for synthesized members.

/// Accessor name for a field (`name` -> `getName`).
#[must_use]
pub fn getter_name(field: &str) -> String {
    format!("get{}", capitalize_first(field))
}

/// Builder setter name for a field (`name` -> `setName`).
#[must_use]
pub fn setter_name(field: &str) -> String {
    format!("set{}", capitalize_first(field))
}

/// Parameter name for an instance of a class (`Person` -> `person`).
#[must_use]
pub fn instance_param(class: &str) -> String {
    let mut chars = class.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}
