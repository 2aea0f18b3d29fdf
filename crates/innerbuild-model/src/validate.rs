//! Identifier validation shared by class and field nodes.

/// Java keywords and literals that cannot be used as identifiers.
const RESERVED: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "void",
    "volatile",
    "while",
];

/// Ensure an identifier is non-empty, ASCII, within length, well-formed,
/// and not a reserved word.
pub(crate) fn validate_ident(ident: &str, max_len: usize) -> Result<(), String> {
    if ident.is_empty() {
        return Err("identifier is empty".to_string());
    }
    if ident.len() > max_len {
        return Err(format!("identifier '{ident}' exceeds max length {max_len}"));
    }
    if !ident.is_ascii() {
        return Err(format!("identifier '{ident}' must be ASCII"));
    }

    let mut chars = ident.chars();
    let first = chars.next().unwrap_or_default();
    if !(first.is_ascii_alphabetic() || first == '_' || first == '$') {
        return Err(format!("identifier '{ident}' starts with '{first}'"));
    }
    if let Some(bad) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_' || *c == '$')) {
        return Err(format!("identifier '{ident}' contains '{bad}'"));
    }

    is_reserved(ident)?;

    Ok(())
}

fn is_reserved(word: &str) -> Result<(), String> {
    if RESERVED.contains(&word) {
        return Err(format!("the word '{word}' is reserved"));
    }

    Ok(())
}
