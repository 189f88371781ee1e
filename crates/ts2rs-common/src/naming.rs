//! Naming-convention conversion shared by the Resolver (variant names) and
//! the Emitter (field and type spelling).
//!
//! Surface declarations are camelCase; the Rust target is idiomatically
//! snake_case for fields and PascalCase for variants. Every conversion here
//! is paired, at the call site, with a `serde` rename attribute that
//! restores the original wire spelling — see `ts2rs-emitter`.

/// Format a discriminator value (or enum member name) as a variant
/// identifier: split on runs of `-`, `_`, or whitespace, upper-case the
/// first letter of each part, lower-case the remainder, concatenate.
///
/// ```text
/// "circle"       -> "Circle"
/// "light-bulb"   -> "LightBulb"
/// "SCREAMING_OK" -> "ScreamingOk"
/// ```
pub fn to_variant_name(value: &str) -> String {
    value
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(capitalize_lower)
        .collect()
}

fn capitalize_lower(part: &str) -> String {
    let mut chars = part.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(part.len());
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Name a numeric-literal union variant that has no natural spelling of its
/// own: `Value0`, `Value1`, ... in declaration order. Used when a
/// literal-union enum (§4.2.4 item 3) has numeric members.
pub fn numeric_variant_name(ordinal: usize) -> String {
    format!("Value{ordinal}")
}

/// Convert a camelCase (or PascalCase) surface identifier to snake_case for
/// use as a Rust field name.
///
/// ```text
/// "isActive"  -> "is_active"
/// "userID"    -> "user_id"
/// "name"      -> "name"
/// ```
pub fn to_snake_case(camel: &str) -> String {
    let mut out = String::with_capacity(camel.len() + 4);
    let chars: Vec<char> = camel.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() {
            let prev_is_lower_or_digit = i > 0 && (chars[i - 1].is_lowercase() || chars[i - 1].is_ascii_digit());
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = i > 0 && (prev_is_lower_or_digit || (next_is_lower && chars[i - 1].is_uppercase()));
            if boundary {
                out.push('_');
            }
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Rust keywords and reserved words that cannot appear bare as an
/// identifier. Field and variant names colliding with one of these are
/// emitted as a raw identifier (`r#type`).
const RUST_KEYWORDS: &[&str] = &[
    "as", "break", "const", "continue", "crate", "else", "enum", "extern", "false", "fn", "for",
    "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut", "pub", "ref", "return",
    "self", "Self", "static", "struct", "super", "trait", "true", "type", "unsafe", "use",
    "where", "while", "async", "await", "dyn", "abstract", "become", "box", "do", "final",
    "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "try",
];

/// Escape `ident` as a raw identifier if it collides with a Rust keyword.
pub fn escape_rust_keyword(ident: &str) -> String {
    if RUST_KEYWORDS.contains(&ident) {
        format!("r#{ident}")
    } else {
        ident.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_name_of_an_empty_string_is_empty() {
        assert_eq!(to_variant_name(""), "");
    }

    #[test]
    fn variant_name_collapses_runs_of_separators() {
        assert_eq!(to_variant_name("__weird--name"), "WeirdName");
    }

    #[test]
    fn snake_case_keeps_a_leading_acronym_together() {
        assert_eq!(to_snake_case("HTTPStatus"), "http_status");
    }
}
