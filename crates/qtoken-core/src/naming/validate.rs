//! Pure predicates over the name grammars.
//!
//! ```text
//! Name        = [A-Za-z_.] [A-Za-z0-9_.]*
//! QName       = Name ( "/" Name )*
//! PackageName = Part ( "/" Part )*      Part = [A-Za-z_.] [A-Za-z0-9_.-]*
//! ```

/// Separates the segments of a qualified name.
pub const QNAME_DELIMITER: char = '/';

/// The name that refers to the package or module currently being emitted.
pub const NAME_CURRENT: &str = ".";

fn is_name_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '.'
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '.'
}

fn is_package_char(c: char) -> bool {
    is_name_char(c) || c == '-'
}

fn matches(s: &str, rest: fn(char) -> bool) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if is_name_start(first) => chars.all(rest),
        _ => false,
    }
}

/// Checks that `s` is a simple name: no delimiters and no path separators.
pub fn is_name(s: &str) -> bool {
    matches(s, is_name_char)
}

/// Checks that `s` is one or more simple names joined by `/`.
pub fn is_qname(s: &str) -> bool {
    s.split(QNAME_DELIMITER).all(is_name)
}

/// Checks that `s` is a qualified name whose segments may also contain `-`.
pub fn is_package_name(s: &str) -> bool {
    s.split(QNAME_DELIMITER)
        .all(|part| matches(part, is_package_char))
}
