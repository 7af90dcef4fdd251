//! First-letter case transforms for Go identifiers.

/// Upper-case the first character, leaving the rest untouched
/// (e.g., "userID" -> "UserID").
///
/// A character whose upper-case form is not a single character (such as `ß`)
/// is kept as is, so the result never changes length in characters.
pub fn upper_first(s: &str) -> String {
    map_first(s, |c| single(c.to_uppercase()))
}

/// Lower-case the first character, leaving the rest untouched
/// (e.g., "UserID" -> "userID").
pub fn lower_first(s: &str) -> String {
    map_first(s, |c| single(c.to_lowercase()))
}

fn map_first(s: &str, f: impl Fn(char) -> Option<char>) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => {
            let mut out = String::with_capacity(s.len());
            out.push(f(c).unwrap_or(c));
            out.push_str(chars.as_str());
            out
        }
    }
}

fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    let first = mapped.next()?;
    match mapped.next() {
        None => Some(first),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upper_first() {
        assert_eq!(upper_first("userID"), "UserID");
        assert_eq!(upper_first("UserID"), "UserID");
        assert_eq!(upper_first("field1"), "Field1");
        assert_eq!(upper_first("_private"), "_private");
        assert_eq!(upper_first(""), "");
    }

    #[test]
    fn test_lower_first() {
        assert_eq!(lower_first("UserID"), "userID");
        assert_eq!(lower_first("Field1"), "field1");
        assert_eq!(lower_first("x"), "x");
        assert_eq!(lower_first(""), "");
    }

    #[test]
    fn test_multibyte_first_letter() {
        assert_eq!(upper_first("éclair"), "Éclair");
        assert_eq!(lower_first("Ωmega"), "ωmega");
        assert_eq!(upper_first("ßeta"), "ßeta");
    }
}
