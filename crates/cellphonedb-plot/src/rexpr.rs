//! Rendering Rust values as R source literals

use std::path::Path;

/// A double-quoted R string literal
pub fn string(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

pub fn path(value: &Path) -> String {
    string(&value.to_string_lossy())
}

/// An integer literal
pub fn integer(value: i64) -> String {
    format!("{}L", value)
}

/// `c("a", "b")` for a selection, `NULL` for none
pub fn character_vector(values: Option<&[String]>) -> String {
    match values {
        None => "NULL".to_string(),
        Some(values) => {
            let items: Vec<String> = values.iter().map(|v| string(v)).collect();
            format!("c({})", items.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_escapes() {
        assert_eq!(string("a\"b"), r#""a\"b""#);
        assert_eq!(string("C:\\out"), r#""C:\\out""#);
        assert_eq!(string("\t"), r#""\t""#);
    }

    #[test]
    fn test_character_vector() {
        assert_eq!(character_vector(None), "NULL");
        assert_eq!(
            character_vector(Some(&["A.B".to_string(), "C".to_string()])),
            r#"c("A.B", "C")"#
        );
        assert_eq!(character_vector(Some(&[])), "c()");
    }

    #[test]
    fn test_integer() {
        assert_eq!(integer(13), "13L");
    }
}
