//! Search pattern helpers

/// Build an `ILIKE` pattern matching `query` anywhere in a column.
///
/// The query is used verbatim, surrounding whitespace included. LIKE
/// metacharacters are escaped with a backslash, which is the default escape
/// character for Postgres `ILIKE`.
pub fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for ch in query.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_everything() {
        assert_eq!(like_pattern(""), "%%");
    }

    #[test]
    fn wraps_plain_text() {
        assert_eq!(like_pattern("delba"), "%delba%");
    }

    #[test]
    fn keeps_surrounding_whitespace() {
        assert_eq!(like_pattern(" lee"), "% lee%");
        assert_eq!(like_pattern("   "), "%   %");
    }

    #[test]
    fn escapes_metacharacters() {
        assert_eq!(like_pattern("50%"), "%50\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("c:\\x"), "%c:\\\\x%");
    }
}
