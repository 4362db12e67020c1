//! Count formatting for log lines.

/// `"s"` unless `n == 1`.
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// `plural_count(3, "page")` -> `"3 pages"`, `plural_count(1, "group")` -> `"1 group"`.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{count} {noun}{}", plural_s(count))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "page"), "0 pages");
        assert_eq!(plural_count(1, "group"), "1 group");
        assert_eq!(plural_count(4, "integration"), "4 integrations");
    }
}
