//! Character ranges of a parsed key inside its source text.
//!
//! All ranges count characters from the start of [`ParsedKey::source`];
//! callers add the offset of the expression in their own document.

use std::ops::Range;

use super::parser::ParsedKey;

pub struct KeyRanges<'a> {
    key: &'a ParsedKey,
}

impl<'a> KeyRanges<'a> {
    pub fn new(key: &'a ParsedKey) -> Self {
        Self { key }
    }

    /// The whole key expression.
    pub fn full(&self) -> Range<usize> {
        0..self.key.length()
    }

    pub fn namespace(&self) -> Option<Range<usize>> {
        self.key.namespace.as_ref().map(|token| 0..token.length)
    }

    /// Everything after the namespace separator.
    pub fn path(&self) -> Range<usize> {
        self.path_start()..self.key.length()
    }

    /// Range of the `index`-th path token, if it exists.
    pub fn token(&self, index: usize) -> Option<Range<usize>> {
        let token = self.key.path.get(index)?;
        let start = self.token_start(index);
        Some(start..start + token.length)
    }

    /// Range from the first unresolved token to the end of the key.
    ///
    /// `resolved_count` is the number of leading path tokens that resolved.
    /// When every token resolved the range is empty and sits at the end.
    pub fn unresolved(&self, resolved_count: usize) -> Range<usize> {
        let end = self.key.length();
        if resolved_count >= self.key.path.len() {
            return end..end;
        }
        self.token_start(resolved_count)..end
    }

    fn path_start(&self) -> usize {
        self.key
            .namespace
            .as_ref()
            .map_or(0, |token| token.length + 1)
    }

    fn token_start(&self, index: usize) -> usize {
        let preceding: usize = self.key.path[..index]
            .iter()
            .map(|token| token.length + 1)
            .sum();
        self.path_start() + preceding
    }
}

#[cfg(test)]
mod tests {
    use crate::core::key::fragment::Fragment;
    use crate::core::key::parser::KeyExpressionParser;
    use crate::core::key::ranges::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ranges_of_literal_key() {
        let key = KeyExpressionParser::default().parse_literal("fileName:ROOT.Key2.Key3");
        let ranges = KeyRanges::new(&key);
        assert_eq!(ranges.full(), 0..23);
        assert_eq!(ranges.namespace(), Some(0..8));
        assert_eq!(ranges.path(), 9..23);
        assert_eq!(ranges.token(0), Some(9..13));
        assert_eq!(ranges.token(2), Some(19..23));
        assert_eq!(ranges.token(3), None);
        assert_eq!(&key.source[ranges.token(1).unwrap()], "Key2");
    }

    #[test]
    fn test_unresolved_tail() {
        let key = KeyExpressionParser::default().parse_literal("fileName:ROOT.Key2.Key3");
        let ranges = KeyRanges::new(&key);
        assert_eq!(ranges.unresolved(0), 9..23);
        assert_eq!(ranges.unresolved(2), 19..23);
        assert_eq!(ranges.unresolved(3), 23..23);
    }

    #[test]
    fn test_ranges_without_namespace() {
        let key = KeyExpressionParser::default().parse_literal("a.b");
        let ranges = KeyRanges::new(&key);
        assert_eq!(ranges.namespace(), None);
        assert_eq!(ranges.path(), 0..3);
        assert_eq!(ranges.unresolved(1), 2..3);
    }

    #[test]
    fn test_ranges_follow_source_spans_of_interpolation() {
        let key = KeyExpressionParser::default().parse(&[
            Fragment::interpolated("${fileExpr}", "sample"),
            Fragment::literal(":ROOT.Key1.Key31"),
        ]);
        let ranges = KeyRanges::new(&key);
        assert_eq!(ranges.namespace(), Some(0..11));
        assert_eq!(&key.source[ranges.namespace().unwrap()], "${fileExpr}");
        assert_eq!(ranges.token(2), Some(22..27));
        assert_eq!(ranges.full().end, key.source.len());
    }
}
