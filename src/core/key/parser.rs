//! Key expression parser.
//!
//! Turns an ordered fragment sequence into a [`ParsedKey`]: an optional
//! namespace token and the composite key path, each token remembering how
//! many source characters it spans. The parser never fails; incomplete input
//! such as `common:title.` degrades to a well-defined key (here with a
//! trailing empty token) because callers query it while the user is typing.

use std::fmt;

use serde::Serialize;

use super::fragment::Fragment;

/// Separators of the key grammar: `namespace<ns>segment<key>segment`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeySyntax {
    pub ns_separator: char,
    pub key_separator: char,
}

impl Default for KeySyntax {
    fn default() -> Self {
        Self {
            ns_separator: ':',
            key_separator: '.',
        }
    }
}

/// A namespace or path segment and the number of source characters it spans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Token {
    pub text: String,
    pub length: usize,
}

impl Token {
    pub fn new(text: impl Into<String>, length: usize) -> Self {
        Self {
            text: text.into(),
            length,
        }
    }
}

/// Result of parsing one key expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedKey {
    /// `None` when the expression has no namespace separator.
    pub namespace: Option<Token>,
    /// Never empty.
    pub path: Vec<Token>,
    /// Concatenated source text of all fragments.
    pub source: String,
    /// True when at least one fragment was interpolated.
    pub is_template: bool,
    #[serde(skip)]
    pub syntax: KeySyntax,
}

impl ParsedKey {
    pub fn has_namespace(&self) -> bool {
        self.namespace.is_some()
    }

    pub fn namespace_text(&self) -> Option<&str> {
        self.namespace.as_ref().map(|token| token.text.as_str())
    }

    /// Path segments as plain strings, ready for the resolver.
    pub fn composite_key(&self) -> Vec<&str> {
        self.path.iter().map(|token| token.text.as_str()).collect()
    }

    pub fn ns_length(&self) -> usize {
        self.namespace.as_ref().map_or(0, |token| token.length)
    }

    /// Source characters of the path, separators included.
    pub fn key_length(&self) -> usize {
        let tokens: usize = self.path.iter().map(|token| token.length).sum();
        tokens + self.path.len().saturating_sub(1)
    }

    /// Source characters of the whole key.
    pub fn length(&self) -> usize {
        let separator = usize::from(self.has_namespace());
        self.ns_length() + separator + self.key_length()
    }
}

impl fmt::Display for ParsedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(namespace) = &self.namespace {
            write!(f, "{}{}", namespace.text, self.syntax.ns_separator)?;
        }
        for (index, token) in self.path.iter().enumerate() {
            if index > 0 {
                write!(f, "{}", self.syntax.key_separator)?;
            }
            f.write_str(&token.text)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeyExpressionParser {
    syntax: KeySyntax,
}

impl KeyExpressionParser {
    pub fn new(syntax: KeySyntax) -> Self {
        Self { syntax }
    }

    pub fn syntax(&self) -> KeySyntax {
        self.syntax
    }

    /// Parse a key written as a single string literal.
    pub fn parse_literal(&self, text: &str) -> ParsedKey {
        self.parse(&[Fragment::literal(text)])
    }

    pub fn parse(&self, fragments: &[Fragment]) -> ParsedKey {
        let boundary = self.find_boundary(fragments);
        let mut segmenter = Segmenter::new(self.syntax.key_separator, boundary.is_none());

        for (index, fragment) in fragments.iter().enumerate() {
            let boundary_at = boundary
                .filter(|(fragment_index, _)| *fragment_index == index)
                .map(|(_, position)| position);
            if fragment.is_literal() {
                segmenter.feed_literal(fragment.resolved(), boundary_at);
            } else {
                segmenter.feed_interpolated(fragment, boundary_at);
            }
        }

        let source: String = fragments.iter().map(Fragment::source).collect();
        let is_template = fragments.iter().any(|fragment| !fragment.is_literal());
        let saturated = segmenter.saturated;
        let (namespace, path) = segmenter.finish();
        let key = ParsedKey {
            namespace,
            path,
            source,
            is_template,
            syntax: self.syntax,
        };
        debug_assert!(
            saturated || key.length() == key.source.chars().count(),
            "token lengths of {:?} do not cover its source",
            key.source
        );
        key
    }

    /// Locate the namespace separator as `(fragment index, char position)`.
    ///
    /// A separator in literal text always takes precedence; one inside an
    /// interpolated value counts only when no literal contains any.
    fn find_boundary(&self, fragments: &[Fragment]) -> Option<(usize, usize)> {
        let separator = self.syntax.ns_separator;
        let first_in = |literal: bool| {
            fragments
                .iter()
                .enumerate()
                .filter(|(_, fragment)| fragment.is_literal() == literal)
                .find_map(|(index, fragment)| {
                    fragment
                        .resolved()
                        .chars()
                        .position(|c| c == separator)
                        .map(|position| (index, position))
                })
        };
        first_in(true).or_else(|| first_in(false))
    }
}

/// Splits fragment text into tokens while accounting source lengths.
///
/// `tokens` always ends with the open token. When the key has a namespace,
/// `tokens[0]` is the namespace token once `in_path` is set.
struct Segmenter {
    key_separator: char,
    tokens: Vec<Token>,
    in_path: bool,
    has_namespace: bool,
    saturated: bool,
}

impl Segmenter {
    fn new(key_separator: char, in_path: bool) -> Self {
        Self {
            key_separator,
            tokens: vec![Token::default()],
            in_path,
            has_namespace: false,
            saturated: false,
        }
    }

    fn open(&mut self) -> &mut Token {
        let last = self.tokens.len() - 1;
        &mut self.tokens[last]
    }

    fn close_token(&mut self) {
        self.tokens.push(Token::default());
    }

    fn close_namespace(&mut self) {
        self.has_namespace = true;
        self.in_path = true;
        self.close_token();
    }

    fn feed_literal(&mut self, text: &str, boundary_at: Option<usize>) {
        for (position, c) in text.chars().enumerate() {
            if boundary_at == Some(position) {
                self.close_namespace();
            } else if self.in_path && c == self.key_separator {
                self.close_token();
            } else {
                let open = self.open();
                open.text.push(c);
                open.length += 1;
            }
        }
    }

    /// The whole source span of an interpolation is charged to one token:
    /// the first one receiving text from it, otherwise the token open when
    /// the fragment ends. Each separator the value contributes is taken out
    /// of that charge so the lengths still add up to the source.
    fn feed_interpolated(&mut self, fragment: &Fragment, boundary_at: Option<usize>) {
        let mut cuts = 0;
        let mut charged: Option<usize> = None;

        for (position, c) in fragment.resolved().chars().enumerate() {
            if boundary_at == Some(position) {
                self.close_namespace();
                cuts += 1;
            } else if self.in_path && c == self.key_separator {
                if position == 0 && self.open().text.is_empty() {
                    continue;
                }
                self.close_token();
                cuts += 1;
            } else {
                charged.get_or_insert(self.tokens.len() - 1);
                self.open().text.push(c);
            }
        }

        let source_len = fragment.source_len();
        if cuts > source_len {
            self.saturated = true;
        }
        let target = charged.unwrap_or(self.tokens.len() - 1);
        self.tokens[target].length += source_len.saturating_sub(cuts);
    }

    fn finish(mut self) -> (Option<Token>, Vec<Token>) {
        let namespace = self.has_namespace.then(|| self.tokens.remove(0));
        (namespace, self.tokens)
    }
}
