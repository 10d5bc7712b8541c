//! Catalog name patterns
//!
//! Patterns follow SQL `LIKE` rules with a fixed escape character:
//! - `_` matches exactly one character
//! - `%` matches any run of characters, including none
//! - `\` makes the next character literal
//!
//! The database evaluates patterns itself; [`LikePattern`] gives the
//! in-memory catalog the same semantics.

use thiserror::Error;

use crate::config::DEFAULT_PRIMARY_PATTERN;

/// Escape character used in every catalog query
pub const ESCAPE_CHAR: char = '\\';

/// Return the pattern to query with, falling back to the primary pattern
/// when none (or an empty one) is given.
pub fn resolve_pattern(pattern: Option<&str>) -> &str {
    match pattern {
        Some(p) if !p.is_empty() => p,
        _ => DEFAULT_PRIMARY_PATTERN,
    }
}

/// Pattern errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    /// Same rejection PostgreSQL applies to `LIKE`
    #[error("LIKE pattern must not end with escape character")]
    TrailingEscape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Literal(char),
    AnyChar,
    AnySeq,
}

/// A parsed `LIKE ... ESCAPE '\'` pattern
#[derive(Debug, Clone)]
pub struct LikePattern {
    tokens: Vec<Token>,
}

impl LikePattern {
    /// Parse a pattern string
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let mut tokens = Vec::with_capacity(pattern.len());
        let mut chars = pattern.chars();

        while let Some(c) = chars.next() {
            let token = match c {
                ESCAPE_CHAR => Token::Literal(chars.next().ok_or(PatternError::TrailingEscape)?),
                '_' => Token::AnyChar,
                '%' => Token::AnySeq,
                other => Token::Literal(other),
            };
            // Adjacent `%` are equivalent to one
            if token == Token::AnySeq && tokens.last() == Some(&Token::AnySeq) {
                continue;
            }
            tokens.push(token);
        }

        Ok(Self { tokens })
    }

    /// Whether `name` matches the whole pattern
    pub fn matches(&self, name: &str) -> bool {
        let text: Vec<char> = name.chars().collect();
        let (mut t, mut p) = (0usize, 0usize);
        // Position of the last `%` seen and the text index it was tried at
        let mut backtrack: Option<(usize, usize)> = None;

        while t < text.len() {
            match self.tokens.get(p) {
                Some(Token::AnySeq) => {
                    backtrack = Some((p, t));
                    p += 1;
                }
                Some(Token::AnyChar) => {
                    t += 1;
                    p += 1;
                }
                Some(Token::Literal(c)) if *c == text[t] => {
                    t += 1;
                    p += 1;
                }
                _ => match backtrack {
                    Some((star_p, star_t)) => {
                        p = star_p + 1;
                        t = star_t + 1;
                        backtrack = Some((star_p, star_t + 1));
                    }
                    None => return false,
                },
            }
        }

        self.tokens[p..].iter().all(|tok| *tok == Token::AnySeq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn like(pattern: &str, name: &str) -> bool {
        LikePattern::parse(pattern).unwrap().matches(name)
    }

    #[test]
    fn test_resolve_pattern_defaults() {
        assert_eq!(resolve_pattern(None), "h3\\_%");
        assert_eq!(resolve_pattern(Some("")), "h3\\_%");
        assert_eq!(resolve_pattern(Some("\\_h3\\_%")), "\\_h3\\_%");
    }

    #[test]
    fn test_default_patterns() {
        assert!(like("h3\\_%", "h3_to_string"));
        assert!(like("h3\\_%", "h3_"));
        assert!(!like("h3\\_%", "h3to_string"));
        assert!(!like("h3\\_%", "_h3_to_string"));

        assert!(like("\\_h3\\_%", "_h3_cell_to_boundary_wkb"));
        assert!(!like("\\_h3\\_%", "h3_to_string"));
    }

    #[test]
    fn test_unescaped_underscore_is_wildcard() {
        assert!(like("h3_%", "h3_to_string"));
        assert!(like("h3_%", "h3x"));
        assert!(like("_h3_%", "xh3y"));
        assert!(!like("_h3_%", "h3_to_string"));
    }

    #[test]
    fn test_percent_matches_empty_and_middle() {
        assert!(like("%", ""));
        assert!(like("h3%string", "h3_to_string"));
        assert!(like("h3%%string", "h3string"));
        assert!(!like("h3%string", "h3_to_strings"));
        assert!(like("%_a%a", "xaba"));
    }

    #[test]
    fn test_exact_literal() {
        assert!(like("h3_get_resolution", "h3_get_resolution"));
        assert!(!like("h3\\_get", "h3_get_resolution"));
        assert!(like("100\\%", "100%"));
        assert!(!like("100\\%", "1000"));
    }

    #[test]
    fn test_trailing_escape_is_rejected() {
        assert_eq!(
            LikePattern::parse("h3\\").unwrap_err(),
            PatternError::TrailingEscape
        );
    }
}
