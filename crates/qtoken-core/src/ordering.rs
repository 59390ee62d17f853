//! Deterministic ordering of tokens.
//!
//! Tokens order lexicographically by their flat string encoding. This is the
//! order used for listings, so that the same set of symbols always prints the
//! same way.

use crate::token::Token;
use std::cmp::Ordering;

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

/// Orders any token-like value by its string encoding.
///
/// Wrap values in `ByName` to sort string-like values (`&str`, `String`,
/// [`Token`], [`Name`](crate::Name)) by their encoding. Structured kinds are
/// ordered by converting them into a [`Token`] first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ByName<T>(pub T);

impl<T: AsRef<str> + Eq> PartialOrd for ByName<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: AsRef<str> + Eq> Ord for ByName<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.as_ref().cmp(other.0.as_ref())
    }
}

/// Sort tokens in place by name.
pub fn sort_tokens(tokens: &mut [Token]) {
    tokens.sort();
}

/// Return the tokens sorted by name.
pub fn sorted<I>(tokens: I) -> Vec<Token>
where
    I: IntoIterator<Item = Token>,
{
    let mut tokens: Vec<Token> = tokens.into_iter().collect();
    sort_tokens(&mut tokens);
    tokens
}

/// Return the tokens sorted by name with duplicates removed.
pub fn sort_unique<I>(tokens: I) -> Vec<Token>
where
    I: IntoIterator<Item = Token>,
{
    let mut tokens = sorted(tokens);
    tokens.dedup();
    tokens
}

/// Whether `tokens` is already in name order.
pub fn is_sorted(tokens: &[Token]) -> bool {
    tokens.windows(2).all(|pair| pair[0] <= pair[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(names: &[&str]) -> Vec<Token> {
        names.iter().map(|s| Token::parse(*s).unwrap()).collect()
    }

    #[test]
    fn test_sort_by_string_encoding() {
        let sorted = sorted(tokens(&["b:m", "a:m:X", "a", "a-b:m"]));
        let names: Vec<&str> = sorted.iter().map(Token::as_str).collect();
        assert_eq!(names, vec!["a", "a-b:m", "a:m:X", "b:m"]);
        assert!(is_sorted(&sorted));
    }

    #[test]
    fn test_sort_unique_keeps_one_of_each() {
        let unique = sort_unique(tokens(&["pkg:mod", "pkg", "pkg:mod"]));
        assert_eq!(unique, tokens(&["pkg", "pkg:mod"]));
    }

    #[test]
    fn test_by_name_wrapper() {
        let mut names = vec![ByName("pkg:mod:b"), ByName("pkg:mod:a")];
        names.sort();
        assert_eq!(names[0].0, "pkg:mod:a");

        let mut names = vec![
            ByName(crate::Name::new("beta").unwrap()),
            ByName(crate::Name::new("alpha").unwrap()),
        ];
        names.sort();
        assert_eq!(names[0].0.as_str(), "alpha");
    }

    #[test]
    fn test_addresses_order_through_tokens() {
        let addresses = ["pkg:mod:Foo:x", "pkg:mod", "pkg"]
            .into_iter()
            .map(|s| crate::Address::parse(s).unwrap());
        let ordered = sorted(addresses.map(Token::from));
        let names: Vec<&str> = ordered.iter().map(Token::as_str).collect();
        assert_eq!(names, vec!["pkg", "pkg:mod", "pkg:mod:Foo:x"]);
    }
}
