//! Recursive-descent parser for type tokens.
//!
//! ```text
//! Type     = "*" Type
//!          | "[]" Type
//!          | "map[" Type "]" Type
//!          | "(" [ Type ( "," Type )* ] ")" [ Type ]
//!          | Name
//!          | ModuleMember
//! ```
//!
//! A function's return type is optional and is taken whenever the next character
//! can start a type, so `()(a)` is a function returning a function.
//!
//! Nesting is capped at [`MAX_DEPTH`] layers of decoration.

use super::Type;
use crate::address::ModuleMember;
use crate::error::{Result, TokenError};
use crate::naming::Name;
use crate::token::TOKEN_DELIMITER;

pub const POINTER_PREFIX: &str = "*";
pub const ARRAY_PREFIX: &str = "[]";
pub const MAP_PREFIX: &str = "map[";
pub const MAP_KEY_CLOSE: &str = "]";
pub const FUNCTION_OPEN: &str = "(";
pub const FUNCTION_CLOSE: &str = ")";
pub const FUNCTION_SEPARATOR: &str = ",";

/// Deepest nesting of decorated types accepted by [`parse_type`].
pub const MAX_DEPTH: usize = 256;

/// Whether the outer shape of `s` is a decorated type. Only the prefix is
/// inspected; the element types are not validated.
pub fn has_decoration(s: &str) -> bool {
    s.starts_with(POINTER_PREFIX)
        || s.starts_with(ARRAY_PREFIX)
        || s.starts_with(MAP_PREFIX)
        || s.starts_with(FUNCTION_OPEN)
}

/// Parse a complete type token.
pub fn parse_type(src: &str) -> Result<Type> {
    let mut parser = Parser {
        src,
        pos: 0,
        depth: 0,
    };
    let ty = parser.parse_type()?;
    if parser.pos != src.len() {
        return Err(parser.error("unexpected trailing input"));
    }
    Ok(ty)
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn eat(&mut self, prefix: &str) -> bool {
        if self.rest().starts_with(prefix) {
            self.pos += prefix.len();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, prefix: &str) -> Result<()> {
        if self.eat(prefix) {
            Ok(())
        } else {
            Err(self.error(format!("expected '{}'", prefix)))
        }
    }

    fn error(&self, message: impl Into<String>) -> TokenError {
        TokenError::TypeSyntax {
            token: self.src.to_string(),
            offset: self.pos,
            message: message.into(),
        }
    }

    fn parse_type(&mut self) -> Result<Type> {
        if self.depth == MAX_DEPTH {
            return Err(self.error("type nested too deeply"));
        }
        self.depth += 1;
        let ty = self.parse_layer();
        self.depth -= 1;
        ty
    }

    fn parse_layer(&mut self) -> Result<Type> {
        if self.eat(POINTER_PREFIX) {
            return Ok(Type::Pointer(Box::new(self.parse_type()?)));
        }
        if self.eat(ARRAY_PREFIX) {
            return Ok(Type::Array(Box::new(self.parse_type()?)));
        }
        if self.eat(MAP_PREFIX) {
            let key = self.parse_type()?;
            self.expect(MAP_KEY_CLOSE)?;
            let value = self.parse_type()?;
            return Ok(Type::Map(Box::new(key), Box::new(value)));
        }
        if self.eat(FUNCTION_OPEN) {
            return self.parse_function();
        }
        self.parse_named()
    }

    // The opening parenthesis has already been consumed.
    fn parse_function(&mut self) -> Result<Type> {
        let mut params = Vec::new();
        if !self.eat(FUNCTION_CLOSE) {
            loop {
                params.push(self.parse_type()?);
                if self.eat(FUNCTION_CLOSE) {
                    break;
                }
                self.expect(FUNCTION_SEPARATOR)?;
            }
        }
        let returns = if self.at_type_start() {
            Some(Box::new(self.parse_type()?))
        } else {
            None
        };
        Ok(Type::Function(params, returns))
    }

    fn at_type_start(&self) -> bool {
        match self.rest().chars().next() {
            Some(c) => !matches!(c, ']' | ',' | ')'),
            None => false,
        }
    }

    fn parse_named(&mut self) -> Result<Type> {
        let rest = self.rest();
        let len = rest
            .find(|c| matches!(c, '[' | ']' | '(' | ')' | ',' | '*'))
            .unwrap_or(rest.len());
        if len == 0 {
            return Err(self.error("expected a type"));
        }
        self.pos += len;
        named_type(&rest[..len])
    }
}

fn named_type(text: &str) -> Result<Type> {
    match text.matches(TOKEN_DELIMITER).count() {
        0 => Name::new(text).map(Type::Primitive),
        2 => ModuleMember::parse(text).map(Type::Named),
        _ => Err(TokenError::NotAType(text.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syntax_offset(src: &str) -> Option<usize> {
        match parse_type(src) {
            Err(TokenError::TypeSyntax { offset, .. }) => Some(offset),
            _ => None,
        }
    }

    #[test]
    fn test_has_decoration() {
        assert!(has_decoration("*int"));
        assert!(has_decoration("[]int"));
        assert!(has_decoration("map[string]int"));
        assert!(has_decoration("(int)"));
        assert!(!has_decoration("map"));
        assert!(!has_decoration("mapping"));
        assert!(!has_decoration("pkg:mod:Foo"));
    }

    #[test]
    fn test_nested_map_key() {
        let ty = parse_type("map[map[string]int][]bool").unwrap();
        let key = ty.key().unwrap();
        assert!(key.is_map());
        assert_eq!(key.to_string(), "map[string]int");
        assert_eq!(ty.value().unwrap().to_string(), "[]bool");
    }

    #[test]
    fn test_function_shapes() {
        let ty = parse_type("()").unwrap();
        assert_eq!(ty.parameters().unwrap().len(), 0);
        assert!(ty.returns().is_none());

        let ty = parse_type("(string,pkg:mod:Foo)bool").unwrap();
        assert_eq!(ty.parameters().unwrap().len(), 2);
        assert_eq!(ty.returns().unwrap().to_string(), "bool");

        let ty = parse_type("()(int)").unwrap();
        let inner = ty.returns().unwrap();
        assert!(inner.is_function());
        assert!(inner.returns().is_none());
    }

    #[test]
    fn test_function_in_map_key() {
        let ty = parse_type("map[(int)]string").unwrap();
        assert!(ty.key().unwrap().is_function());
        assert!(ty.key().unwrap().returns().is_none());
    }

    #[test]
    fn test_syntax_errors() {
        assert_eq!(syntax_offset(""), Some(0));
        assert_eq!(syntax_offset("[]"), Some(2));
        assert_eq!(syntax_offset("map[string"), Some(10));
        assert_eq!(syntax_offset("(int"), Some(4));
        assert_eq!(syntax_offset("(int,)"), Some(5));
        assert_eq!(syntax_offset("int]"), Some(3));
        assert_eq!(syntax_offset("[int]"), Some(0));
    }

    #[test]
    fn test_nesting_limit() {
        let deepest = format!("{}int", "*".repeat(MAX_DEPTH - 1));
        assert!(parse_type(&deepest).is_ok());

        let too_deep = format!("{}int", "*".repeat(MAX_DEPTH));
        assert_eq!(syntax_offset(&too_deep), Some(MAX_DEPTH));

        let err = parse_type(&format!("{}int", "*".repeat(10_000))).unwrap_err();
        assert!(err.to_string().contains("type nested too deeply"));
    }

    #[test]
    fn test_nesting_limit_counts_every_decoration() {
        let maps = format!("{}int{}", "map[".repeat(MAX_DEPTH), "]int".repeat(MAX_DEPTH));
        assert!(parse_type(&maps).is_err());
        let funcs = format!("{}{}", "(".repeat(10_000), ")".repeat(10_000));
        assert!(parse_type(&funcs).is_err());
        assert!(parse_type(&"()".repeat(10_000)).is_err());
    }

    #[test]
    fn test_named_types_must_be_members() {
        assert_eq!(
            parse_type("[]pkg:mod"),
            Err(TokenError::NotAType("pkg:mod".to_string()))
        );
        assert_eq!(
            parse_type("*pkg:mod:Foo:bar"),
            Err(TokenError::NotAType("pkg:mod:Foo:bar".to_string()))
        );
        assert_eq!(
            parse_type("[]my-type"),
            Err(TokenError::InvalidName("my-type".to_string()))
        );
    }
}
