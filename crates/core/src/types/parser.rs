//! Reader for textual type signatures.
//!
//! ```text
//! signature := argument
//! argument  := ("out" | "in") type | "*" | "?" | type
//! type      := name ("<" argument ("," argument)* ">")?
//! name      := "dyn" ident | ident "?"?
//! ```
//!
//! Display aliases are mapped back to raw names (`Int` reads as `i32`,
//! `Any?` as the root type) and `Nothing` reads as an unresolved argument.

use crate::errors::CoreError;
use crate::types::alias::canonical_name;
use crate::types::descriptor::{Projection, TypeDescriptor};
use crate::types::names::NOTHING_TYPE_NAME;

/// Deepest bracket nesting accepted in a signature
pub const MAX_DEPTH: usize = 64;

pub(crate) fn parse_signature(input: &str) -> Result<TypeDescriptor, CoreError> {
    let mut parser = SignatureParser::new(input);

    parser.skip_whitespace();
    if parser.at_end() {
        return Err(parser.error("empty type signature"));
    }

    let descriptor = parser.parse_argument()?;

    parser.skip_whitespace();
    if !parser.at_end() {
        return Err(parser.error("unexpected trailing input"));
    }

    Ok(descriptor)
}

struct SignatureParser<'a> {
    input: &'a str,
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
}

impl<'a> SignatureParser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
            depth: 0,
        }
    }

    fn parse_argument(&mut self) -> Result<TypeDescriptor, CoreError> {
        self.skip_whitespace();

        if self.eat(b'*') || self.eat(b'?') {
            return Ok(TypeDescriptor::unresolved());
        }

        let start = self.pos;
        let word = self.parse_identifier()?;
        let projection = match word {
            "out" => Projection::Out,
            "in" => Projection::In,
            _ => {
                self.pos = start;
                return self.parse_type();
            }
        };

        if !self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            return Err(self.error(format!("expected a type after '{}'", word)));
        }
        self.skip_whitespace();

        if self.peek() == Some(b'*') {
            return Err(self.error("a star argument cannot be projected"));
        }

        Ok(self.parse_type()?.projected(projection))
    }

    fn parse_type(&mut self) -> Result<TypeDescriptor, CoreError> {
        self.skip_whitespace();
        let name_start = self.pos;
        let name = self.parse_name()?;

        self.skip_whitespace();
        let mut arguments = Vec::new();
        if self.eat(b'<') {
            self.depth += 1;
            if self.depth > MAX_DEPTH {
                return Err(self.error("type signature nested too deeply"));
            }
            loop {
                arguments.push(self.parse_argument()?);
                self.skip_whitespace();
                if self.eat(b',') {
                    continue;
                }
                if self.eat(b'>') {
                    break;
                }
                return Err(self.error("expected ',' or '>'"));
            }
            self.depth -= 1;
        }

        if name == NOTHING_TYPE_NAME {
            if !arguments.is_empty() {
                return Err(CoreError::type_syntax(
                    self.input,
                    name_start,
                    "Nothing takes no type arguments",
                ));
            }
            return Ok(TypeDescriptor::unresolved());
        }

        let base_name = canonical_name(&name).map(str::to_string).unwrap_or(name);
        Ok(TypeDescriptor::generic(base_name, arguments))
    }

    fn parse_name(&mut self) -> Result<String, CoreError> {
        let ident = self.parse_identifier()?;

        if ident == "dyn" {
            if !self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
                return Err(self.error("expected a trait name after 'dyn'"));
            }
            self.skip_whitespace();
            let trait_name = self.parse_identifier()?;
            return Ok(format!("dyn {}", trait_name));
        }

        let mut name = ident.to_string();
        if self.eat(b'?') {
            name.push('?');
        }
        Ok(name)
    }

    fn parse_identifier(&mut self) -> Result<&'a str, CoreError> {
        let start = self.pos;

        match self.peek() {
            Some(b) if b.is_ascii_alphabetic() || b == b'_' => self.pos += 1,
            Some(_) => return Err(self.error("expected type name")),
            None => return Err(self.error("unexpected end of signature")),
        }

        while let Some(b) = self.peek() {
            if b.is_ascii_alphanumeric() || b == b'_' || b == b':' {
                self.pos += 1;
            } else {
                break;
            }
        }

        Ok(&self.input[start..self.pos])
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn error(&self, message: impl Into<String>) -> CoreError {
        CoreError::type_syntax(self.input, self.pos, message)
    }
}
