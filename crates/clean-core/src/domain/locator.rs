//! Structural locator: finds insertion points in generated Go source.
//!
//! There is no parse tree. Declarations are found by their literal opener
//! text (`type Name interface {\n`, `type name struct {\n`) and the end of a
//! struct is found by brace counting. The brace scanner steps over comments
//! and string, raw string and rune literals, so braces inside them never
//! move the depth counter.

use crate::domain::error::DomainError;

/// Literal opener of an interface declaration, including the body brace.
pub fn interface_opener(name: &str) -> String {
    format!("type {name} interface {{\n")
}

/// Literal opener of a struct declaration, including the body brace.
pub fn record_opener(name: &str) -> String {
    format!("type {name} struct {{\n")
}

/// Offset right after the opener of interface `interface_name`.
///
/// New method signatures go here, ahead of anything already in the body.
/// The first occurrence of the opener wins.
pub fn locate_interface_body(text: &str, interface_name: &str) -> Result<usize, DomainError> {
    let opener = interface_opener(interface_name);
    text.find(&opener)
        .map(|ix| ix + opener.len())
        .ok_or_else(|| DomainError::interface_not_found(interface_name))
}

/// Offset just past the closing brace of struct `record_name`.
///
/// Methods spliced here become siblings of the struct declaration.
pub fn locate_record_method_region(text: &str, record_name: &str) -> Result<usize, DomainError> {
    let start = text
        .find(&record_opener(record_name))
        .ok_or_else(|| DomainError::record_not_found(record_name))?;

    BraceScanner::new(&text.as_bytes()[start..])
        .closing_offset()
        .map(|rel| start + rel)
        .ok_or_else(|| DomainError::unbalanced_record(record_name))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lexeme {
    Code,
    LineComment,
    BlockComment,
    Interpreted,
    Raw,
    Rune,
}

/// Minimal Go lexer that only cares about which braces are code.
struct BraceScanner<'a> {
    bytes: &'a [u8],
}

impl<'a> BraceScanner<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    /// Offset just past the brace that brings depth back to zero.
    fn closing_offset(&self) -> Option<usize> {
        let bytes = self.bytes;
        let mut state = Lexeme::Code;
        let mut depth = 0usize;
        let mut i = 0;

        while i < bytes.len() {
            let b = bytes[i];
            let next = bytes.get(i + 1).copied();

            match state {
                Lexeme::Code => match b {
                    b'/' if next == Some(b'/') => {
                        state = Lexeme::LineComment;
                        i += 1;
                    }
                    b'/' if next == Some(b'*') => {
                        state = Lexeme::BlockComment;
                        i += 1;
                    }
                    b'"' => state = Lexeme::Interpreted,
                    b'`' => state = Lexeme::Raw,
                    b'\'' => state = Lexeme::Rune,
                    b'{' => depth += 1,
                    b'}' if depth > 0 => {
                        depth -= 1;
                        if depth == 0 {
                            return Some(i + 1);
                        }
                    }
                    _ => {}
                },
                Lexeme::LineComment => {
                    if b == b'\n' {
                        state = Lexeme::Code;
                    }
                }
                Lexeme::BlockComment => {
                    if b == b'*' && next == Some(b'/') {
                        state = Lexeme::Code;
                        i += 1;
                    }
                }
                Lexeme::Interpreted | Lexeme::Rune => {
                    let close = if state == Lexeme::Rune { b'\'' } else { b'"' };
                    if b == b'\\' {
                        i += 1;
                    } else if b == close || b == b'\n' {
                        state = Lexeme::Code;
                    }
                }
                Lexeme::Raw => {
                    if b == b'`' {
                        state = Lexeme::Code;
                    }
                }
            }
            i += 1;
        }

        None
    }
}
