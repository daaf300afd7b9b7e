use crate::error::{CompileError, CompileResult};

use std::fmt;
use std::iter::Peekable;
use std::str::CharIndices;

/// A pattern operator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Op {
    /// Union of two alternatives (`|`).
    Union,
    /// Zero or more repetitions (`*`).
    Star,
    /// Zero or one occurrence (`?`).
    Optional,
    /// The explicit concatenation marker inserted by [`insert_concat`].
    Concat,
}

impl Op {
    /// Binding strength; higher binds tighter.
    #[inline]
    pub fn precedence(self) -> u8 {
        match self {
            Op::Star | Op::Optional => 3,
            Op::Concat => 2,
            Op::Union => 1,
        }
    }
}

impl fmt::Display for Op {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Op::Union => "|",
            Op::Star => "*",
            Op::Optional => "?",
            Op::Concat => ".",
        })
    }
}

/// One entry of a bracketed character class.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClassItem {
    /// A lone character.
    Single(char),
    /// An inclusive range. The endpoints may arrive reversed; the builder
    /// swaps them before expansion.
    Range(char, char),
}

impl fmt::Display for ClassItem {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ClassItem::Single(c) => write!(f, "{}", c),
            ClassItem::Range(lo, hi) => write!(f, "{}-{}", lo, hi),
        }
    }
}

/// A lexed pattern token. Classification happens exactly once, in [`lex`];
/// every later stage dispatches by matching on the variant instead of
/// re-inspecting raw characters.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Token {
    /// A single letter or digit.
    Literal(char),
    /// A bracketed class `[...]`, captured whole.
    Class(Vec<ClassItem>),
    /// A negated bracketed class `![...]`, captured whole.
    NegatedClass(Vec<ClassItem>),
    /// A negated single character `!c`.
    NegatedLiteral(char),
    /// An operator.
    Op(Op),
    /// A grouping `(`.
    LParen,
    /// A grouping `)`.
    RParen,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(c) => write!(f, "{}", c),
            Token::Class(items) => {
                f.write_str("[")?;
                for item in items {
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Token::NegatedClass(items) => {
                f.write_str("![")?;
                for item in items {
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Token::NegatedLiteral(c) => write!(f, "!{}", c),
            Token::Op(op) => write!(f, "{}", op),
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
        }
    }
}

/// Render a token stream back into pattern notation, mainly for logs and
/// error messages.
pub fn pattern_string<'t, I>(tokens: I) -> String
where
    I: IntoIterator<Item = &'t Token>,
{
    tokens.into_iter().map(ToString::to_string).collect()
}

/// Split a raw pattern into tokens, each paired with the character position
/// it started at. Bracketed classes and negated forms are captured as single
/// tokens.
pub fn lex(pattern: &str) -> CompileResult<Vec<(usize, Token)>> {
    let mut tokens = Vec::new();
    let mut input = pattern.char_indices().peekable();

    while let Some((pos, c)) = input.next() {
        let token = match c {
            '(' => Token::LParen,
            ')' => Token::RParen,
            '|' => Token::Op(Op::Union),
            '*' => Token::Op(Op::Star),
            '?' => Token::Op(Op::Optional),
            '[' => Token::Class(lex_class_body(&mut input, pos)?),
            '!' => match input.peek() {
                Some(&(_, '[')) => {
                    input.next();
                    Token::NegatedClass(lex_class_body(&mut input, pos)?)
                }
                Some(&(_, next)) if next.is_ascii_alphanumeric() => {
                    input.next();
                    Token::NegatedLiteral(next)
                }
                _ => return Err(CompileError::UnexpectedToken { token: c, pos }),
            },
            c if c.is_ascii_alphanumeric() => Token::Literal(c),
            _ => return Err(CompileError::UnexpectedToken { token: c, pos }),
        };
        tokens.push((pos, token));
    }

    Ok(tokens)
}

/// Scan a class body up to its closing `]`, grouping `a-z` runs into ranges
/// and everything else into singles. A `-` with no character on both sides
/// is an ordinary class member.
fn lex_class_body(
    input: &mut Peekable<CharIndices<'_>>,
    open: usize,
) -> CompileResult<Vec<ClassItem>> {
    let mut body = Vec::new();
    loop {
        match input.next() {
            Some((_, ']')) => break,
            Some((_, c)) => body.push(c),
            None => return Err(CompileError::UnclosedClass { pos: open }),
        }
    }

    let mut items = Vec::new();
    let mut i = 0;
    while i < body.len() {
        if i + 2 < body.len() && body[i + 1] == '-' {
            items.push(ClassItem::Range(body[i], body[i + 2]));
            i += 3;
        } else {
            items.push(ClassItem::Single(body[i]));
            i += 1;
        }
    }
    Ok(items)
}

/// Insert an explicit concatenation marker between every adjacent pair of
/// tokens where one operand ends and the next begins. Working on tokens
/// makes the insertion total: every adjacency is either joined here or
/// separated by an operator, so the builder never sees an implicit one.
pub fn insert_concat(tokens: Vec<(usize, Token)>) -> Vec<(usize, Token)> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut input = tokens.into_iter().peekable();

    while let Some((pos, token)) = input.next() {
        let join = match input.peek() {
            Some((next_pos, next)) if ends_operand(&token) && begins_operand(next) => {
                Some(*next_pos)
            }
            _ => None,
        };
        output.push((pos, token));
        if let Some(next_pos) = join {
            output.push((next_pos, Token::Op(Op::Concat)));
        }
    }

    output
}

/// Whether a token can be the right edge of an operand.
fn ends_operand(token: &Token) -> bool {
    match token {
        Token::Literal(_)
        | Token::Class(_)
        | Token::NegatedClass(_)
        | Token::NegatedLiteral(_)
        | Token::RParen => true,
        Token::Op(Op::Star) | Token::Op(Op::Optional) => true,
        _ => false,
    }
}

/// Whether a token can be the left edge of an operand.
fn begins_operand(token: &Token) -> bool {
    match token {
        Token::Literal(_)
        | Token::Class(_)
        | Token::NegatedClass(_)
        | Token::NegatedLiteral(_)
        | Token::LParen => true,
        _ => false,
    }
}
