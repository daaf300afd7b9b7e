use crate::error::{CompileError, CompileResult};
use crate::token::{insert_concat, lex, pattern_string, Token};

use log::{debug, trace};

/// Compile a raw pattern into a postfix token stream ready for the automaton
/// builder: lex, insert explicit concatenation markers, then reorder with
/// the shunting-yard algorithm.
pub fn to_postfix(pattern: &str) -> CompileResult<Vec<Token>> {
    let tokens = insert_concat(lex(pattern)?);
    debug!(
        "normalized pattern: {}",
        pattern_string(tokens.iter().map(|(_, t)| t))
    );

    let postfix = shunt(tokens)?;
    debug!("postfix: {}", pattern_string(&postfix));
    Ok(postfix)
}

/// Reorder an infix token stream into postfix. Operands pass straight
/// through; operators wait on a stack until an operator of lower precedence
/// (or a group boundary) flushes them. Parentheses group and are never
/// emitted.
fn shunt(tokens: Vec<(usize, Token)>) -> CompileResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<(usize, Token)> = Vec::new();

    for (pos, token) in tokens {
        match token {
            Token::Literal(_)
            | Token::Class(_)
            | Token::NegatedClass(_)
            | Token::NegatedLiteral(_) => {
                trace!("operand: {}", token);
                output.push(token);
            }
            Token::LParen => stack.push((pos, Token::LParen)),
            Token::RParen => loop {
                match stack.pop() {
                    Some((_, Token::LParen)) => break,
                    Some((_, op)) => {
                        trace!("popped {} for `)`", op);
                        output.push(op);
                    }
                    None => return Err(CompileError::MismatchedParentheses { pos }),
                }
            },
            Token::Op(op) => {
                loop {
                    let top = match stack.last() {
                        Some((_, Token::Op(top))) if top.precedence() >= op.precedence() => *top,
                        _ => break,
                    };
                    stack.pop();
                    trace!("popped {} for {}", top, op);
                    output.push(Token::Op(top));
                }
                stack.push((pos, Token::Op(op)));
            }
        }
    }

    while let Some((pos, token)) = stack.pop() {
        match token {
            Token::LParen => return Err(CompileError::MismatchedParentheses { pos }),
            op => output.push(op),
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn postfix(pattern: &str) -> String {
        pattern_string(&to_postfix(pattern).unwrap())
    }

    #[test]
    fn test_concat() {
        assert_eq!("ab.", postfix("ab"));
        assert_eq!("ab.c.", postfix("abc"));
    }

    #[test]
    fn test_union() {
        assert_eq!("ab|", postfix("a|b"));
        assert_eq!("ab|c|", postfix("a|b|c"));
    }

    #[test]
    fn test_precedence() {
        // `*` binds tighter than concatenation, which binds tighter than `|`.
        assert_eq!("ab*.", postfix("ab*"));
        assert_eq!("ab*c.|", postfix("a|b*c"));
        assert_eq!("ab.c|", postfix("ab|c"));
        assert_eq!("ab?.", postfix("ab?"));
    }

    #[test]
    fn test_groups() {
        assert_eq!("ab|*", postfix("(a|b)*"));
        assert_eq!("ab|c.", postfix("(a|b)c"));
        assert_eq!("ab.", postfix("(a)(b)"));
        assert_eq!("a", postfix("((a))"));
    }

    #[test]
    fn test_class_tokens_pass_whole() {
        assert_eq!("[a-c]d.", postfix("[a-c]d"));
        assert_eq!("![a-c]", postfix("![a-c]"));
        assert_eq!("a?![b].", postfix("a?![b]"));
        assert_eq!("!ab|", postfix("!a|b"));
    }

    #[test]
    fn test_mismatched_parentheses() {
        assert_eq!(
            Err(CompileError::MismatchedParentheses { pos: 0 }),
            to_postfix("(")
        );
        assert_eq!(
            Err(CompileError::MismatchedParentheses { pos: 1 }),
            to_postfix("a)")
        );
        assert_eq!(
            Err(CompileError::MismatchedParentheses { pos: 0 }),
            to_postfix("(()")
        );
        assert_eq!(
            Err(CompileError::MismatchedParentheses { pos: 0 }),
            to_postfix("(ab")
        );
    }

    #[test]
    fn test_empty_pattern() {
        assert_eq!(Vec::<Token>::new(), to_postfix("").unwrap());
    }
}
