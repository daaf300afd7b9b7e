use crate::error::{CompileError, CompileResult};
use crate::token::{ClassItem, Op, Token};

use std::char;
use std::collections::BTreeSet;

use automata::{Nfa, StateIds};
use log::debug;

/// Inclusive bounds of the alphabet negated forms are resolved against:
/// printable ASCII, 95 characters.
const ALPHABET_FIRST: char = ' ';
const ALPHABET_LAST: char = '~';

/// Every character a negated class or negated literal can match.
fn alphabet() -> impl Iterator<Item = char> {
    (ALPHABET_FIRST as u32..=ALPHABET_LAST as u32).filter_map(char::from_u32)
}

/// Expand class items into the concrete set of characters they cover.
/// Reversed range endpoints are swapped before expansion, so `[c-a]` and
/// `[a-c]` cover the same set.
fn resolve_items(items: &[ClassItem]) -> BTreeSet<char> {
    let mut set = BTreeSet::new();
    for item in items {
        match *item {
            ClassItem::Single(c) => {
                set.insert(c);
            }
            ClassItem::Range(lo, hi) => {
                let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
                set.extend((lo as u32..=hi as u32).filter_map(char::from_u32));
            }
        }
    }
    set
}

/// The alphabet minus the excluded set.
fn complement(excluded: &BTreeSet<char>) -> BTreeSet<char> {
    alphabet().filter(|c| !excluded.contains(c)).collect()
}

/// Assemble an epsilon-NFA from a postfix token stream using Thompson's
/// construction. Each leaf and each operator except concatenation allocates
/// exactly one fresh start/accept pair; operands are consumed from an
/// explicit stack and their transition tables merged into the result.
///
/// The stream must come from [`crate::postfix::to_postfix`]; in particular
/// it contains no parentheses.
pub fn build(postfix: Vec<Token>) -> CompileResult<Nfa> {
    let mut ids = StateIds::new();
    let mut stack: Vec<Nfa> = Vec::new();

    for token in postfix {
        let nfa = match token {
            Token::Literal(c) => Nfa::leaf(&mut ids, Some(c)),
            Token::Class(items) => Nfa::leaf(&mut ids, resolve_items(&items)),
            Token::NegatedClass(items) => {
                Nfa::leaf(&mut ids, complement(&resolve_items(&items)))
            }
            Token::NegatedLiteral(c) => {
                let mut excluded = BTreeSet::new();
                excluded.insert(c);
                Nfa::leaf(&mut ids, complement(&excluded))
            }
            Token::Op(op) => apply_op(&mut ids, &mut stack, op)?,
            Token::LParen | Token::RParen => {
                unreachable!("parentheses are never emitted by the postfix compiler")
            }
        };
        stack.push(nfa);
    }

    let nfa = stack.pop().ok_or(CompileError::IncompleteExpression)?;
    if !stack.is_empty() {
        // Marker insertion is total, so a multi-automaton stack means the
        // input stream did not come from the postfix compiler.
        return Err(CompileError::IncompleteExpression);
    }

    debug!(
        "compiled automaton: {} states, start {}, accept {}",
        ids.allocated(),
        nfa.start(),
        nfa.accept()
    );
    Ok(nfa)
}

/// Pop the operands an operator needs and push the composed result.
fn apply_op(ids: &mut StateIds, stack: &mut Vec<Nfa>, op: Op) -> CompileResult<Nfa> {
    let missing = || CompileError::InsufficientOperands { op };

    let nfa = match op {
        Op::Union => {
            let y = stack.pop().ok_or_else(missing)?;
            let x = stack.pop().ok_or_else(missing)?;
            Nfa::union(ids, x, y)
        }
        Op::Star => Nfa::star(ids, stack.pop().ok_or_else(missing)?),
        Op::Optional => Nfa::optional(ids, stack.pop().ok_or_else(missing)?),
        Op::Concat => {
            let y = stack.pop().ok_or_else(missing)?;
            let x = stack.pop().ok_or_else(missing)?;
            Nfa::concat(x, y)
        }
    };

    Ok(nfa)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_is_printable_ascii() {
        let all: Vec<_> = alphabet().collect();
        assert_eq!(95, all.len());
        assert_eq!(Some(&' '), all.first());
        assert_eq!(Some(&'~'), all.last());
    }

    #[test]
    fn test_resolve_range() {
        let set = resolve_items(&[ClassItem::Range('a', 'c')]);
        assert_eq!(vec!['a', 'b', 'c'], set.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_resolve_reversed_range() {
        let forward = resolve_items(&[ClassItem::Range('a', 'c')]);
        let reversed = resolve_items(&[ClassItem::Range('c', 'a')]);
        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_resolve_overlaps_collapse() {
        let set = resolve_items(&[
            ClassItem::Range('a', 'd'),
            ClassItem::Range('c', 'f'),
            ClassItem::Single('e'),
        ]);
        assert_eq!(6, set.len());
    }

    #[test]
    fn test_complement_partitions_alphabet() {
        let excluded = resolve_items(&[ClassItem::Range('a', 'c')]);
        let allowed = complement(&excluded);
        assert_eq!(95, excluded.len() + allowed.len());
        assert!(allowed.contains(&'d'));
        assert!(!allowed.contains(&'b'));
    }

    #[test]
    fn test_empty_stream_is_incomplete() {
        assert_eq!(Err(CompileError::IncompleteExpression), build(Vec::new()));
    }

    #[test]
    fn test_operator_without_operand() {
        assert_eq!(
            Err(CompileError::InsufficientOperands { op: Op::Star }),
            build(vec![Token::Op(Op::Star)])
        );
        assert_eq!(
            Err(CompileError::InsufficientOperands { op: Op::Union }),
            build(vec![Token::Literal('a'), Token::Op(Op::Union)])
        );
    }

    #[test]
    fn test_leftover_operands_are_incomplete() {
        // Two operands and no joining operator: not a valid postfix stream.
        assert_eq!(
            Err(CompileError::IncompleteExpression),
            build(vec![Token::Literal('a'), Token::Literal('b')])
        );
    }
}
