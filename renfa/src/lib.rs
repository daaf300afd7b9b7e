#![deny(rust_2018_idioms)]
#![deny(future_incompatible)]

//! Compile regular expressions into epsilon-NFAs.
//!
//! Compilation runs in three stages: the lexer/normalizer splits the raw
//! pattern into tokens and inserts explicit concatenation markers
//! ([`token`]), the shunting-yard pass reorders the tokens into postfix
//! ([`postfix`]), and the builder assembles the automaton bottom-up with
//! Thompson's construction ([`builder`]). The resulting [`Nfa`] exposes its
//! start state, accept state, and transition triples; [`dot`] renders it as
//! GraphViz text.

pub mod builder;
pub mod dot;
mod error;
pub mod postfix;
pub mod token;

pub use automata;
pub use automata::Nfa;
pub use error::{CompileError, CompileResult};

/// Compile a pattern into an epsilon-NFA.
///
/// Supported syntax: letters and digits, `(`/`)` grouping, `*` repetition,
/// `?` optional, `|` union, `[...]` character classes with `a-z` ranges, and
/// `![...]`/`!c` negation resolved against printable ASCII.
///
/// ```
/// let nfa = renfa::compile("a|b").unwrap();
///
/// assert!(nfa.accepts("a".chars()));
/// assert!(nfa.accepts("b".chars()));
/// assert!(!nfa.accepts("ab".chars()));
/// ```
pub fn compile(pattern: &str) -> CompileResult<Nfa> {
    builder::build(postfix::to_postfix(pattern)?)
}
