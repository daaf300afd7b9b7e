use crate::token::Op;

/// Alias for [`Result`] for [`CompileError`].
pub type CompileResult<T> = std::result::Result<T, CompileError>;

/// Error returned when attempting to compile an invalid pattern. Every
/// variant aborts the whole compilation; there is no partial recovery.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum CompileError {
    /// A `[` or `![` with no matching `]` before the end of the pattern.
    #[error("unclosed character class starting at position {pos}")]
    UnclosedClass { pos: usize },

    /// A `)` with no matching `(`, or a `(` still open at the end of the
    /// pattern.
    #[error("mismatched parenthesis at position {pos}")]
    MismatchedParentheses { pos: usize },

    /// A character with no meaning at its position: a stray `]`, a `!` not
    /// followed by a letter, digit, or `[`, or a character outside the
    /// pattern alphabet.
    #[error("unexpected token {token:?} at position {pos}")]
    UnexpectedToken { token: char, pos: usize },

    /// An operator reached the builder with too few operands on the stack.
    #[error("operator `{op}` is missing an operand")]
    InsufficientOperands { op: Op },

    /// The operand stack did not reduce to exactly one automaton.
    #[error("incomplete expression")]
    IncompleteExpression,
}
