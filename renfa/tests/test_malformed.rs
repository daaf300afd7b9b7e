use renfa::{compile, CompileError};

macro_rules! assert_errors {
    ($exprs:expr, $variant:pat) => {{
        $exprs.iter().for_each(|&expr| {
            match compile(expr) {
                Err($variant) => {}
                other => panic!(r#""{}" produced {:?}"#, expr, other),
            }
        });
    }};
}

#[test]
fn test_unclosed_class() {
    let exprs = ["[", "[ab", "a[bc", "![", "![ab", "a![bc", "[a-"];
    assert_errors!(&exprs, CompileError::UnclosedClass { .. });
}

#[test]
fn test_mismatched_parentheses() {
    let exprs = ["(", ")", "a(", "(()", "(ab", "a)*", "(a))"];
    assert_errors!(&exprs, CompileError::MismatchedParentheses { .. });
}

#[test]
fn test_insufficient_operands() {
    let exprs = ["*", "?", "|", "a|", "|a", "*a", "**", "a|*"];
    assert_errors!(&exprs, CompileError::InsufficientOperands { .. });
}

#[test]
fn test_incomplete_expression() {
    let exprs = ["", "()", "(())"];
    assert_errors!(&exprs, CompileError::IncompleteExpression);
}

#[test]
fn test_unexpected_token() {
    let exprs = ["]", "a]", "!", "a!", "!(a)", "a-b", "a b", "&"];
    assert_errors!(&exprs, CompileError::UnexpectedToken { .. });
}

#[test]
fn test_error_positions() {
    assert_eq!(
        Err(CompileError::UnclosedClass { pos: 1 }),
        compile("a[bc")
    );
    assert_eq!(
        Err(CompileError::MismatchedParentheses { pos: 2 }),
        compile("ab)")
    );
    assert_eq!(
        Err(CompileError::UnexpectedToken { token: ']', pos: 2 }),
        compile("ab]")
    );
}
