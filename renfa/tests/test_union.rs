use renfa::compile;

include!("macros.rs");

#[test]
fn test_union() {
    let exprs = ["a|b", "(a|b)", "(a)|b", "a|(b)", "((a)|b)"];
    let valids = ["a", "b"];
    let invalids = ["", "c", "ab", "ba"];
    run_tests!(&exprs, &valids, &invalids);

    let exprs = ["a|b|c", "(a|b)|c", "(a)|b|(c)", "a|(b|c)"];
    let valids = ["a", "b", "c"];
    let invalids = ["", "d", "ab", "bc"];
    run_tests!(&exprs, &valids, &invalids);
}

#[test]
fn test_union_of_concats() {
    let exprs = ["ab|cd", "(ab)|(cd)"];
    let valids = ["ab", "cd"];
    let invalids = ["", "a", "b", "ac", "ad", "abcd"];
    run_tests!(&exprs, &valids, &invalids);
}
