use renfa::compile;

include!("macros.rs");

#[test]
fn test_concat() {
    let exprs = ["ab", "(ab)", "(a)(b)", "a(b)", "(a)b"];
    let valids = ["ab"];
    let invalids = ["", "a", "b", "ba", "aab", "abb"];
    run_tests!(&exprs, &valids, &invalids);

    let exprs = ["abc", "(ab)c", "a(bc)", "(a)(b)(c)"];
    let valids = ["abc"];
    let invalids = ["", "ab", "bc", "abcc", "aabc", "cba"];
    run_tests!(&exprs, &valids, &invalids);
}

#[test]
fn test_concat_with_class() {
    let exprs = ["[ab]b"];
    let valids = ["ab", "bb"];
    let invalids = ["", "a", "b", "cb", "abb"];
    run_tests!(&exprs, &valids, &invalids);

    let exprs = ["a[bc]"];
    let valids = ["ab", "ac"];
    let invalids = ["", "a", "ad", "abc"];
    run_tests!(&exprs, &valids, &invalids);
}
