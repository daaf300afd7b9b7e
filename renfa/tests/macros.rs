#[allow(unused_macros)]

macro_rules! run_tests {
    ($exprs:expr, $valids:expr, $invalids:expr) => {{
        $exprs.iter().for_each(|&expr| {
            let nfa = compile(expr).unwrap();
            $valids.iter().for_each(|s| {
                assert!(
                    nfa.accepts(s.chars()),
                    r#""{}" failed to match "{}""#,
                    expr,
                    s
                );
            });
            $invalids.iter().for_each(|s| {
                assert!(
                    !nfa.accepts(s.chars()),
                    r#""{}" matched "{}" but should not have"#,
                    expr,
                    s
                );
            });
        });
    }};
}
