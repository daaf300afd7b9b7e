//! GraphViz rendering of compiled automata.

use automata::{Nfa, Symbol};

/// Render the automaton as GraphViz DOT text: an unlabeled entry point into
/// the start state, circles for ordinary states, a double circle for the
/// accept state, and one labeled edge per transition destination. Edges are
/// sorted so the output is deterministic.
pub fn render(nfa: &Nfa) -> String {
    let mut edges: Vec<_> = nfa.edges().collect();
    edges.sort();

    let mut dot = String::new();
    dot.push_str("digraph NFA {\n");
    dot.push_str("    rankdir=LR;\n");
    dot.push_str("    start [shape=point, label=\"\"];\n");
    dot.push_str(&format!(
        "    {} [shape=circle, label=\"{}\"];\n",
        nfa.start(),
        nfa.start()
    ));
    dot.push_str(&format!(
        "    {} [shape=doublecircle, label=\"{}\"];\n",
        nfa.accept(),
        nfa.accept()
    ));
    dot.push_str(&format!("    start -> {};\n", nfa.start()));

    for (from, on, to) in edges {
        dot.push_str(&format!(
            "    {} -> {} [label=\"{}\"];\n",
            from,
            to,
            escape(on)
        ));
    }

    dot.push_str("}\n");
    dot
}

/// Escape a transition label for DOT markup. Epsilon renders as `ε`;
/// characters that GraphViz or the DOT string syntax would misread are
/// backslash-escaped.
fn escape(symbol: Symbol) -> String {
    let c = match symbol {
        Symbol::Epsilon => return "ε".to_string(),
        Symbol::Char(c) => c,
    };

    match c {
        '\\' => r"\\".to_string(),
        '"' => "\\\"".to_string(),
        '*' => r"\*".to_string(),
        '[' => r"\[".to_string(),
        ']' => r"\]".to_string(),
        _ => c.to_string(),
    }
}
