/// Tiny program that compiles a regular expression and prints the automaton
/// as GraphViz DOT text on stdout. Run with RUST_LOG=trace to see every
/// stage of the pipeline.
use std::env;
use std::process;

const HELP: &str = "regex2dot <regex>";

fn main() {
    env_logger::init();

    let pattern = match env::args().nth(1) {
        Some(s) => s,
        None => {
            eprintln!("{}", HELP);
            process::exit(1);
        }
    };

    match renfa::compile(&pattern) {
        Ok(nfa) => print!("{}", renfa::dot::render(&nfa)),
        Err(err) => {
            eprintln!("error: {}", err);
            process::exit(1);
        }
    }
}
