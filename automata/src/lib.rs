#![deny(rust_2018_idioms)]
#![deny(future_incompatible)]

pub mod nfa;
pub mod state;
pub mod table;

pub use nfa::{Nfa, Symbol};
pub use state::{State, StateIds};
