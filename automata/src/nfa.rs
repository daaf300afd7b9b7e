use crate::state::{State, StateIds};
use crate::table::Table;

use std::collections::HashSet;
use std::fmt;
use std::iter;

use log::trace;

/// A transition label in an NFA.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Symbol {
    /// A transition on one input character.
    Char(char),
    /// An epsilon transition allows the NFA to change its state spontaneously
    /// without consuming an input symbol.
    Epsilon,
}

impl fmt::Display for Symbol {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Symbol::Char(c) => write!(f, "{}", c),
            Symbol::Epsilon => write!(f, "ε"),
        }
    }
}

/// A non-deterministic finite automaton with epsilon transitions, a single
/// start state, and a single accept state.
///
/// Automata are assembled bottom-up: leaves via [`Nfa::leaf`], everything
/// else by the composition constructors, which consume their operands and
/// merge the operands' transition tables into the result. All states must
/// come from one [`StateIds`] so that merged tables never collide.
#[derive(Clone, Debug, PartialEq)]
pub struct Nfa {
    start: State,
    accept: State,
    transitions: Table<State, Symbol, HashSet<State>>,
}

impl Nfa {
    /// Create an automaton with a fresh start/accept pair and no transitions.
    #[inline]
    pub fn new(ids: &mut StateIds) -> Self {
        Nfa {
            start: ids.next_state(),
            accept: ids.next_state(),
            transitions: Table::new(),
        }
    }

    /// Create a leaf automaton accepting exactly the given single characters.
    #[inline]
    pub fn leaf<I>(ids: &mut StateIds, chars: I) -> Self
    where
        I: IntoIterator<Item = char>,
    {
        let mut nfa = Nfa::new(ids);
        for c in chars {
            nfa.add_transition(nfa.start, Symbol::Char(c), nfa.accept);
        }
        trace!("leaf: {} .. {}", nfa.start, nfa.accept);
        nfa
    }

    /// Construct the union of two automata. The new start state branches on
    /// epsilon to both operands' start states, and both operands' accept
    /// states reach the new accept state on epsilon.
    #[inline]
    pub fn union(ids: &mut StateIds, x: Nfa, y: Nfa) -> Self {
        let mut nfa = Nfa::new(ids);
        trace!(
            "union: {} --ε--> {}, {}; {}, {} --ε--> {}",
            nfa.start,
            x.start,
            y.start,
            x.accept,
            y.accept,
            nfa.accept
        );
        nfa.add_epsilon(nfa.start, x.start);
        nfa.add_epsilon(nfa.start, y.start);
        nfa.add_epsilon(x.accept, nfa.accept);
        nfa.add_epsilon(y.accept, nfa.accept);
        nfa.absorb(x);
        nfa.absorb(y);
        nfa
    }

    /// Construct the Kleene star of an automaton: zero or more repetitions.
    #[inline]
    pub fn star(ids: &mut StateIds, x: Nfa) -> Self {
        let mut nfa = Nfa::new(ids);
        trace!(
            "star: {} --ε--> {}, {}; {} --ε--> {}, {}",
            nfa.start,
            x.start,
            nfa.accept,
            x.accept,
            x.start,
            nfa.accept
        );
        nfa.add_epsilon(nfa.start, x.start);
        nfa.add_epsilon(nfa.start, nfa.accept);
        nfa.add_epsilon(x.accept, x.start);
        nfa.add_epsilon(x.accept, nfa.accept);
        nfa.absorb(x);
        nfa
    }

    /// Construct the optional form of an automaton: zero or one occurrence.
    /// Unlike [`Nfa::star`] there is no back-edge, so the operand cannot
    /// repeat.
    #[inline]
    pub fn optional(ids: &mut StateIds, x: Nfa) -> Self {
        let mut nfa = Nfa::new(ids);
        trace!(
            "optional: {} --ε--> {}, {}; {} --ε--> {}",
            nfa.start,
            x.start,
            nfa.accept,
            x.accept,
            nfa.accept
        );
        nfa.add_epsilon(nfa.start, x.start);
        nfa.add_epsilon(nfa.start, nfa.accept);
        nfa.add_epsilon(x.accept, nfa.accept);
        nfa.absorb(x);
        nfa
    }

    /// Construct the concatenation of two automata. No fresh states are
    /// allocated: the result reuses `x`'s start and `y`'s accept, joined by a
    /// single epsilon transition.
    #[inline]
    pub fn concat(x: Nfa, y: Nfa) -> Self {
        let mut nfa = Nfa {
            start: x.start,
            accept: y.accept,
            transitions: Table::new(),
        };
        trace!("concat: {} --ε--> {}", x.accept, y.start);
        nfa.add_epsilon(x.accept, y.start);
        nfa.absorb(x);
        nfa.absorb(y);
        nfa
    }

    /// Add a transition between two states.
    #[inline]
    pub fn add_transition(&mut self, from: State, on: Symbol, to: State) {
        self.transitions
            .set_or(from, on, iter::once(to).collect(), |dests| {
                dests.insert(to);
            });
    }

    /// Add an epsilon transition between two states.
    #[inline]
    pub fn add_epsilon(&mut self, from: State, to: State) {
        self.add_transition(from, Symbol::Epsilon, to);
    }

    /// Merge another automaton's transitions into this one, discarding its
    /// endpoints. The operand must have been built from the same [`StateIds`].
    #[inline]
    fn absorb(&mut self, other: Nfa) {
        for (from, on, dests) in other.transitions {
            for to in dests {
                self.add_transition(from, on, to);
            }
        }
    }
}

impl Nfa {
    /// The start state.
    #[inline]
    pub fn start(&self) -> State {
        self.start
    }

    /// The accept state.
    #[inline]
    pub fn accept(&self) -> State {
        self.accept
    }

    /// Enumerate the transition relation, one triple per destination state.
    /// Iteration order is unspecified; callers that need a stable order (such
    /// as renderers) should sort the triples themselves.
    #[inline]
    pub fn edges(&self) -> impl Iterator<Item = (State, Symbol, State)> + '_ {
        self.transitions
            .iter()
            .flat_map(|(from, on, dests)| dests.iter().map(move |to| (*from, *on, *to)))
    }
}

impl Nfa {
    /// The set of all states reachable from the given state on epsilon
    /// transitions only, including the state itself.
    #[inline]
    pub fn epsilon_closure(&self, state: State) -> HashSet<State> {
        let mut closure = HashSet::new();
        let mut pending = vec![state];
        while let Some(s) = pending.pop() {
            if !closure.insert(s) {
                continue;
            }
            if let Some(dests) = self.transitions.get(&s, &Symbol::Epsilon) {
                pending.extend(dests.iter().copied());
            }
        }
        closure
    }

    /// The union of epsilon-closures over a set of states.
    #[inline]
    pub fn epsilon_closure_set(&self, states: &HashSet<State>) -> HashSet<State> {
        let mut closure = HashSet::new();
        for &state in states {
            closure.extend(self.epsilon_closure(state));
        }
        closure
    }

    /// The set of states reachable from the given set by consuming one input
    /// character, before taking any epsilon closure.
    #[inline]
    fn move_set(&self, states: &HashSet<State>, c: char) -> HashSet<State> {
        let mut moved = HashSet::new();
        for state in states {
            if let Some(dests) = self.transitions.get(state, &Symbol::Char(c)) {
                moved.extend(dests.iter().copied());
            }
        }
        moved
    }

    /// Determine whether the automaton accepts the given input under standard
    /// epsilon-NFA acceptance semantics.
    #[inline]
    pub fn accepts<I>(&self, input: I) -> bool
    where
        I: IntoIterator<Item = char>,
    {
        let mut current = self.epsilon_closure(self.start);
        for c in input {
            let moved = self.move_set(&current, c);
            current = self.epsilon_closure_set(&moved);
            if current.is_empty() {
                return false;
            }
        }
        current.contains(&self.accept)
    }
}
