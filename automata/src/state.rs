use std::fmt;

/// An opaque state identifier. Identifiers are unique for the lifetime of one
/// compilation; no two sub-automata built from the same [`StateIds`] ever
/// share one.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct State(u32);

impl State {
    #[inline]
    pub fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Display for State {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}

/// A monotonic state allocator owned by a single compilation. Because
/// identifiers are never reused, the transition tables of sibling automata
/// have disjoint key spaces and can be merged without loss.
#[derive(Debug, Default)]
pub struct StateIds {
    next: u32,
}

impl StateIds {
    #[inline]
    pub fn new() -> Self {
        StateIds { next: 0 }
    }

    /// Hand out a fresh state.
    #[inline]
    pub fn next_state(&mut self) -> State {
        let state = State(self.next);
        self.next += 1;
        state
    }

    /// The number of states allocated so far.
    #[inline]
    pub fn allocated(&self) -> u32 {
        self.next
    }
}
