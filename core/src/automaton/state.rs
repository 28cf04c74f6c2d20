use std::fmt::{Debug, Display, Formatter, Result as FmtResult};

/// Index of a state within an [Automaton](super::Automaton). State 0 is always the start state.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct State(pub u32);

impl State {
    /// The start state.
    pub const START: State = State(0);

    #[inline]
    pub fn usize(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn is_start(self) -> bool {
        self.0 == 0
    }
}

impl Debug for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "State({})", self.0)
    }
}

impl Display for State {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "State({})", self.0)
    }
}

/// The data held by one state: its outgoing transitions and, for terminal states, the label of the rule
/// that ends here.
///
/// Transitions are kept in insertion order. Each symbol appears at most once.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StateNode<S> {
    pub(crate) transitions: Vec<(S, State)>,
    pub(crate) output: Option<String>,
}

impl<S> Default for StateNode<S> {
    fn default() -> Self {
        Self {
            transitions: Vec::new(),
            output: None,
        }
    }
}

impl<S: Eq> StateNode<S> {
    /// Returns the destination for `symbol`, or `None` if this state has no such transition.
    pub fn get(&self, symbol: &S) -> Option<State> {
        self.transitions.iter().find(|(s, _)| s == symbol).map(|&(_, dest)| dest)
    }
}

impl<S> StateNode<S> {
    /// Outgoing transitions as `(symbol, destination)` pairs, in the order they were added.
    #[inline]
    pub fn transitions(&self) -> &[(S, State)] {
        &self.transitions
    }

    /// The label carried by this state, if it is terminal.
    #[inline]
    pub fn output(&self) -> Option<&str> {
        self.output.as_deref()
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.output.is_some()
    }
}
