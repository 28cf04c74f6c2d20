use {
    crate::automaton::{state::StateNode, State, Transition},
    bitvec::prelude::*,
    log::debug,
};

/// A deterministic automaton recognizing a set of labeled symbol sequences.
///
/// States live in an append-only arena and are addressed by [State] index; transitions store indices rather
/// than references. State 0 is always the initial state and always exists. An automaton is produced by an
/// [AutomatonBuilder](super::AutomatonBuilder) and has no public mutators, so once built it can be shared
/// freely between any number of [Matcher](super::Matcher)s, including across threads.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Automaton<S> {
    states: Vec<StateNode<S>>,
}

impl<S> Default for Automaton<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Automaton<S> {
    /// Creates an automaton containing only the (non-terminal) start state.
    pub fn new() -> Self {
        Self {
            states: vec![StateNode::default()],
        }
    }

    /// Appends a new empty state and returns its index.
    pub(crate) fn create_state(&mut self) -> State {
        let state = State(self.states.len().try_into().expect("state count exceeds u32::MAX"));
        self.states.push(StateNode::default());
        state
    }

    /// Sets the output label of a state, returning the label it replaced, if any.
    pub(crate) fn set_output(&mut self, state: State, label: String) -> Option<String> {
        assert!(state.usize() < self.states.len());
        self.states[state.usize()].output.replace(label)
    }

    /// Returns the number of states, including the start state.
    #[inline]
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// Returns the total number of transitions across all states.
    pub fn num_transitions(&self) -> usize {
        self.states.iter().map(|s| s.transitions.len()).sum()
    }

    /// Returns all states, indexed by [State].
    #[inline]
    pub fn states(&self) -> &[StateNode<S>] {
        &self.states
    }

    /// Returns the node for a state.
    ///
    /// # Panics
    /// Panics if `state` is not a state of this automaton.
    #[inline]
    pub fn state(&self, state: State) -> &StateNode<S> {
        &self.states[state.usize()]
    }

    /// Returns the output label of a state, if it is terminal.
    ///
    /// # Panics
    /// Panics if `state` is not a state of this automaton.
    #[inline]
    pub fn output(&self, state: State) -> Option<&str> {
        self.state(state).output()
    }

    /// Indicates whether the given state carries an output label.
    #[inline]
    pub fn is_terminal(&self, state: State) -> bool {
        self.state(state).is_terminal()
    }

    /// Returns the terminal states as a bitset indexed by state number.
    pub fn terminal_states(&self) -> BitVec {
        let mut terminal = bitvec![0; self.states.len()];
        for (i, node) in self.states.iter().enumerate() {
            if node.is_terminal() {
                terminal.set(i, true);
            }
        }
        terminal
    }

    /// Iterates over the transitions leaving `state`, in the order they were added.
    ///
    /// # Panics
    /// Panics if `state` is not a state of this automaton.
    pub fn transitions(&self, state: State) -> impl Iterator<Item = Transition<'_, S>> + '_ {
        self.state(state).transitions.iter().map(move |(symbol, dest)| Transition {
            source: state,
            symbol,
            dest: *dest,
        })
    }
}

impl<S: Eq> Automaton<S> {
    /// Add a new transition from `source` to `dest` on `symbol`.
    ///
    /// # Panics
    /// Panics if either state is out of range, or if `source` already has a transition for `symbol`.
    pub(crate) fn add_transition(&mut self, source: State, symbol: S, dest: State) {
        assert!(source.usize() < self.states.len());
        assert!(dest.usize() < self.states.len());
        assert!(self.states[source.usize()].get(&symbol).is_none(), "{source} already has a transition for this symbol");

        debug!("Adding transition {} -> {}", source.0, dest.0);
        self.states[source.usize()].transitions.push((symbol, dest));
    }

    /// Returns the state obtained by reading `symbol` from `state`, or `None` if `state` has no transition for
    /// it. `None` is the normal "not observed" signal, not an error.
    ///
    /// # Panics
    /// Panics if `state` is not a state of this automaton.
    #[inline]
    pub fn step(&self, state: State, symbol: &S) -> Option<State> {
        self.state(state).get(symbol)
    }

    /// Like [Automaton::step], but also returns the output label of the destination state.
    pub fn step_output(&self, state: State, symbol: &S) -> Option<(State, Option<&str>)> {
        self.step(state, symbol).map(|dest| (dest, self.output(dest)))
    }

    /// Runs `symbols` from the start state and returns the final state, or `None` as soon as a symbol has no
    /// transition.
    pub fn run<'s, I>(&self, symbols: I) -> Option<State>
    where
        I: IntoIterator<Item = &'s S>,
        S: 's,
    {
        symbols.into_iter().try_fold(State::START, |state, symbol| self.step(state, symbol))
    }

    /// True if no state has two transitions leaving with the same symbol.
    pub fn is_deterministic(&self) -> bool {
        self.states.iter().all(|node| {
            let t = &node.transitions;
            t.iter().enumerate().all(|(i, (symbol, _))| t[i + 1..].iter().all(|(other, _)| other != symbol))
        })
    }
}
