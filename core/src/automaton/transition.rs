use {
    crate::automaton::State,
    std::fmt::{Display, Formatter, Result as FmtResult},
};

/// One transition of an [Automaton](super::Automaton), as yielded by
/// [Automaton::transitions](super::Automaton::transitions).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Transition<'a, S> {
    /// Source state.
    pub source: State,

    /// Symbol consumed by this transition.
    pub symbol: &'a S,

    /// Destination state.
    pub dest: State,
}

impl<S: Display> Display for Transition<'_, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} -> {} {}", self.source.0, self.dest.0, self.symbol)
    }
}
