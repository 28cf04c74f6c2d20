use {
    crate::{automaton::Automaton, control::SymbolName},
    std::fmt::{Display, Formatter, Result as FmtResult},
};

/// Human-readable listing of an automaton: one block per state, in index order, with each transition as
/// `<symbol> -> <target>` and an `Output: <label>` line for terminal states.
#[derive(Clone, Copy, Debug)]
pub struct Dump<'a, S> {
    automaton: &'a Automaton<S>,
}

impl<S: SymbolName> Automaton<S> {
    /// Returns a [Dump] of this automaton, suitable for printing.
    pub fn dump(&self) -> Dump<'_, S> {
        Dump {
            automaton: self,
        }
    }
}

impl<S: SymbolName> Dump<'_, S> {
    /// Returns the listing as lines.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.automaton.num_states() * 2 + self.automaton.num_transitions());
        for (i, node) in self.automaton.states().iter().enumerate() {
            lines.push(format!("State: {i}"));
            for (symbol, dest) in node.transitions() {
                lines.push(format!("{} -> {}", symbol.name(), dest.0));
            }
            if let Some(output) = node.output() {
                lines.push(format!("Output: {output}"));
            }
        }
        lines
    }
}

impl<S: SymbolName> Display for Dump<'_, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (i, node) in self.automaton.states().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            writeln!(f, "State: {i}")?;
            for (symbol, dest) in node.transitions() {
                writeln!(f, "{} -> {}", symbol.name(), dest.0)?;
            }
            if let Some(output) = node.output() {
                writeln!(f, "Output: {output}")?;
            }
        }
        Ok(())
    }
}
