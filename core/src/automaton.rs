//! Deterministic automata built from labeled symbol sequences.
//!
//! An [Automaton] is built once with an [AutomatonBuilder] (or [build]) and is read-only afterwards. Input is
//! recognized by driving a [Matcher] one symbol at a time, or by calling [Automaton::step] with an explicit
//! cursor.
#[allow(clippy::module_inception)]
mod automaton;
mod builder;
mod dump;
mod matcher;
mod state;
mod transition;
pub use {automaton::*, builder::*, dump::*, matcher::*, state::*, transition::*};
