//! Combo-input recognition.
//!
//! Rules pair a sequence of controller inputs with a label. [build] folds the rules into a deterministic
//! [Automaton] whose shared prefixes share states, and a [Matcher] then follows a live input stream one
//! [Control] at a time, reporting a label whenever a rule's full sequence completes.

#![warn(clippy::all)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]

mod error;

/// Automaton data model, builder, matcher, and dump.
pub mod automaton;

/// The controller input alphabet.
pub mod control;

pub mod rules;

pub use {
    automaton::{build, build_with_config, Automaton, AutomatonBuilder, Matcher, State},
    control::{Control, SymbolName},
    error::*,
    rules::{parse_rules, sample_rules, Rule},
};
