//! Incremental construction of an [Automaton] from labeled rules.
//!
//! Each rule's symbol sequence is inserted as a path from the start state. Rules that share a prefix share the
//! states for that prefix; rules with identical sequences share their terminal state. Input does not need to
//! be sorted, and construction is linear in the total number of symbols (times the out-degree of the states
//! visited).
use {
    crate::{
        automaton::{Automaton, State},
        rules::Rule,
        ComboError,
    },
    log::debug,
};

/// What to do when a rule ends on a state that already carries a label.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum OutputCollision {
    /// The later rule's label replaces the earlier one, silently.
    #[default]
    Overwrite,

    /// The earlier rule's label is kept and the later one is dropped.
    KeepFirst,

    /// The later rule is refused with [ComboError::OutputCollision].
    Reject,
}

/// Builder configuration.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BuilderConfig {
    /// Policy for rules whose full sequences coincide.
    pub on_collision: OutputCollision,
}

/// Folds [Rule]s into an [Automaton], one at a time.
#[derive(Debug)]
pub struct AutomatonBuilder<S> {
    automaton: Automaton<S>,
    config: BuilderConfig,
}

impl<S: Clone + Eq> Default for AutomatonBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Clone + Eq> AutomatonBuilder<S> {
    /// Creates a builder with the default configuration.
    pub fn new() -> Self {
        Self::with_config(BuilderConfig::default())
    }

    /// Creates a builder with the given configuration.
    pub fn with_config(config: BuilderConfig) -> Self {
        Self {
            automaton: Automaton::new(),
            config,
        }
    }

    /// Inserts one rule and returns its terminal state.
    ///
    /// # Errors
    /// Returns [ComboError::EmptyRule] if the rule has no symbols, or [ComboError::OutputCollision] if the
    /// terminal state is already labeled and the builder is configured with [OutputCollision::Reject]. On
    /// error the automaton is unchanged.
    pub fn add_rule(&mut self, rule: &Rule<S>) -> Result<State, ComboError> {
        if rule.symbols().is_empty() {
            return Err(ComboError::EmptyRule(rule.label().to_string()));
        }

        // Walk the existing prefix first so that a rejected rule leaves no dangling states behind.
        let mut current = State::START;
        let mut consumed = 0;
        for symbol in rule.symbols() {
            match self.automaton.step(current, symbol) {
                Some(next) => current = next,
                None => break,
            }
            consumed += 1;
        }

        if consumed == rule.symbols().len() {
            if let Some(existing) = self.automaton.output(current) {
                match self.config.on_collision {
                    OutputCollision::Overwrite => {
                        debug!("Rule {:?} replaces {existing:?} on {current}", rule.label());
                    }
                    OutputCollision::KeepFirst => {
                        debug!("Rule {:?} dropped; {current} already outputs {existing:?}", rule.label());
                        return Ok(current);
                    }
                    OutputCollision::Reject => {
                        return Err(ComboError::OutputCollision {
                            state: current,
                            existing: existing.to_string(),
                            rejected: rule.label().to_string(),
                        });
                    }
                }
            }
        }

        for symbol in &rule.symbols()[consumed..] {
            let next = self.automaton.create_state();
            self.automaton.add_transition(current, symbol.clone(), next);
            current = next;
        }

        debug!(
            "Rule {:?}: shared {consumed} of {} symbols, terminal state {current}",
            rule.label(),
            rule.symbols().len()
        );
        self.automaton.set_output(current, rule.label().to_string());
        Ok(current)
    }

    /// Inserts rules in order, stopping at the first error.
    pub fn add_rules<'r, I>(&mut self, rules: I) -> Result<(), ComboError>
    where
        I: IntoIterator<Item = &'r Rule<S>>,
        S: 'r,
    {
        for rule in rules {
            self.add_rule(rule)?;
        }
        Ok(())
    }

    /// Returns the automaton built so far.
    #[inline]
    pub fn automaton(&self) -> &Automaton<S> {
        &self.automaton
    }

    /// Finishes construction and returns the automaton.
    pub fn finish(self) -> Automaton<S> {
        debug!(
            "Finished automaton with {} states and {} transitions",
            self.automaton.num_states(),
            self.automaton.num_transitions()
        );
        self.automaton
    }
}

/// Builds an automaton from rules using the default configuration (last label wins on collision).
pub fn build<'r, S, I>(rules: I) -> Result<Automaton<S>, ComboError>
where
    S: Clone + Eq + 'r,
    I: IntoIterator<Item = &'r Rule<S>>,
{
    build_with_config(rules, BuilderConfig::default())
}

/// Builds an automaton from rules using the given configuration.
pub fn build_with_config<'r, S, I>(rules: I, config: BuilderConfig) -> Result<Automaton<S>, ComboError>
where
    S: Clone + Eq + 'r,
    I: IntoIterator<Item = &'r Rule<S>>,
{
    let mut builder = AutomatonBuilder::with_config(config);
    builder.add_rules(rules)?;
    Ok(builder.finish())
}
