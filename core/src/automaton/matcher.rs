//! Streaming recognition of completed rules, one symbol at a time.
use {
    crate::automaton::{Automaton, State},
    log::trace,
};

/// What a [Matcher] does with a symbol its current state has no transition for.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum MismatchPolicy {
    /// Go back to the start state and feed the symbol again from there, so that it can begin a new rule. If the
    /// start state has no transition for it either, the cursor stays at the start state.
    #[default]
    Restart,

    /// Go back to the start state and drop the symbol.
    Reset,

    /// Drop the symbol and keep the cursor where it is.
    Stay,
}

/// Matcher configuration.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MatcherConfig {
    /// Policy for symbols with no transition from the current state.
    pub on_mismatch: MismatchPolicy,

    /// Return to the start state after a label is reported. When false, matching continues past terminal
    /// states, so a rule that is a prefix of a longer rule is reported and the longer rule can still complete.
    pub reset_on_match: bool,
}

/// A cursor into a borrowed [Automaton], tracking one input stream.
///
/// The automaton is only read, so any number of matchers may share it.
#[derive(Clone, Debug)]
pub struct Matcher<'a, S> {
    automaton: &'a Automaton<S>,
    state: State,
    config: MatcherConfig,
}

impl<'a, S: Eq> Matcher<'a, S> {
    /// Creates a matcher positioned at the start state with the default configuration.
    pub fn new(automaton: &'a Automaton<S>) -> Self {
        Self::with_config(automaton, MatcherConfig::default())
    }

    pub fn with_config(automaton: &'a Automaton<S>, config: MatcherConfig) -> Self {
        Self {
            automaton,
            state: State::START,
            config,
        }
    }

    /// The current cursor.
    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    #[inline]
    pub fn config(&self) -> MatcherConfig {
        self.config
    }

    #[inline]
    pub fn automaton(&self) -> &'a Automaton<S> {
        self.automaton
    }

    /// Moves the cursor back to the start state.
    #[inline]
    pub fn reset(&mut self) {
        self.state = State::START;
    }

    /// Consumes one symbol. Returns the label of the state reached, if that state is terminal.
    pub fn feed(&mut self, symbol: &S) -> Option<&'a str> {
        let next = match self.automaton.step(self.state, symbol) {
            Some(next) => next,
            None => match self.config.on_mismatch {
                MismatchPolicy::Stay => {
                    trace!("No transition from {}; staying", self.state);
                    return None;
                }
                MismatchPolicy::Reset => {
                    trace!("No transition from {}; resetting", self.state);
                    self.state = State::START;
                    return None;
                }
                MismatchPolicy::Restart => {
                    trace!("No transition from {}; restarting", self.state);
                    match self.automaton.step(State::START, symbol) {
                        Some(next) => next,
                        None => {
                            self.state = State::START;
                            return None;
                        }
                    }
                }
            },
        };

        self.state = next;
        let output = self.automaton.output(next);
        if let Some(label) = output {
            trace!("Reached {next} with output {label:?}");
            if self.config.reset_on_match {
                self.state = State::START;
            }
        }

        output
    }

    /// Consumes every symbol and returns the labels reported, in order.
    pub fn feed_all<'s, I>(&mut self, symbols: I) -> Vec<&'a str>
    where
        I: IntoIterator<Item = &'s S>,
        S: 's,
    {
        symbols.into_iter().filter_map(|symbol| self.feed(symbol)).collect()
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{Matcher, MatcherConfig, MismatchPolicy},
        crate::{
            automaton::{build, Automaton, State},
            control::Control::{self, *},
            rules::{sample_rules, Rule},
        },
        pretty_assertions::assert_eq,
        std::{sync::Arc, thread},
        test_log::test,
    };

    fn sample() -> Automaton<Control> {
        build(sample_rules()).unwrap()
    }

    fn config(on_mismatch: MismatchPolicy, reset_on_match: bool) -> MatcherConfig {
        MatcherConfig {
            on_mismatch,
            reset_on_match,
        }
    }

    #[test]
    fn test_feed_sample_sequences() {
        let a = sample();
        for (symbols, label) in [
            (vec![Left, Right, FrontPunch], "Fireball"),
            (vec![Left, Right, FrontKick], "Shadow Kick"),
            (vec![Right, Right, Right, BackPunch], "Finisher"),
            (vec![Block, FrontPunch], "Low Blow"),
        ] {
            let mut m = Matcher::new(&a);
            let (last, init) = symbols.split_last().unwrap();
            for symbol in init {
                assert_eq!(m.feed(symbol), None);
            }
            assert_eq!(m.feed(last), Some(label));
        }
    }

    #[test]
    fn test_restart_retries_symbol() {
        let a = sample();
        let mut m = Matcher::new(&a);

        // Left, Left: the second Left has no transition from the Left state and starts over.
        assert_eq!(m.feed_all(&[Left, Left, Right, FrontPunch]), vec!["Fireball"]);

        // Block has no transition after Left, Right but begins Low Blow.
        m.reset();
        assert_eq!(m.feed_all(&[Left, Right, Block, FrontPunch]), vec!["Low Blow"]);

        // FrontKick goes nowhere, even from the start.
        m.reset();
        assert_eq!(m.feed(&FrontKick), None);
        assert_eq!(m.state(), State::START);
    }

    #[test]
    fn test_reset_drops_symbol() {
        let a = sample();
        let mut m = Matcher::with_config(&a, config(MismatchPolicy::Reset, false));
        assert_eq!(m.feed_all(&[Left, Left, Right, FrontPunch]), Vec::<&str>::new());
        assert_eq!(m.feed_all(&[Left, Block]), Vec::<&str>::new());
        assert_eq!(m.state(), State::START);
    }

    #[test]
    fn test_stay_ignores_symbol() {
        let a = sample();
        let mut m = Matcher::with_config(&a, config(MismatchPolicy::Stay, false));
        assert_eq!(m.feed_all(&[Left, Block, Right, BackPunch, FrontPunch]), vec!["Fireball"]);
    }

    #[test]
    fn test_reset_on_match() {
        let a = sample();
        let mut m = Matcher::with_config(&a, config(MismatchPolicy::Stay, true));
        assert_eq!(m.feed_all(&[Block, FrontPunch, Block, FrontPunch]), vec!["Low Blow", "Low Blow"]);
        assert_eq!(m.state(), State::START);

        // Without the reset, Stay leaves the cursor on the leaf.
        let mut m = Matcher::with_config(&a, config(MismatchPolicy::Stay, false));
        assert_eq!(m.feed_all(&[Block, FrontPunch, Block, FrontPunch]), vec!["Low Blow"]);
    }

    #[test]
    fn test_prefix_rules_both_reported() {
        let rules = vec![
            Rule::new(vec![Right, Right], "Dash"),
            Rule::new(vec![Right, Right, FrontKick], "Dash Kick"),
        ];
        let a = build(&rules).unwrap();

        let mut m = Matcher::new(&a);
        assert_eq!(m.feed_all(&[Right, Right, FrontKick]), vec!["Dash", "Dash Kick"]);

        let mut m = Matcher::with_config(&a, config(MismatchPolicy::Restart, true));
        assert_eq!(m.feed_all(&[Right, Right, FrontKick]), vec!["Dash"]);
    }

    #[test]
    fn test_continuous_stream() {
        let a = sample();
        let mut m = Matcher::new(&a);
        let stream = [Block, Left, Right, FrontKick, Right, Right, Right, BackPunch, Block, FrontPunch];
        assert_eq!(m.feed_all(&stream), vec!["Shadow Kick", "Finisher", "Low Blow"]);
    }

    #[test]
    fn test_shared_across_threads() {
        let a = Arc::new(sample());
        let streams: Vec<Vec<Control>> = vec![
            vec![Left, Right, FrontPunch, Block, FrontPunch],
            vec![Right, Right, Right, BackPunch],
            vec![Left, Right, FrontKick, Left],
        ];

        let expected: Vec<Vec<String>> = streams
            .iter()
            .map(|s| Matcher::new(&*a).feed_all(s).into_iter().map(String::from).collect())
            .collect();

        let handles: Vec<_> = streams
            .into_iter()
            .map(|s| {
                let a = Arc::clone(&a);
                thread::spawn(move || Matcher::new(&*a).feed_all(&s).into_iter().map(String::from).collect::<Vec<_>>())
            })
            .collect();

        let actual: Vec<Vec<String>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(actual, expected);
        assert_eq!(actual[0], vec!["Fireball".to_string(), "Low Blow".to_string()]);
    }
}
