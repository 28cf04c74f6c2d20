use {
    crate::automaton::State,
    std::{
        error::Error,
        fmt::{Display, Formatter, Result as FmtResult},
    },
};

/// Errors that can occur while building an automaton or reading rule definitions.
#[derive(Debug, Eq, PartialEq)]
pub enum ComboError {
    /// A rule had no symbols. The label of the offending rule is attached.
    EmptyRule(String),

    /// Two rules ended on the same state and the builder was configured to reject this.
    OutputCollision {
        /// The shared terminal state.
        state: State,

        /// The label already stored on the state.
        existing: String,

        /// The label that was refused.
        rejected: String,
    },

    /// A rule definition could not be parsed.
    InvalidRule(String /* message */),

    /// A control name was not recognized.
    UnknownControl(String),

    /// A rule definition on the given (1-based) line of a rule file was invalid.
    RuleLine(usize, Box<ComboError>),
}

impl Display for ComboError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::EmptyRule(label) => write!(f, "Empty rule: {label:?} has no symbols"),
            Self::OutputCollision {
                state,
                existing,
                rejected,
            } => write!(f, "Output collision on {state}: {rejected:?} would replace {existing:?}"),
            Self::InvalidRule(message) => write!(f, "Invalid rule: {message}"),
            Self::UnknownControl(name) => write!(f, "Unknown control: {name:?}"),
            Self::RuleLine(line, cause) => write!(f, "Line {line}: {cause}"),
        }
    }
}

impl Error for ComboError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::RuleLine(_, cause) => Some(cause.as_ref()),
            _ => None,
        }
    }
}

/// A type alias for any kind of error. The error is boxed and must be `Send`, `Sync`, and `'static`.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// A type alias for a `Result` with a [BoxError].
pub type BoxResult<T> = Result<T, BoxError>;

#[cfg(test)]
mod tests {
    use {
        super::ComboError,
        crate::automaton::State,
        pretty_assertions::assert_eq,
        std::error::Error,
        test_log::test,
    };

    #[test]
    fn test_display() {
        assert_eq!(ComboError::EmptyRule("Nothing".to_string()).to_string(), "Empty rule: \"Nothing\" has no symbols");
        assert_eq!(ComboError::UnknownControl("Jump".to_string()).to_string(), "Unknown control: \"Jump\"");

        let collision = ComboError::OutputCollision {
            state: State(3),
            existing: "Fireball".to_string(),
            rejected: "Hadouken".to_string(),
        };
        assert_eq!(collision.to_string(), "Output collision on State(3): \"Hadouken\" would replace \"Fireball\"");
    }

    #[test]
    fn test_rule_line_source() {
        let e = ComboError::RuleLine(4, Box::new(ComboError::InvalidRule("missing \"=>\"".to_string())));
        assert_eq!(e.to_string(), "Line 4: Invalid rule: missing \"=>\"");
        assert!(e.source().is_some());
        assert!(ComboError::EmptyRule(String::new()).source().is_none());
    }
}
