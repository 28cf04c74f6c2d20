//! Rule definitions: a sequence of symbols paired with the label reported when the sequence completes.
//!
//! Rule sets can be written as text, one rule per line:
//!
//! ```text
//! # comment
//! Left Right FrontPunch => Fireball
//! Block, FrontPunch => Low Blow
//! ```
//!
//! Controls are separated by whitespace or commas and matched without regard to case. The label is the
//! remainder of the line after `=>`, trimmed.
use {
    crate::{
        control::Control::{self, *},
        ComboError,
    },
    log::debug,
    once_cell::sync::Lazy,
    std::str::FromStr,
};

/// Separator between the controls of a rule and its label.
pub const LABEL_SEPARATOR: &str = "=>";

/// A labeled symbol sequence.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Rule<S> {
    symbols: Vec<S>,
    label: String,
}

impl<S> Rule<S> {
    /// Creates a new rule. The builder refuses rules with no symbols.
    pub fn new(symbols: Vec<S>, label: impl Into<String>) -> Self {
        Self {
            symbols,
            label: label.into(),
        }
    }

    #[inline]
    pub fn symbols(&self) -> &[S] {
        &self.symbols
    }

    #[inline]
    pub fn label(&self) -> &str {
        &self.label
    }
}

static SAMPLE_RULES: Lazy<Vec<Rule<Control>>> = Lazy::new(|| {
    vec![
        Rule::new(vec![Left, Right, FrontPunch], "Fireball"),
        Rule::new(vec![Left, Right, FrontKick], "Shadow Kick"),
        Rule::new(vec![Right, Right, Right, BackPunch], "Finisher"),
        Rule::new(vec![Block, FrontPunch], "Low Blow"),
    ]
});

/// The built-in combo set.
pub fn sample_rules() -> &'static [Rule<Control>] {
    &SAMPLE_RULES
}

impl FromStr for Rule<Control> {
    type Err = ComboError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (controls, label) = s
            .split_once(LABEL_SEPARATOR)
            .ok_or_else(|| ComboError::InvalidRule(format!("missing {LABEL_SEPARATOR:?} in {s:?}")))?;

        let label = label.trim();
        if label.is_empty() {
            return Err(ComboError::InvalidRule(format!("missing label in {s:?}")));
        }

        let symbols = controls
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|name| !name.is_empty())
            .map(Control::from_str)
            .collect::<Result<Vec<_>, _>>()?;

        if symbols.is_empty() {
            return Err(ComboError::EmptyRule(label.to_string()));
        }

        Ok(Rule::new(symbols, label))
    }
}

/// Parses a rule set, one rule per line. Blank lines and lines starting with `#` are skipped.
///
/// # Errors
/// Returns [ComboError::RuleLine] with the 1-based line number of the first invalid rule.
pub fn parse_rules(text: &str) -> Result<Vec<Rule<Control>>, ComboError> {
    let mut rules = Vec::new();

    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let rule = line.parse::<Rule<Control>>().map_err(|e| ComboError::RuleLine(i + 1, Box::new(e)))?;
        rules.push(rule);
    }

    debug!("Parsed {} rules", rules.len());
    Ok(rules)
}
