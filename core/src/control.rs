use {
    crate::ComboError,
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

/// Symbols that have a display name, used when dumping an automaton.
pub trait SymbolName {
    /// Returns the display name of this symbol.
    fn name(&self) -> &str;
}

/// A single controller input.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Control {
    /// Directional input towards the left.
    Left,

    /// Directional input towards the right.
    Right,

    /// Front kick button.
    FrontKick,

    /// Front punch button.
    FrontPunch,

    /// Back punch button.
    BackPunch,

    /// Block button.
    Block,
}

impl Control {
    /// Every control, in declaration order.
    pub const ALL: [Control; 6] =
        [Control::Left, Control::Right, Control::FrontKick, Control::FrontPunch, Control::BackPunch, Control::Block];

    /// Returns the display name of this control.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
            Self::FrontKick => "FrontKick",
            Self::FrontPunch => "FrontPunch",
            Self::BackPunch => "BackPunch",
            Self::Block => "Block",
        }
    }
}

impl SymbolName for Control {
    fn name(&self) -> &str {
        Control::name(*self)
    }
}

impl Display for Control {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        f.write_str(Control::name(*self))
    }
}

impl FromStr for Control {
    type Err = ComboError;

    /// Parses a control from its display name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ComboError::UnknownControl(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use {
        super::{Control, SymbolName},
        crate::ComboError,
        pretty_assertions::assert_eq,
        test_log::test,
    };

    #[test]
    fn test_names_round_trip() {
        for c in Control::ALL {
            assert_eq!(c.to_string().parse::<Control>().unwrap(), c);
            assert_eq!(SymbolName::name(&c), c.to_string());
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("frontpunch".parse::<Control>().unwrap(), Control::FrontPunch);
        assert_eq!("BLOCK".parse::<Control>().unwrap(), Control::Block);
        assert_eq!("Jump".parse::<Control>(), Err(ComboError::UnknownControl("Jump".to_string())));
        assert_eq!("".parse::<Control>(), Err(ComboError::UnknownControl(String::new())));
    }
}
