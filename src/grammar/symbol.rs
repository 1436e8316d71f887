use crate::utils::quote_terminal;
use std::fmt;

/// A context-free grammar non-terminal
#[derive(Debug, Eq, Hash, PartialEq, Ord, PartialOrd, Clone)]
pub enum NonTerminal {
    Named(String),
    /// The synthetic initial non-terminal which reduces to a goal symbol
    Init { goal: String },
}

impl NonTerminal {
    /// Returns a new named non-terminal
    pub fn named(name: &str) -> NonTerminal {
        NonTerminal::Named(name.to_string())
    }

    /// Returns the initial non-terminal for the given goal symbol
    pub fn init(goal: &str) -> NonTerminal {
        NonTerminal::Init {
            goal: goal.to_string(),
        }
    }

    /// Returns true if this is the synthetic initial non-terminal
    pub fn is_init(&self) -> bool {
        matches!(self, NonTerminal::Init { .. })
    }

    /// Returns the rendered name of the non-terminal. The initial
    /// non-terminal is named after its goal symbol.
    pub fn name(&self) -> String {
        match self {
            NonTerminal::Named(name) => name.clone(),
            NonTerminal::Init { goal } => format!("Start_{}", goal),
        }
    }
}

impl fmt::Display for NonTerminal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A context-free grammar symbol
#[derive(Debug, Eq, Hash, PartialEq, Ord, PartialOrd, Clone)]
pub enum Symbol {
    Terminal(String),
    NonTerminal(NonTerminal),
}

impl Symbol {
    pub fn terminal(name: &str) -> Symbol {
        Symbol::Terminal(name.to_string())
    }

    pub fn non_terminal(name: &str) -> Symbol {
        Symbol::NonTerminal(NonTerminal::named(name))
    }

    /// Returns true if the symbol is a terminal
    pub fn is_terminal(&self) -> bool {
        matches!(self, Symbol::Terminal(_))
    }
}

impl From<NonTerminal> for Symbol {
    fn from(nt: NonTerminal) -> Self {
        Symbol::NonTerminal(nt)
    }
}

impl fmt::Display for Symbol {
    /// Formats the symbol, quoting terminals
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Symbol::Terminal(name) => write!(f, "{}", quote_terminal(name)),
            Symbol::NonTerminal(nt) => write!(f, "{}", nt),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_name() {
        assert_eq!(NonTerminal::named("Expr").name(), "Expr");
        assert_eq!(NonTerminal::init("Script").name(), "Start_Script");
        assert!(NonTerminal::init("Script").is_init());
        assert!(!NonTerminal::named("Start_Script").is_init());
    }

    #[test]
    fn test_init_is_not_named() {
        // Only the rendered names agree
        assert_ne!(NonTerminal::init("Script"), NonTerminal::named("Start_Script"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Symbol::terminal("+").to_string(), "'+'");
        assert_eq!(Symbol::non_terminal("Term").to_string(), "Term");
        assert_eq!(Symbol::from(NonTerminal::init("Module")).to_string(), "Start_Module");
    }

    #[test]
    fn test_ordering() {
        let mut symbols = vec![
            Symbol::non_terminal("B"),
            Symbol::terminal("b"),
            Symbol::non_terminal("A"),
            Symbol::terminal("a"),
        ];
        symbols.sort();
        assert_eq!(
            symbols,
            vec![
                Symbol::terminal("a"),
                Symbol::terminal("b"),
                Symbol::non_terminal("A"),
                Symbol::non_terminal("B"),
            ]
        );
    }
}
