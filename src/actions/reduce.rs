use super::{Action, ActionKind};
use crate::grammar::NonTerminal;
use std::fmt;

/// Pops `pop` elements of the stack and pushes one non-terminal.
///
/// `replay` is the number of terms which were inspected by conditions
/// executed before this reduction, and which have to be shifted again using
/// the parse table once the non-terminal is pushed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Reduce {
    pub nt: NonTerminal,
    pub pop: usize,
    pub replay: usize,
}

impl Reduce {
    pub fn new(nt: NonTerminal, pop: usize, replay: usize) -> Reduce {
        Reduce { nt, pop, replay }
    }

    /// Returns the name of the trait written when reducing the non-terminal
    pub fn trait_name(&self) -> String {
        format!("nt_{}", self.nt.name())
    }

    pub(super) fn shifted(&self, shift: usize) -> Reduce {
        Reduce {
            nt: self.nt.clone(),
            pop: self.pop,
            replay: self.replay + shift,
        }
    }
}

impl From<Reduce> for Action {
    fn from(reduce: Reduce) -> Self {
        let write = vec![reduce.trait_name()];
        Action::new(ActionKind::Reduce(reduce), Vec::new(), write)
    }
}

impl Action {
    /// Returns a new reduce action
    pub fn reduce(nt: NonTerminal, pop: usize, replay: usize) -> Action {
        Reduce::new(nt, pop, replay).into()
    }
}

impl fmt::Display for Reduce {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Reduce({}, {}, {})", self.nt, self.pop, self.replay)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::actions::Shifted;
    use crate::grammar::Symbol;

    #[test]
    fn test_reduce() {
        let action = Action::reduce(NonTerminal::named("Expr"), 3, 0);
        assert!(action.update_stack());
        assert!(!action.is_condition());
        assert_eq!(action.reduce_with(), &Reduce::new(NonTerminal::named("Expr"), 3, 0));
        assert_eq!(action.to_string(), "Reduce(Expr, 3, 0)");
    }

    #[test]
    fn test_init_non_terminal() {
        let action = Action::reduce(NonTerminal::init("Script"), 1, 0);
        assert_eq!(action.writes(), &["nt_Start_Script".to_string()]);
        assert_eq!(action.to_string(), "Reduce(Start_Script, 1, 0)");
    }

    #[test]
    fn test_shifted() {
        let action = Action::reduce(NonTerminal::named("Expr"), 2, 1);
        let shift = [Symbol::terminal("+"), Symbol::non_terminal("Term")];

        assert_eq!(
            action.shifted_action(&shift),
            Shifted::Continue(Action::reduce(NonTerminal::named("Expr"), 2, 3))
        );
        assert_eq!(action.shifted_action(&[]), Shifted::Continue(action.clone()));
    }
}
