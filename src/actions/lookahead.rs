use super::{Action, ActionKind, Shifted};
use crate::grammar::{Sequence, Symbol};
use crate::ordered::OrderedSet;
use log::debug;
use std::fmt;

/// Asserts that the upcoming symbols match one of the candidate sequences
/// (or none of them, when `accept` is false). The parser stack is left as is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Lookahead {
    sequences: OrderedSet<Sequence>,
    accept: bool,
}

impl Lookahead {
    pub fn new(sequences: OrderedSet<Sequence>, accept: bool) -> Lookahead {
        Lookahead { sequences, accept }
    }

    /// Returns the candidate sequences
    pub fn sequences(&self) -> &OrderedSet<Sequence> {
        &self.sequences
    }

    /// Returns true if matching a candidate sequence accepts the input
    pub fn accept(&self) -> bool {
        self.accept
    }

    /// Narrows the candidate sequences to the ones starting with the shifted
    /// symbols. A candidate fully matched by the shift decides the assertion,
    /// as does the absence of any matching candidate.
    pub(super) fn shifted(&self, shifted: &[Symbol]) -> Shifted {
        let shift = shifted.len();
        let mut remaining: Vec<Sequence> = Vec::new();

        for seq in &self.sequences {
            let n = seq.len().min(shift);
            if shifted[..n] != seq[..n] {
                continue;
            }
            if seq.len() <= shift {
                debug!("{} matched by {:?}", self, shifted);
                return Shifted::Resolved(self.accept);
            }
            remaining.push(seq[shift..].to_vec());
        }

        if remaining.is_empty() {
            debug!("{} refuted by {:?}", self, shifted);
            return Shifted::Resolved(!self.accept);
        }

        Shifted::Continue(Lookahead::new(remaining.into_iter().collect(), self.accept).into())
    }
}

impl From<Lookahead> for Action {
    fn from(lookahead: Lookahead) -> Self {
        Action::new(ActionKind::Lookahead(lookahead), Vec::new(), Vec::new())
    }
}

impl Action {
    /// Returns a new lookahead assertion
    pub fn lookahead(sequences: OrderedSet<Sequence>, accept: bool) -> Action {
        Lookahead::new(sequences, accept).into()
    }
}

impl fmt::Display for Lookahead {
    /// Formats the assertion as Lookahead([['a', 'b'], ['c']], true)
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let sequences: Vec<String> = self
            .sequences
            .iter()
            .map(|seq| {
                let symbols: Vec<String> = seq.iter().map(|s| s.to_string()).collect();
                format!("[{}]", symbols.join(", "))
            })
            .collect();

        write!(f, "Lookahead([{}], {})", sequences.join(", "), self.accept)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::{sequences, symbols};

    #[test]
    fn test_is_condition() {
        let action = Action::lookahead(sequences(&[&["a"]]), false);
        assert!(action.is_condition());
        assert!(!action.update_stack());
        assert_eq!(action.condition(), &action);
        assert!(action.reads().is_empty());
        assert!(action.writes().is_empty());
    }

    #[test]
    fn test_shifted_narrows() {
        let action = Action::lookahead(sequences(&[&["a", "b"]]), true);

        let narrowed = action.shifted_action(&symbols(&["a"]));
        assert_eq!(
            narrowed,
            Shifted::Continue(Action::lookahead(sequences(&[&["b"]]), true))
        );

        let Shifted::Continue(narrowed) = narrowed else {
            panic!("lookahead resolved early");
        };
        assert_eq!(narrowed.shifted_action(&symbols(&["b"])), Shifted::Resolved(true));
    }

    #[test]
    fn test_shifted_refuted() {
        let action = Action::lookahead(sequences(&[&["a"]]), true);
        assert_eq!(action.shifted_action(&symbols(&["x"])), Shifted::Resolved(false));

        let action = Action::lookahead(sequences(&[&["a"]]), false);
        assert_eq!(action.shifted_action(&symbols(&["x"])), Shifted::Resolved(true));
        assert_eq!(action.shifted_action(&symbols(&["a"])), Shifted::Resolved(false));
    }

    #[test]
    fn test_shifted_longer_than_sequence() {
        let action = Action::lookahead(sequences(&[&["a"], &["b", "c"]]), true);
        assert_eq!(
            action.shifted_action(&symbols(&["a", "z", "z"])),
            Shifted::Resolved(true)
        );
        assert_eq!(
            action.shifted_action(&symbols(&["b", "z"])),
            Shifted::Resolved(false)
        );
    }

    #[test]
    fn test_shifted_keeps_order() {
        let action = Action::lookahead(
            sequences(&[&["a", "c"], &["b", "c"], &["a", "b", "c"], &["a", "c"]]),
            false,
        );
        assert_eq!(
            action.shifted_action(&symbols(&["a"])),
            Shifted::Continue(Action::lookahead(sequences(&[&["c"], &["b", "c"]]), false))
        );
    }

    #[test]
    fn test_shifted_empty() {
        let action = Action::lookahead(sequences(&[&["a", "b"], &["c"]]), true);
        assert_eq!(action.shifted_action(&[]), Shifted::Continue(action.clone()));
    }

    #[test]
    fn test_display() {
        let action = Action::lookahead(sequences(&[&["a", "b"], &["c"]]), true);
        assert_eq!(action.to_string(), "Lookahead([['a', 'b'], ['c']], true)");
    }
}
