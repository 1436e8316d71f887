use super::{Action, ActionKind, Shifted};
use crate::errors::{Error, Result};
use crate::grammar::Symbol;
use log::{debug, trace};
use std::fmt;

/// Executes multiple actions in order on a single edge. Only the first action
/// may be a condition, and only the last one may update the parser stack.
/// Sequences never contain other sequences.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Seq {
    actions: Vec<Action>,
}

impl Seq {
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Returns the first action. Sequences are never empty.
    pub fn first(&self) -> &Action {
        &self.actions[0]
    }

    /// Returns the last action. Sequences are never empty.
    pub fn last(&self) -> &Action {
        &self.actions[self.actions.len() - 1]
    }

    /// Checks that the actions can be executed in order on a single edge
    fn check(actions: &[Action]) -> Result<()> {
        if actions.is_empty() {
            return Err(Error::EmptySeq);
        }

        let last = actions.len() - 1;
        for (index, action) in actions.iter().enumerate() {
            if index != 0 && action.is_condition() {
                return Err(Error::ConditionNotFirst {
                    index,
                    action: action.to_string(),
                });
            }
            if index != last && action.update_stack() {
                return Err(Error::StackUpdateNotLast {
                    index,
                    action: action.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Wraps actions which are already flattened and checked
    fn build(actions: Vec<Action>) -> Action {
        let read = actions.iter().flat_map(|a| a.read.iter().cloned()).collect();
        let write = actions.iter().flat_map(|a| a.write.iter().cloned()).collect();
        Action::new(ActionKind::Seq(Seq { actions }), read, write)
    }

    /// Shifts every action of the sequence. Only the first action can be a
    /// condition: if it is refuted the whole sequence is, and if it holds it
    /// is dropped from the sequence.
    pub(super) fn shifted(&self, shifted: &[Symbol]) -> Shifted {
        let mut actions: Vec<Action> = Vec::with_capacity(self.actions.len());
        let mut resolved = false;

        for action in &self.actions {
            match action.shifted_action(shifted) {
                Shifted::Continue(action) => actions.push(action),
                Shifted::Resolved(false) => return Shifted::Resolved(false),
                Shifted::Resolved(true) => resolved = true,
            }
        }

        if resolved && actions.len() <= 1 {
            return match actions.pop() {
                Some(action) => Shifted::Continue(action),
                None => Shifted::Resolved(true),
            };
        }

        Shifted::Continue(Seq::build(actions))
    }
}

/// Replaces nested sequences by their actions
fn flatten(actions: Vec<Action>) -> Vec<Action> {
    let mut flat = Vec::with_capacity(actions.len());
    for action in actions {
        match action.kind {
            ActionKind::Seq(seq) => flat.extend(seq.actions),
            _ => flat.push(action),
        }
    }
    flat
}

impl Action {
    /// Returns a sequence of the given actions
    pub fn try_seq(actions: Vec<Action>) -> Result<Action> {
        let actions = flatten(actions);
        Seq::check(&actions)?;
        Ok(Seq::build(actions))
    }

    /// Returns a sequence of the given actions. Panics if a condition is not
    /// first or a stack update is not last.
    pub fn seq(actions: Vec<Action>) -> Action {
        Action::try_seq(actions).unwrap_or_else(|e| panic!("{}", e))
    }

    /// Returns a single action executing this action and then the other one,
    /// or None if they cannot share an edge.
    pub fn maybe_add(&self, other: &Action) -> Option<Action> {
        let actions: Vec<Action> = self
            .children()
            .iter()
            .chain(other.children())
            .cloned()
            .collect();

        match Seq::check(&actions) {
            Ok(()) => Some(Seq::build(actions)),
            Err(e) => {
                trace!("not adding {} to {}: {}", other, self, e);
                None
            }
        }
    }
}

/// Fuses the actions of consecutive edges, from the first to the last, and
/// returns the actions of the remaining edges. An action which cannot be
/// added to the previous edge starts a new one.
pub fn fuse_chain<I>(actions: I) -> Vec<Action>
where
    I: IntoIterator<Item = Action>,
{
    let mut edges: Vec<Action> = Vec::new();

    for action in actions {
        let fused = edges.last().and_then(|last| last.maybe_add(&action));
        match fused {
            Some(fused) => {
                debug!("fused edge {}", fused);
                if let Some(last) = edges.last_mut() {
                    *last = fused;
                }
            }
            None => edges.push(action),
        }
    }

    edges
}

impl fmt::Display for Seq {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let actions: Vec<String> = self.actions.iter().map(|a| a.to_string()).collect();
        write!(f, "Seq([{}])", actions.join(", "))
    }
}
