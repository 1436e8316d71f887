//! Actions attached to the edges of a parse table under construction.
//!
//! An [`Action`] is an immutable value. Besides its variant it carries the
//! names of the traits it reads and writes, which are compared as multisets
//! when testing two actions for equality.

mod flags;
mod funcall;
mod lookahead;
mod reduce;
mod seq;

pub use flags::{FilterFlag, FlagBalance, PopFlag, PushFlag};
pub use funcall::FunCall;
pub use lookahead::Lookahead;
pub use reduce::Reduce;
pub use seq::{fuse_chain, Seq};

use crate::errors::{Error, Result};
use crate::grammar::Symbol;
use std::cmp::Ordering;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

/// The variants of an action
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ActionKind {
    Reduce(Reduce),
    Lookahead(Lookahead),
    FilterFlag(FilterFlag),
    PushFlag(PushFlag),
    PopFlag(PopFlag),
    FunCall(FunCall),
    Seq(Seq),
}

impl ActionKind {
    /// Returns the position of the variant in declaration order
    fn tag(&self) -> u8 {
        match self {
            ActionKind::Reduce(_) => 0,
            ActionKind::Lookahead(_) => 1,
            ActionKind::FilterFlag(_) => 2,
            ActionKind::PushFlag(_) => 3,
            ActionKind::PopFlag(_) => 4,
            ActionKind::FunCall(_) => 5,
            ActionKind::Seq(_) => 6,
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ActionKind::Reduce(a) => write!(f, "{}", a),
            ActionKind::Lookahead(a) => write!(f, "{}", a),
            ActionKind::FilterFlag(a) => write!(f, "{}", a),
            ActionKind::PushFlag(a) => write!(f, "{}", a),
            ActionKind::PopFlag(a) => write!(f, "{}", a),
            ActionKind::FunCall(a) => write!(f, "{}", a),
            ActionKind::Seq(a) => write!(f, "{}", a),
        }
    }
}

/// The outcome of shifting an action over already pushed symbols
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shifted {
    /// The action was a condition which is now decided
    Resolved(bool),
    /// The action still has to be executed
    Continue(Action),
}

impl Shifted {
    /// Returns the remaining action, or None if the condition was resolved
    pub fn action(self) -> Option<Action> {
        match self {
            Shifted::Continue(action) => Some(action),
            Shifted::Resolved(_) => None,
        }
    }
}

/// An action executed when following an edge of the parse table
#[derive(Debug, Clone)]
pub struct Action {
    kind: ActionKind,
    read: Vec<String>,
    write: Vec<String>,
    fingerprint: OnceLock<u64>,
}

impl Action {
    fn new(kind: ActionKind, read: Vec<String>, write: Vec<String>) -> Action {
        Action {
            kind,
            read,
            write,
            fingerprint: OnceLock::new(),
        }
    }

    pub fn kind(&self) -> &ActionKind {
        &self.kind
    }

    /// Returns the names of the traits consumed by this action
    pub fn reads(&self) -> &[String] {
        &self.read
    }

    /// Returns the names of the traits mutated by this action
    pub fn writes(&self) -> &[String] {
        &self.write
    }

    /// Returns true if this action decides whether the next state is reached
    /// without changing the parser stack
    pub fn is_condition(&self) -> bool {
        match &self.kind {
            ActionKind::Lookahead(_) | ActionKind::FilterFlag(_) => true,
            ActionKind::Seq(seq) => seq.first().is_condition(),
            _ => false,
        }
    }

    /// Returns the conditional part of this action
    pub fn try_condition(&self) -> Result<&Action> {
        match &self.kind {
            ActionKind::Lookahead(_) | ActionKind::FilterFlag(_) => Ok(self),
            ActionKind::Seq(seq) if seq.first().is_condition() => Ok(seq.first()),
            _ => Err(Error::NotACondition(self.to_string())),
        }
    }

    /// Returns the conditional part of this action. Panics if the action is
    /// not a condition.
    pub fn condition(&self) -> &Action {
        self.try_condition().unwrap_or_else(|e| panic!("{}", e))
    }

    /// Returns true if this action reduces the parser stack and resumes at a
    /// different state
    pub fn update_stack(&self) -> bool {
        match &self.kind {
            ActionKind::Reduce(_) => true,
            ActionKind::Seq(seq) => seq.last().update_stack(),
            _ => false,
        }
    }

    /// Returns the reduction performed by this action
    pub fn try_reduce_with(&self) -> Result<&Reduce> {
        match &self.kind {
            ActionKind::Reduce(reduce) => Ok(reduce),
            ActionKind::Seq(seq) if seq.last().update_stack() => seq.last().try_reduce_with(),
            _ => Err(Error::NoStackUpdate(self.to_string())),
        }
    }

    /// Returns the reduction performed by this action. Panics if the action
    /// does not update the stack.
    pub fn reduce_with(&self) -> &Reduce {
        self.try_reduce_with().unwrap_or_else(|e| panic!("{}", e))
    }

    /// Returns this action as if the given symbols had been shifted since it
    /// was recorded. Lookahead assertions may be decided by the shift.
    pub fn shifted_action(&self, shifted: &[Symbol]) -> Shifted {
        match &self.kind {
            ActionKind::Reduce(reduce) => Shifted::Continue(reduce.shifted(shifted.len()).into()),
            ActionKind::Lookahead(lookahead) => lookahead.shifted(shifted),
            ActionKind::FunCall(call) => Shifted::Continue(Action::new(
                ActionKind::FunCall(call.shifted(shifted.len())),
                self.read.clone(),
                self.write.clone(),
            )),
            ActionKind::Seq(seq) => seq.shifted(shifted),
            ActionKind::FilterFlag(_) | ActionKind::PushFlag(_) | ActionKind::PopFlag(_) => {
                Shifted::Continue(self.clone())
            }
        }
    }

    /// Returns the actions executed in order by this action. Sequences are
    /// never nested, so none of the returned actions is a sequence.
    pub fn children(&self) -> &[Action] {
        match &self.kind {
            ActionKind::Seq(seq) => seq.actions(),
            _ => std::slice::from_ref(self),
        }
    }

    /// Returns true if the two actions cannot be reordered, because one of
    /// them reads or writes a trait written by the other
    pub fn conflicts_with(&self, other: &Action) -> bool {
        self.read.iter().any(|name| other.write.contains(name))
            || self
                .write
                .iter()
                .any(|name| other.write.contains(name) || other.read.contains(name))
    }

    /// Returns the structural hash of the action, computed once
    pub fn fingerprint(&self) -> u64 {
        *self.fingerprint.get_or_init(|| {
            let mut hasher = DefaultHasher::new();
            self.kind.hash(&mut hasher);
            "rd".hash(&mut hasher);
            sorted(&self.read).hash(&mut hasher);
            "wd".hash(&mut hasher);
            sorted(&self.write).hash(&mut hasher);
            hasher.finish()
        })
    }
}

/// Returns the trait names in sorted order
fn sorted(names: &[String]) -> Vec<&str> {
    let mut names: Vec<&str> = names.iter().map(String::as_str).collect();
    names.sort_unstable();
    names
}

impl PartialEq for Action {
    fn eq(&self, other: &Action) -> bool {
        self.fingerprint() == other.fingerprint()
            && self.kind == other.kind
            && sorted(&self.read) == sorted(&other.read)
            && sorted(&self.write) == sorted(&other.write)
    }
}

impl Eq for Action {}

impl Hash for Action {
    fn hash<H>(&self, state: &mut H)
    where
        H: Hasher,
    {
        state.write_u64(self.fingerprint());
    }
}

impl Ord for Action {
    /// Orders actions by variant, then by their trait dependencies, then by
    /// the fields of the variant
    fn cmp(&self, other: &Self) -> Ordering {
        (
            self.kind.tag(),
            sorted(&self.read),
            sorted(&self.write),
            &self.kind,
        )
            .cmp(&(
                other.kind.tag(),
                sorted(&other.read),
                sorted(&other.write),
                &other.kind,
            ))
    }
}

impl PartialOrd for Action {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
