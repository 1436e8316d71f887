//! Actions on the flag stacks which live next to the parser stack.
//!
//! A flag is pushed with [`PushFlag`] when entering a context which has to be
//! disambiguated later, checked with [`FilterFlag`] and popped with
//! [`PopFlag`] once the matching reduction is done. Keeping pushes and pops
//! balanced is up to the table construction; [`FlagBalance`] can verify it
//! along a path of edges.

use super::{Action, ActionKind};
use crate::errors::{Error, Result};
use log::debug;
use std::collections::BTreeMap;
use std::fmt;

/// Returns the name of the trait used to order accesses to a flag
fn flag_trait(flag: &str) -> String {
    format!("flag_{}", flag)
}

/// Continues to the next state if the top of the flag stack holds `value`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FilterFlag {
    pub flag: String,
    pub value: String,
}

/// Pushes `value` on the flag stack
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PushFlag {
    pub flag: String,
    pub value: String,
}

/// Pops the top of the flag stack
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PopFlag {
    pub flag: String,
}

impl From<FilterFlag> for Action {
    fn from(filter: FilterFlag) -> Self {
        let read = vec![flag_trait(&filter.flag)];
        Action::new(ActionKind::FilterFlag(filter), read, Vec::new())
    }
}

impl From<PushFlag> for Action {
    fn from(push: PushFlag) -> Self {
        let write = vec![flag_trait(&push.flag)];
        Action::new(ActionKind::PushFlag(push), Vec::new(), write)
    }
}

impl From<PopFlag> for Action {
    fn from(pop: PopFlag) -> Self {
        let name = flag_trait(&pop.flag);
        Action::new(ActionKind::PopFlag(pop), vec![name.clone()], vec![name])
    }
}

impl Action {
    pub fn filter_flag(flag: &str, value: &str) -> Action {
        FilterFlag {
            flag: flag.to_string(),
            value: value.to_string(),
        }
        .into()
    }

    pub fn push_flag(flag: &str, value: &str) -> Action {
        PushFlag {
            flag: flag.to_string(),
            value: value.to_string(),
        }
        .into()
    }

    pub fn pop_flag(flag: &str) -> Action {
        PopFlag {
            flag: flag.to_string(),
        }
        .into()
    }
}

impl fmt::Display for FilterFlag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "FilterFlag({}, {})", self.flag, self.value)
    }
}

impl fmt::Display for PushFlag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PushFlag({}, {})", self.flag, self.value)
    }
}

impl fmt::Display for PopFlag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PopFlag({})", self.flag)
    }
}

/// Follows the flag stacks along a path of edges and reports pops and
/// filters of flags which were never pushed on the path
#[derive(Debug, Default)]
pub struct FlagBalance {
    stacks: BTreeMap<String, Vec<String>>,
    strict: bool,
}

impl FlagBalance {
    /// Returns a new checker with empty flag stacks
    pub fn new() -> FlagBalance {
        FlagBalance {
            stacks: BTreeMap::new(),
            strict: false,
        }
    }

    /// Sets whether filtering a flag which was not pushed on the path is an
    /// error. Paths which start in the middle of a context should not be
    /// checked strictly.
    pub fn strict(mut self, strict: bool) -> FlagBalance {
        self.strict = strict;
        self
    }

    /// Applies the flag actions executed by an edge, in order
    pub fn visit(&mut self, action: &Action) -> Result<()> {
        for child in action.children() {
            match child.kind() {
                ActionKind::PushFlag(push) => {
                    self.stacks
                        .entry(push.flag.clone())
                        .or_default()
                        .push(push.value.clone());
                }
                ActionKind::PopFlag(pop) => {
                    let popped = self.stacks.get_mut(&pop.flag).and_then(|stack| stack.pop());
                    if popped.is_none() {
                        return Err(Error::UnbalancedPop(pop.flag.clone()));
                    }
                }
                ActionKind::FilterFlag(filter) => {
                    if self.strict && self.depth(&filter.flag) == 0 {
                        return Err(Error::FilterUnpushed(filter.flag.clone()));
                    }
                }
                _ => (),
            }
        }

        Ok(())
    }

    /// Returns the number of values pushed on the given flag stack
    pub fn depth(&self, flag: &str) -> usize {
        self.stacks.get(flag).map_or(0, |stack| stack.len())
    }

    /// Returns the value at the top of the given flag stack
    pub fn top(&self, flag: &str) -> Option<&str> {
        self.stacks
            .get(flag)
            .and_then(|stack| stack.last())
            .map(String::as_str)
    }

    /// Consumes the checker, failing if any flag is still pushed
    pub fn finish(self) -> Result<()> {
        let pushed: Vec<String> = self
            .stacks
            .into_iter()
            .filter(|(_, stack)| !stack.is_empty())
            .map(|(flag, _)| flag)
            .collect();

        if pushed.is_empty() {
            Ok(())
        } else {
            Err(Error::UnpoppedFlags(pushed))
        }
    }

    /// Checks that every flag pushed along the path is popped again, and
    /// that no flag is popped before being pushed
    pub fn check_path<'a, I>(path: I, strict: bool) -> Result<()>
    where
        I: IntoIterator<Item = &'a Action>,
    {
        let mut balance = FlagBalance::new().strict(strict);
        for (i, action) in path.into_iter().enumerate() {
            debug!("checking flags of edge {}: {}", i, action);
            balance.visit(action)?;
        }
        balance.finish()
    }
}
