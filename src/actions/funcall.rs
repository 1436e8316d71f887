use super::{Action, ActionKind};
use std::fmt;

/// Calls a semantic method with arguments read from the parser stack. The
/// argument offsets are relative to the top of the stack, and `offset` is
/// added to each of them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FunCall {
    pub method: String,
    pub args: Vec<usize>,
    /// Name of the variable holding the result, if any
    pub set_to: Option<String>,
    pub offset: usize,
}

impl FunCall {
    /// Returns the stack offsets of the arguments, with the offset applied
    pub fn arg_offsets(&self) -> Vec<usize> {
        self.args.iter().map(|arg| arg + self.offset).collect()
    }

    pub(super) fn shifted(&self, shift: usize) -> FunCall {
        FunCall {
            method: self.method.clone(),
            args: self.args.clone(),
            set_to: self.set_to.clone(),
            offset: self.offset + shift,
        }
    }
}

impl Action {
    /// Returns a new method call. The traits read and written by the method
    /// are given by the caller; a result bound with `set_to` is only visible
    /// to other actions through these.
    pub fn fun_call(
        method: &str,
        read: Vec<String>,
        write: Vec<String>,
        args: Vec<usize>,
        set_to: Option<&str>,
        offset: usize,
    ) -> Action {
        let call = FunCall {
            method: method.to_string(),
            args,
            set_to: set_to.map(str::to_string),
            offset,
        };
        Action::new(ActionKind::FunCall(call), read, write)
    }
}

impl fmt::Display for FunCall {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let args: Vec<String> = self.args.iter().map(|arg| arg.to_string()).collect();
        write!(
            f,
            "FunCall({}, {}, [{}], {})",
            self.method,
            self.offset,
            args.join(", "),
            self.set_to.as_deref().unwrap_or("None")
        )
    }
}
