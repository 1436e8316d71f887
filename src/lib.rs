//! Actions executed on the edges of an LR parse table while it is being
//! generated: reductions, lookahead assertions, flag stack operations and
//! semantic calls, along with the rules for shifting and fusing them.

pub mod actions;
pub mod errors;
pub mod grammar;
pub mod ordered;
mod utils;
