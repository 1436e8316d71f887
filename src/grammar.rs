mod symbol;

pub use symbol::{NonTerminal, Symbol};

/// A sequence of grammar symbols, as inspected by a lookahead assertion
pub type Sequence = Vec<Symbol>;
