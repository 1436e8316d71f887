use cfg_actions::grammar::{NonTerminal, Sequence, Symbol};
use cfg_actions::ordered::OrderedSet;

#[allow(dead_code)]
/// Helper function to build terminal symbols from their names
pub fn symbols(names: &[&str]) -> Vec<Symbol> {
    names.iter().map(|name| Symbol::terminal(name)).collect()
}

#[allow(dead_code)]
/// Helper function to build a set of terminal sequences
pub fn sequences(seqs: &[&[&str]]) -> OrderedSet<Sequence> {
    seqs.iter().map(|seq| symbols(seq)).collect()
}

#[allow(dead_code)]
/// Helper function to build a named non-terminal
pub fn nt(name: &str) -> NonTerminal {
    NonTerminal::named(name)
}
