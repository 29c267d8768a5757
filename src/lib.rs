extern crate thiserror;

extern crate nom;
extern crate nom_locate;

pub mod api;
pub mod cmd;
pub mod compiler;
pub mod harness;

pub use compiler::backend::code_generator::generate;
pub use compiler::frontend::lexer::tokenize;
pub use compiler::frontend::parser::parse;
pub use compiler::transformer::transform;
pub use compiler::{compile, Compiler};

#[cfg(test)]
#[macro_use]
extern crate matches;

#[cfg(test)]
extern crate quickcheck;

#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;
