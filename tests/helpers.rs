#![allow(dead_code)]

pub use matches::assert_matches;
use tinyc::compiler::backend::Target;
use tinyc::compiler::{Compiler, Settings};
pub use tinyc::compiler::{Error, Result};

pub fn compile_code(code: &str) -> Result<String> {
    Compiler::new().compile(code)
}

pub fn compile_c(code: &str) -> Result<String> {
    Compiler::with_settings(Settings::default().with_target(Target::C)).compile(code)
}

pub fn assert_compiles_to(code: &str, expected: &str) {
    assert_eq!(compile_code(code).unwrap(), expected)
}
