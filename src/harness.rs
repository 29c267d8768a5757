//! Acceptance cases that compare compiler output against expected programs.

use crate::compiler::backend::Target;
use crate::compiler::{self, Compiler, Settings};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq)]
pub struct Case {
    pub name: String,
    pub input: String,
    pub expected: String,
}

impl Case {
    pub fn new<N: Into<String>, I: Into<String>, E: Into<String>>(
        name: N,
        input: I,
        expected: E,
    ) -> Self {
        Self {
            name: name.into(),
            input: input.into(),
            expected: expected.into(),
        }
    }
}

/// Wraps `statement` the way the C target frames a single statement.
fn c_program(statement: &str) -> String {
    format!(
        "#include <stdio.h>\n\nint main() {{\n  {}\n  return 0;\n}}",
        statement
    )
}

/// The stock suite. Its expectations are written for the C target.
pub fn default_cases() -> Vec<Case> {
    vec![
        Case::new("Add Two Numbers", "(add 2 2)", c_program("add(2, 2);")),
        Case::new(
            "Subtract Two Numbers",
            "(subtract 4 2)",
            c_program("subtract(4, 2);"),
        ),
        Case::new(
            "Nested Add and Subtract",
            "(add 2 (subtract 4 2))",
            c_program("add(2, subtract(4, 2));"),
        ),
        Case::new(
            "Double Nested",
            "(add 2 (subtract (add 2 2) 2))",
            c_program("add(2, subtract(add(2, 2), 2));"),
        ),
        Case::new("Common Multi-args", "(add 1 2 3)", c_program("add(1, 2, 3);")),
        Case::new(
            "String Concatenation",
            r#"(concat "hello" "world")"#,
            c_program(r#"concat("hello", "world");"#),
        ),
        Case::new(
            "Excess Whitespace",
            "(  add    2      2  )",
            c_program("add(2, 2);"),
        ),
    ]
}

pub fn default_settings() -> Settings {
    Settings::default().with_target(Target::C)
}

#[derive(Debug)]
pub struct Outcome {
    pub case: Case,
    pub actual: compiler::Result<String>,
    pub elapsed: Duration,
}

impl Outcome {
    pub fn passed(&self) -> bool {
        matches!(&self.actual, Ok(output) if *output == self.case.expected)
    }
}

#[derive(Debug, Default)]
pub struct Report {
    pub outcomes: Vec<Outcome>,
}

impl Report {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| !o.passed())
    }
}

/// Compiles every case; a failing case never stops the run.
pub fn run(compiler: &Compiler, cases: &[Case]) -> Report {
    let outcomes = cases
        .iter()
        .map(|case| {
            let start = Instant::now();
            let actual = compiler.compile(&case.input);
            let elapsed = start.elapsed();

            log::debug!("case `{}` finished in {:?}", case.name, elapsed);

            Outcome {
                case: case.clone(),
                actual,
                elapsed,
            }
        })
        .collect();

    Report { outcomes }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_suite_passes() {
        let report = run(&Compiler::with_settings(default_settings()), &default_cases());

        assert_eq!(report.passed(), 7);
        assert!(report.is_success());
    }

    #[test]
    fn test_failures_are_reported() {
        let cases = vec![
            Case::new("good", "(f 1)", "f(1);"),
            Case::new("wrong output", "(f 1)", "f(2);"),
            Case::new("bad input", "(f @)", "f();"),
        ];
        let report = run(&Compiler::new(), &cases);

        assert_eq!(report.passed(), 1);
        assert_eq!(report.failed(), 2);
        assert_eq!(
            report
                .failures()
                .map(|o| o.case.name.as_str())
                .collect::<Vec<_>>(),
            vec!["wrong output", "bad input"]
        );
    }
}
