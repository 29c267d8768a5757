use crate::api::Envelope;
use crate::compiler::backend::Target;
use crate::compiler::error::reporting::ErrorReporter;
use crate::compiler::source::Source;
use crate::compiler::{Compiler, Settings};
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

/// The representation written by `compile`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emit {
    Tokens,
    Ast,
    TargetAst,
    Code,
}

impl FromStr for Emit {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tokens" => Ok(Emit::Tokens),
            "ast" => Ok(Emit::Ast),
            "target-ast" => Ok(Emit::TargetAst),
            "code" => Ok(Emit::Code),
            other => anyhow::bail!(
                "unknown stage `{}`, expected one of: tokens, ast, target-ast, code",
                other
            ),
        }
    }
}

impl fmt::Display for Emit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Emit::Tokens => "tokens",
            Emit::Ast => "ast",
            Emit::TargetAst => "target-ast",
            Emit::Code => "code",
        };

        f.write_str(name)
    }
}

#[derive(clap::Parser, Debug)]
#[clap(about = "Compile a program and write the result")]
pub struct Opts {
    /// The file to compile. Reads stdin when absent or `-`.
    #[clap(parse(from_os_str))]
    input: Option<PathBuf>,

    /// Compile this expression instead of reading a file.
    #[clap(short, long, conflicts_with = "input")]
    expr: Option<String>,

    /// How to frame the generated code: plain or c.
    #[clap(short, long, default_value = "plain")]
    target: Target,

    /// Which stage to write: tokens, ast, target-ast or code.
    #[clap(long, default_value = "code")]
    emit: Emit,

    /// Write a JSON envelope instead of the raw result.
    #[clap(long)]
    json: bool,

    /// Write to this file instead of stdout.
    #[clap(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
}

impl Opts {
    fn source(&self) -> io::Result<Source> {
        match (&self.expr, &self.input) {
            (Some(expr), _) => Ok(Source::synthetic(expr.clone())),
            (None, Some(path)) if path.as_os_str() != "-" => Source::from_file(path),
            (None, _) => Source::from_stdin(),
        }
    }
}

pub fn execute(opts: &Opts) -> anyhow::Result<()> {
    let source = opts.source()?;
    let compiler = Compiler::with_settings(Settings::default().with_target(opts.target));

    log::debug!("compiling {} (emit: {})", source.origin(), opts.emit);

    if opts.json {
        let result = compiler.compile(source.content());
        let (_status, envelope) = Envelope::from_result(source.content(), &result);
        write_output(opts, &envelope.to_json()?)?;

        return match result {
            Ok(_) => Ok(()),
            Err(_) => anyhow::bail!("compilation failed"),
        };
    }

    match run_stages(&compiler, source.content(), opts.emit) {
        Ok(output) => write_output(opts, &output),
        Err(e) => {
            ErrorReporter::new(&source).report_error(&e)?;
            anyhow::bail!("compilation failed")
        }
    }
}

fn run_stages(compiler: &Compiler, source: &str, emit: Emit) -> crate::compiler::Result<String> {
    let tokens = compiler.tokenize(source)?;
    if emit == Emit::Tokens {
        return Ok(format!("{:#?}", tokens));
    }

    let ast = compiler.parse(&tokens)?;
    if emit == Emit::Ast {
        return Ok(format!("{:#?}", ast));
    }

    let new_ast = compiler.transform(&ast)?;
    if emit == Emit::TargetAst {
        return Ok(format!("{:#?}", new_ast));
    }

    Ok(compiler.generate(&new_ast))
}

fn write_output(opts: &Opts, output: &str) -> anyhow::Result<()> {
    match &opts.output {
        Some(path) => std::fs::write(path, format!("{}\n", output))?,
        None => writeln!(io::stdout(), "{}", output)?,
    }

    Ok(())
}
