use crate::compiler::Compiler;
use crate::harness;

#[derive(clap::Parser, Debug)]
#[clap(about = "Run the acceptance suite against the compiler")]
pub struct Opts {}

pub fn execute(_opts: &Opts) -> anyhow::Result<()> {
    let compiler = Compiler::with_settings(harness::default_settings());
    let report = harness::run(&compiler, &harness::default_cases());

    for (index, outcome) in report.outcomes.iter().enumerate() {
        let millis = outcome.elapsed.as_secs_f64() * 1000.0;

        if outcome.passed() {
            println!("PASS #{}: {} ({:.2}ms)", index + 1, outcome.case.name, millis);
        } else {
            eprintln!("FAIL #{}: {}", index + 1, outcome.case.name);
            eprintln!("   Input:    {}", outcome.case.input);
            eprintln!("   Expected: {:?}", outcome.case.expected);
            match &outcome.actual {
                Ok(output) => eprintln!("   Actual:   {:?}\n", output),
                Err(e) => eprintln!("   Error:    {}\n", e),
            }
        }
    }

    println!(
        "\nSummary: {} passed, {} failed",
        report.passed(),
        report.failed()
    );

    if report.is_success() {
        Ok(())
    } else {
        anyhow::bail!("{} case(s) failed", report.failed())
    }
}
