/// CLI entrypoint for the checker binary
///
/// Invocation follows the judging harness's contract:
/// `checker <input-file> <output-file> <answer-file> [report-file [-appes]]`
/// where `-appes` switches the report to the XML shape the harness parses.
/// The verdict is printed to stderr and mapped to the process exit status;
/// stream-open failures are internal failures (the harness, not the
/// contestant, supplies the paths).
use crate::observability::AuditLog;
use crate::report::{self, ReportFormat};
use crate::stream::Source;
use crate::verdict::outcome::{CheckResult, Outcome};
use crate::verdict::VerdictEngine;
use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::path::{Path, PathBuf};
use uuid::Uuid;

#[derive(Parser)]
#[command(
    name = "checker",
    version,
    about = "YES or NO (with answer) output verifier"
)]
struct Cli {
    /// Instance (test input) file
    input: PathBuf,
    /// Contestant output file
    output: PathBuf,
    /// Reference (jury) answer file
    answer: PathBuf,
    /// Optional report file
    report: Option<PathBuf>,
    /// Literal "-appes" selects the XML report shape
    #[arg(allow_hyphen_values = true, value_parser = ["-appes"])]
    appes: Option<String>,
}

pub fn run() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let run_id = Uuid::new_v4();
    let mut audit = AuditLog::from_env();
    audit.run_started(run_id);

    let result = match open_streams(&cli) {
        Ok((mut instance, mut reference, mut submission)) => {
            VerdictEngine::check(&mut instance, &mut reference, &mut submission)
        }
        Err(err) => CheckResult {
            outcome: Outcome::InternalFailure,
            message: format!("{:#}", err),
        },
    };

    if result.outcome.contestant_attributable() {
        log::info!("run {}: {}: {}", run_id, result.outcome, result.message);
    } else {
        log::error!("run {}: {}: {}", run_id, result.outcome, result.message);
    }
    audit.verdict_emitted(run_id, &result);

    if let Some(report_path) = &cli.report {
        let format = if cli.appes.is_some() {
            ReportFormat::Appes
        } else {
            ReportFormat::Text
        };
        if let Err(err) = report::write_report(report_path, format, &result) {
            eprintln!(
                "FAIL cannot write report {}: {}",
                report_path.display(),
                err
            );
            std::process::exit(Outcome::InternalFailure.exit_code());
        }
    }

    eprintln!("{} {}", result.outcome.stderr_prefix(), result.message);
    std::process::exit(result.outcome.exit_code());
}

fn open_streams(cli: &Cli) -> Result<(Source, Source, Source)> {
    let instance = Source::trusted(open(&cli.input)?, "input")
        .with_context(|| format!("cannot read {}", cli.input.display()))?;
    let reference = Source::trusted(open(&cli.answer)?, "answer")
        .with_context(|| format!("cannot read {}", cli.answer.display()))?;
    let submission = Source::untrusted(open(&cli.output)?, "output")
        .with_context(|| format!("cannot read {}", cli.output.display()))?;
    Ok((instance, reference, submission))
}

fn open(path: &Path) -> Result<File> {
    File::open(path).with_context(|| format!("cannot open {}", path.display()))
}
