// Command line front end for JMBG/OIB validation

use clap::Parser;
use jmbg::{IdentifierError, IdentifierValidator, ValidationResult};
use log::{debug, info};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "jmbg", version, about = "Validate JMBG and OIB identification numbers")]
struct Cli {
    /// Also accept 11-digit OIB numbers
    #[arg(long)]
    oib: bool,

    /// Print one JSON object per identifier instead of a report
    #[arg(long)]
    json: bool,

    /// Identifiers to validate; read from stdin, one per line, when omitted
    identifiers: Vec<String>,
}

// Function to print a human readable validation report
fn print_report<W: Write>(out: &mut W, result: &ValidationResult) -> io::Result<()> {
    writeln!(out, "\nIDENTIFIER: {}", result.raw_value())?;
    writeln!(
        out,
        "  Result: {}",
        if result.is_valid() { "VALID" } else { "INVALID" }
    )?;
    match result.birth_date() {
        Some(date) => writeln!(
            out,
            "  Birth date: {} ({})",
            date.format("%d.%m.%Y"),
            if result.is_birth_date_valid() {
                "plausible"
            } else {
                "in the future"
            }
        )?,
        None => writeln!(out, "  Birth date: none")?,
    }
    writeln!(out, "  Region: {}", result.region())?;
    writeln!(out, "  Gender: {}", result.gender())?;
    writeln!(out, "  Formatted: {}", result.format())
}

/// Reads one identifier per line, trimming whitespace and skipping blank lines.
fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>, IdentifierError> {
    let mut identifiers = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            identifiers.push(trimmed.to_string());
        }
    }
    Ok(identifiers)
}

/// Validates every identifier and writes the results to `out`.
///
/// Returns true only when all identifiers are valid.
fn report_all<W: Write>(
    validator: &IdentifierValidator,
    identifiers: &[String],
    json: bool,
    out: &mut W,
) -> Result<bool, IdentifierError> {
    info!(
        "Validating {} identifier(s), OIB accepted: {}",
        identifiers.len(),
        validator.accepts_oib()
    );

    let mut all_valid = true;
    for identifier in identifiers {
        let result = validator.validate(identifier);
        all_valid &= result.is_valid();

        if json {
            writeln!(out, "{}", serde_json::to_string(&result)?)?;
        } else {
            print_report(out, &result)?;
        }
    }

    Ok(all_valid)
}

fn run(cli: &Cli) -> Result<bool, IdentifierError> {
    let identifiers = if cli.identifiers.is_empty() {
        debug!("No identifiers given, reading from stdin");
        read_lines(io::stdin().lock())?
    } else {
        cli.identifiers.clone()
    };

    let validator = IdentifierValidator::with_oib(cli.oib);
    report_all(&validator, &identifiers, cli.json, &mut io::stdout().lock())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error validating identifiers: {}", err);
            ExitCode::from(2)
        }
    }
}
