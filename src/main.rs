//! Kairo - two-element circuit calculator
//!
//! Computes impedance, current and voltage for up to two passive elements
//! in series or parallel.
//!
//! # Usage
//!
//! ```bash
//! kairo --element r:10 --element l:10mH --source ac --voltage 5 --branches 2
//! ```

use clap::Parser;
use kairo_designer::{
    circuit::parse_value,
    error::{DesignerError, Result},
    CircuitElement, DesignerState, ElementKind, SolverConfig, SourceKind, REFERENCE_FREQUENCY_HZ,
};
use tracing_subscriber::EnvFilter;

/// Two-element RLC circuit calculator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Element as KIND:VALUE[UNIT], e.g. r:10, c:4.7uF, l:10mH (up to two)
    #[arg(short, long = "element", value_name = "ELEMENT", value_parser = parse_element)]
    elements: Vec<CircuitElement>,

    /// Source type
    #[arg(short, long, default_value = "AC", value_parser = parse_source_kind)]
    source: SourceKind,

    /// Source voltage in volts
    #[arg(short, long, default_value = "5")]
    voltage: String,

    /// Branch count (1 = series, more = parallel)
    #[arg(short, long, default_value = "1")]
    branches: String,

    /// AC frequency in Hz
    #[arg(short, long, default_value_t = REFERENCE_FREQUENCY_HZ)]
    frequency: f64,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

fn parse_source_kind(text: &str) -> std::result::Result<SourceKind, String> {
    text.parse().map_err(|e: DesignerError| e.to_string())
}

/// Split `KIND:VALUE[UNIT]` into an element.
///
/// A bare number is in the kind's default unit (`c:1` is 1 μF, as in the
/// form). A number with only an SI suffix (`r:4.7k`) is in the base unit.
/// Otherwise the longest numeric prefix is the value and the rest the unit.
fn parse_element(text: &str) -> std::result::Result<CircuitElement, String> {
    let (kind, rest) = text
        .split_once(':')
        .ok_or_else(|| format!("expected KIND:VALUE, got '{text}'"))?;
    let kind: ElementKind = kind.parse().map_err(|e: DesignerError| e.to_string())?;
    let rest = rest.trim();

    if let Ok(value) = rest.parse::<f64>() {
        return Ok(CircuitElement::new(kind, value));
    }
    if let Some(value) = parse_value(rest) {
        return Ok(CircuitElement::with_unit(kind, value, kind.base_units()[0]));
    }

    let split = rest
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(rest.len()))
        .filter(|&i| rest[..i].parse::<f64>().is_ok())
        .last()
        .ok_or_else(|| DesignerError::invalid_value(kind.name(), rest).to_string())?;
    let (number, unit) = rest.split_at(split);
    let value = number.parse::<f64>().unwrap_or(f64::NAN);

    Ok(CircuitElement::with_unit(kind, value, unit.trim()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("kairo_designer=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = SolverConfig::new().with_frequency_hz(args.frequency);
    config.validate()?;

    // Drive the same state the form does
    let mut designer = DesignerState::with_config(config);
    for element in args.elements {
        designer.add_element(element)?;
    }
    designer.set_source_kind(args.source);
    designer.set_voltage(args.voltage);
    designer.set_branch_count(args.branches);

    let result = designer.generate()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{result}");
    }

    Ok(())
}
