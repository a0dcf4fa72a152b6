//! CLI output formatting.

use anyhow::Result;

use hprec_core::BigInt;

use crate::app::Evaluation;
use crate::config::OutputFormat;

/// Decimal digits shown at each end of a truncated result.
const TRUNCATE_EDGE: usize = 50;

/// Format a `BigInt` for display, truncating long values unless verbose.
#[must_use]
pub fn format_result(value: &BigInt, verbose: bool) -> String {
    let s = value.to_string();
    let digits = s.trim_start_matches('-').len();
    if !verbose && digits > 2 * TRUNCATE_EDGE {
        format!(
            "{}...{} ({digits} digits)",
            &s[..s.len() - digits + TRUNCATE_EDGE],
            &s[s.len() - TRUNCATE_EDGE..],
        )
    } else {
        s
    }
}

/// Render an evaluation in the requested format.
pub fn render(
    evaluation: &Evaluation,
    format: OutputFormat,
    verbose: bool,
    quiet: bool,
    details: bool,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(evaluation)?),
        OutputFormat::Text if quiet => Ok(evaluation.result.to_string()),
        OutputFormat::Text => Ok(render_text(evaluation, verbose, details)),
    }
}

fn render_text(evaluation: &Evaluation, verbose: bool, details: bool) -> String {
    let op = evaluation.op.symbol();
    let lhs = format_result(&evaluation.lhs, verbose);
    let mut out = match &evaluation.rhs {
        Some(rhs) => format!("Expression: {lhs} {op} {}\n", format_result(rhs, verbose)),
        None => format!("Expression: {op} {lhs}\n"),
    };
    if details {
        let result = &evaluation.result;
        out.push_str(&format!("Result bits: {}\n", result.bit_len()));
        out.push_str(&format!(
            "Result digits: {}\n",
            result.to_string().trim_start_matches('-').len()
        ));
    }
    out.push_str(&format!(
        "Result: {}",
        format_result(&evaluation.result, verbose)
    ));
    out
}
