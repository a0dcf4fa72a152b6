//! Error handling and exit codes.

use hprec_core::BigIntError;

use crate::config::Operator;

/// Exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: u8 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: u8 = 1;
    /// An operand was not a valid numeral.
    pub const ERROR_PARSE: u8 = 2;
    /// Operands did not match the operator, or an unsupported radix was requested.
    pub const ERROR_USAGE: u8 = 4;
}

/// Error type for expression evaluation.
#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    /// An operand failed to parse.
    #[error("invalid {position} operand {text:?}")]
    Parse {
        position: &'static str,
        text: String,
        #[source]
        source: BigIntError,
    },

    /// A binary operator was given no right operand.
    #[error("operator '{}' requires a right operand", .0.symbol())]
    MissingOperand(Operator),

    /// A unary operator was given a right operand.
    #[error("operator '{}' takes no right operand", .0.symbol())]
    UnexpectedOperand(Operator),
}

/// Exit code for a command-line parsing failure: help and version requests
/// succeed, everything else is a usage error.
pub fn cli_exit_code(err: &clap::Error) -> u8 {
    if err.use_stderr() {
        exit_codes::ERROR_USAGE
    } else {
        exit_codes::SUCCESS
    }
}

/// Map an application error to the process exit code.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<CalcError>() {
        Some(CalcError::Parse {
            source: BigIntError::UnsupportedRadix(_),
            ..
        })
        | Some(CalcError::MissingOperand(_) | CalcError::UnexpectedOperand(_)) => {
            exit_codes::ERROR_USAGE
        }
        Some(CalcError::Parse { .. }) => exit_codes::ERROR_PARSE,
        None => exit_codes::ERROR_GENERIC,
    }
}
