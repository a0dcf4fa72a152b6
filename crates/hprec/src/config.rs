//! Application configuration from CLI flags and environment.

use clap::{Parser, ValueEnum};

use hprec_core::Radix;

/// hprec: arbitrary-precision integer calculator.
///
/// Evaluates `LHS OP RHS` for binary operators, or `LHS OP` for the unary
/// operators `~`, `inc`, `dec` and `sq`.
#[derive(Parser, Debug)]
#[command(name = "hprec", version, about, allow_negative_numbers = true)]
pub struct AppConfig {
    /// Left operand, a decimal numeral.
    pub lhs: String,

    /// Operator.
    #[arg(value_enum)]
    pub op: Operator,

    /// Right operand, required by binary operators.
    pub rhs: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value = "text", env = "HPREC_FORMAT")]
    pub format: OutputFormat,

    /// Radix of operands and result.
    #[arg(long, value_enum, default_value = "dec", env = "HPREC_RADIX")]
    pub radix: RadixArg,

    /// Verbose output: full-length results and debug logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only output the number).
    #[arg(short, long)]
    pub quiet: bool,

    /// Show bit length and digit count of the result.
    #[arg(short, long)]
    pub details: bool,
}

impl AppConfig {
    /// Parse CLI arguments, leaving the exit decision to the caller.
    pub fn try_parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}

/// Supported operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, serde::Serialize)]
pub enum Operator {
    #[value(name = "+", alias = "add")]
    #[serde(rename = "+")]
    Add,
    #[value(name = "-", alias = "sub")]
    #[serde(rename = "-")]
    Sub,
    #[value(name = "*", alias = "mul")]
    #[serde(rename = "*")]
    Mul,
    #[value(name = "&", alias = "and")]
    #[serde(rename = "&")]
    And,
    #[value(name = "|", alias = "or")]
    #[serde(rename = "|")]
    Or,
    #[value(name = "^", alias = "xor")]
    #[serde(rename = "^")]
    Xor,
    #[value(name = "~", alias = "not")]
    #[serde(rename = "~")]
    Not,
    #[value(name = "inc")]
    #[serde(rename = "inc")]
    Inc,
    #[value(name = "dec")]
    #[serde(rename = "dec")]
    Dec,
    #[value(name = "sq")]
    #[serde(rename = "sq")]
    Square,
}

impl Operator {
    /// True for operators that take a right operand.
    #[must_use]
    pub fn is_binary(self) -> bool {
        matches!(
            self,
            Self::Add | Self::Sub | Self::Mul | Self::And | Self::Or | Self::Xor
        )
    }

    /// Symbol shown in text output.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::And => "&",
            Self::Or => "|",
            Self::Xor => "^",
            Self::Not => "~",
            Self::Inc => "inc",
            Self::Dec => "dec",
            Self::Square => "sq",
        }
    }
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Radix names accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RadixArg {
    Bin,
    Oct,
    Dec,
    Hex,
}

impl From<RadixArg> for Radix {
    fn from(arg: RadixArg) -> Self {
        match arg {
            RadixArg::Bin => Radix::Binary,
            RadixArg::Oct => Radix::Octal,
            RadixArg::Dec => Radix::Decimal,
            RadixArg::Hex => Radix::Hexadecimal,
        }
    }
}
