//! Expression evaluation and dispatch.

use anyhow::Result;
use serde::Serialize;
use tracing::debug;

use hprec_core::{BigInt, Radix};

use crate::config::{AppConfig, Operator};
use crate::errors::CalcError;
use crate::output::render;

/// An evaluated expression.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    pub op: Operator,
    pub lhs: BigInt,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rhs: Option<BigInt>,
    pub result: BigInt,
}

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    let evaluation = evaluate(config)?;
    let rendered = render(
        &evaluation,
        config.format,
        config.verbose,
        config.quiet,
        config.details,
    )?;
    println!("{rendered}");
    Ok(())
}

/// Parse the operands and apply the operator.
pub fn evaluate(config: &AppConfig) -> Result<Evaluation, CalcError> {
    let radix = Radix::from(config.radix);
    let op = config.op;
    let lhs = parse_operand("left", &config.lhs, radix)?;

    let (rhs, result) = match (op.is_binary(), config.rhs.as_deref()) {
        (true, Some(text)) => {
            let rhs = parse_operand("right", text, radix)?;
            let result = apply_binary(op, &lhs, &rhs);
            (Some(rhs), result)
        }
        (true, None) => return Err(CalcError::MissingOperand(op)),
        (false, Some(_)) => return Err(CalcError::UnexpectedOperand(op)),
        (false, None) => (None, apply_unary(op, &lhs)),
    };

    debug!(
        op = op.symbol(),
        lhs_bits = lhs.bit_len(),
        result_bits = result.bit_len(),
        "evaluated"
    );
    Ok(Evaluation {
        op,
        lhs,
        rhs,
        result,
    })
}

fn parse_operand(position: &'static str, text: &str, radix: Radix) -> Result<BigInt, CalcError> {
    BigInt::from_str_radix(text, radix).map_err(|source| CalcError::Parse {
        position,
        text: text.to_string(),
        source,
    })
}

fn apply_binary(op: Operator, lhs: &BigInt, rhs: &BigInt) -> BigInt {
    match op {
        Operator::Add => lhs + rhs,
        Operator::Sub => lhs - rhs,
        Operator::Mul => lhs * rhs,
        Operator::And => lhs & rhs,
        Operator::Or => lhs | rhs,
        Operator::Xor => lhs ^ rhs,
        Operator::Not | Operator::Inc | Operator::Dec | Operator::Square => {
            unreachable!("unary operator {op:?} applied to two operands")
        }
    }
}

fn apply_unary(op: Operator, lhs: &BigInt) -> BigInt {
    match op {
        Operator::Not => !lhs,
        Operator::Inc => {
            let mut value = lhs.clone();
            value.increment();
            value
        }
        Operator::Dec => {
            let mut value = lhs.clone();
            value.decrement();
            value
        }
        Operator::Square => lhs.square(),
        Operator::Add
        | Operator::Sub
        | Operator::Mul
        | Operator::And
        | Operator::Or
        | Operator::Xor => unreachable!("binary operator {op:?} applied to one operand"),
    }
}
