//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn hprec() -> Command {
    let mut cmd = Command::cargo_bin("hprec").expect("binary not found");
    cmd.env_remove("HPREC_FORMAT")
        .env_remove("HPREC_RADIX")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn help_flag() {
    hprec()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("arbitrary-precision"));
}

#[test]
fn version_flag() {
    hprec()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("hprec"));
}

#[test]
fn add_quiet() {
    hprec()
        .args(["-q", "123", "+", "877"])
        .assert()
        .success()
        .stdout("1000\n");
}

#[test]
fn negative_operand_multiply() {
    hprec()
        .args(["-q", "-5", "*", "5"])
        .assert()
        .success()
        .stdout("-25\n");
}

#[test]
fn subtract_negative_operands() {
    hprec()
        .args(["-q", "-5", "-", "-7"])
        .assert()
        .success()
        .stdout("2\n");
}

#[test]
fn carry_across_limbs() {
    hprec()
        .args(["-q", "99999999999999999999", "add", "1"])
        .assert()
        .success()
        .stdout("100000000000000000000\n");
}

#[test]
fn unary_operators() {
    hprec().args(["-q", "0", "dec"]).assert().success().stdout("-1\n");
    hprec().args(["-q", "5", "~"]).assert().success().stdout("-6\n");
    hprec().args(["-q", "-12", "sq"]).assert().success().stdout("144\n");
}

#[test]
fn text_output_shows_expression() {
    hprec()
        .args(["2", "*", "21"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Expression: 2 * 21"))
        .stdout(predicate::str::contains("Result: 42"));
}

#[test]
fn details_flag() {
    hprec()
        .args(["-d", "255", "+", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Result bits: 9"))
        .stdout(predicate::str::contains("Result digits: 3"));
}

#[test]
fn long_result_truncated_unless_verbose() {
    let big = "9".repeat(120);
    hprec()
        .args([big.as_str(), "+", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(121 digits)"));
    hprec()
        .args(["-v", big.as_str(), "+", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("1{}", "0".repeat(120))));
}

#[test]
fn json_output() {
    let output = hprec()
        .args(["--format", "json", "12", "^", "10"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["op"], "^");
    assert_eq!(json["lhs"], "12");
    assert_eq!(json["rhs"], "10");
    assert_eq!(json["result"], "6");
}

#[test]
fn format_from_environment() {
    hprec()
        .env("HPREC_FORMAT", "json")
        .args(["1", "inc"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""result":"2""#));
}

#[test]
fn invalid_operand_exits_with_parse_code() {
    hprec()
        .args(["12x", "+", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid left operand"));
}

#[test]
fn unsupported_radix_exits_with_usage_code() {
    hprec()
        .args(["--radix", "hex", "ff", "+", "1"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("unsupported radix: hexadecimal"));
}

#[test]
fn missing_operand_exits_with_usage_code() {
    hprec()
        .args(["1", "+"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("requires a right operand"));
}

#[test]
fn unknown_operator_exits_with_usage_code() {
    hprec()
        .args(["1", "/", "2"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("invalid value '/'"));
}

#[test]
fn surplus_argument_exits_with_usage_code() {
    hprec()
        .args(["1", "+", "2", "3"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn rust_log_enables_transform_tracing() {
    let operand = "7".repeat(400);
    for filter in ["trace", "hprec_ntt=trace"] {
        hprec()
            .env("RUST_LOG", filter)
            .args(["-q", operand.as_str(), "*", operand.as_str()])
            .assert()
            .success()
            .stderr(predicate::str::contains("ntt multiply"));
    }
}

#[test]
fn default_filter_is_quiet() {
    let operand = "7".repeat(400);
    hprec()
        .args(["-q", operand.as_str(), "*", operand.as_str()])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
