// Copyright 2025 Irreducible Inc.

use std::{
	fs,
	process::{Command, Output},
};

const C_ROUTINE_WITH_HARNESS: &str = "\
#include <assert.h>

// Multiply by -82 using the fewest operations
int multiply(int n) {
  int t1, t2, t3, t4, t5, t6, t7;
  t1 = n << 3;
  t2 = t1 - n;
  t3 = t2 << 2;
  t4 = t3 - t2;
  t5 = t4 << 1;
  t6 = n - t5;
  t7 = t6 << 1;
  return t7;
}

int main() {
  assert(multiply(1) == -82);
  assert(multiply(2) == -164);
  assert(multiply(3) == -246);
  assert(multiply(4) == -328);
  assert(multiply(5) == -410);
  assert(multiply(6) == -492);
}
";

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_shiftmul"))
		.args(args)
		.output()
		.expect("failed to run shiftmul")
}

#[test]
fn eval_prints_products() {
	let output = run(&["eval", "1", "6", "-2"]);
	assert!(output.status.success());
	let stdout = String::from_utf8(output.stdout).unwrap();
	assert_eq!(stdout, "1 * -82 = -82\n6 * -82 = -492\n-2 * -82 = 164\n");
}

#[test]
fn eval_wraps_at_narrow_width() {
	let output = run(&["eval", "--width", "8", "3"]);
	assert!(output.status.success());
	let stdout = String::from_utf8(output.stdout).unwrap();
	assert_eq!(stdout, "3 * -82 = 10\n");
}

#[test]
fn eval_rejects_input_wider_than_word() {
	let output = run(&["eval", "--width", "8", "300"]);
	assert!(!output.status.success());
}

#[test]
fn show_reports_factors_and_cost() {
	let output = run(&["show"]);
	assert!(output.status.success());
	let stdout = String::from_utf8(output.stdout).unwrap();
	assert!(stdout.contains("n * -41"));
	assert!(stdout.contains("cost: 7"));
}

#[test]
fn emit_python_to_stdout() {
	let output = run(&["emit", "--lang", "python", "--harness"]);
	assert!(output.status.success());
	let stdout = String::from_utf8(output.stdout).unwrap();
	assert!(stdout.starts_with("# Multiply by -82 using the fewest operations\n"));
	assert!(stdout.ends_with("assert(multiply(6) == -492)\n"));
}

#[test]
fn emit_c_to_stdout() {
	let output = run(&["emit", "--lang", "c", "--harness"]);
	assert!(output.status.success());
	assert_eq!(String::from_utf8(output.stdout).unwrap(), C_ROUTINE_WITH_HARNESS);
}

#[test]
fn emit_rust_to_stdout() {
	let output = run(&["emit", "--lang", "rust"]);
	assert!(output.status.success());
	let stdout = String::from_utf8(output.stdout).unwrap();
	assert!(stdout.starts_with("// Multiply by -82 using the fewest operations\n"));
	assert!(stdout.contains("pub fn multiply(n: i32) -> i32 {\n"));
	assert!(stdout.contains("    let t2 = t1.wrapping_sub(n);\n"));
	assert!(!stdout.contains("#[test]"));
}

#[test]
fn emit_writes_output_file() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("multiply.c");
	let output = run(&["emit", "--lang", "c", "--harness", "--output", path.to_str().unwrap()]);
	assert!(output.status.success());
	assert!(output.stdout.is_empty());
	assert_eq!(fs::read_to_string(&path).unwrap(), C_ROUTINE_WITH_HARNESS);
}

#[test]
fn emit_fails_on_missing_output_directory() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("missing").join("multiply.py");
	let output = run(&["emit", "--lang", "python", "--output", path.to_str().unwrap()]);
	assert!(!output.status.success());
	assert!(!path.exists());
	let stderr = String::from_utf8(output.stderr).unwrap();
	assert!(stderr.contains("failed to create"), "stderr: {stderr}");
}
