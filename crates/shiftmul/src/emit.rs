// Copyright 2025 Irreducible Inc.

//! Source emission of a [`Sequence`] as a standalone `multiply` routine.
//!
//! The emitted routine mirrors [`crate::multiply::multiply`]: one assignment per step, the last
//! temporary returned. With the harness enabled the output also checks the routine against the
//! inputs 1 through 6.

use std::io::{self, Write};

use crate::{
	error::{EmitError, SequenceError},
	multiply::MULTIPLIER,
	step::{Operand, Sequence, Step},
};

/// Inputs the emitted harness checks.
const HARNESS_INPUTS: std::ops::RangeInclusive<i64> = 1..=6;

/// Target language for emitted source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Lang {
	C,
	Python,
	Rust,
}

impl Lang {
	fn comment(self) -> &'static str {
		match self {
			Lang::Python => "#",
			Lang::C | Lang::Rust => "//",
		}
	}

	/// Conventional file extension for the language.
	pub fn extension(self) -> &'static str {
		match self {
			Lang::C => "c",
			Lang::Python => "py",
			Lang::Rust => "rs",
		}
	}
}

/// Renders a [`Sequence`] as source code.
#[derive(Debug, Clone)]
pub struct Emitter {
	lang: Lang,
	harness: bool,
	input_symbol: String,
}

impl Emitter {
	pub fn new(lang: Lang) -> Self {
		Self {
			lang,
			harness: false,
			input_symbol: "n".to_owned(),
		}
	}

	/// Append assertions for the inputs 1 through 6.
	pub fn harness(mut self, harness: bool) -> Self {
		self.harness = harness;
		self
	}

	/// Name of the routine's parameter.
	///
	/// Checked when emitting: it must be an ASCII identifier distinct from every temporary.
	pub fn input_symbol(mut self, symbol: impl Into<String>) -> Self {
		self.input_symbol = symbol.into();
		self
	}

	pub fn lang(&self) -> Lang {
		self.lang
	}

	fn check_input_symbol(&self, sequence: &Sequence) -> Result<(), EmitError> {
		let symbol = &self.input_symbol;
		let invalid = |reason: String| EmitError::InvalidSymbol {
			symbol: symbol.clone(),
			reason,
		};

		let mut chars = symbol.chars();
		match chars.next() {
			None => return Err(invalid("empty".to_owned())),
			Some(c) if !(c.is_ascii_alphabetic() || c == '_') => {
				return Err(invalid(format!("cannot start with {c:?}")));
			}
			Some(_) => {}
		}
		if let Some(c) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
			return Err(invalid(format!("contains {c:?}")));
		}
		if sequence
			.temporaries()
			.into_iter()
			.any(|temp| temp.to_string() == *symbol)
		{
			return Err(invalid("collides with a temporary".to_owned()));
		}
		Ok(())
	}

	fn name(&self, operand: Operand) -> String {
		match operand {
			Operand::Input => self.input_symbol.clone(),
			Operand::Temp(_) => operand.to_string(),
		}
	}

	/// Writes the routine for `sequence` to `out`.
	pub fn emit<W: Write>(&self, sequence: &Sequence, out: &mut W) -> Result<(), EmitError> {
		let _span =
			tracing::debug_span!("emit", lang = ?self.lang, harness = self.harness).entered();
		sequence.validate_neg_82(i32::BITS)?;
		self.check_input_symbol(sequence)?;

		let output = sequence.output().ok_or(SequenceError::Empty)?;

		if self.harness && self.lang == Lang::C {
			writeln!(out, "#include <assert.h>")?;
			writeln!(out)?;
		}
		writeln!(
			out,
			"{} Multiply by {MULTIPLIER} using the fewest operations",
			self.lang.comment()
		)?;
		self.emit_signature(out)?;
		if self.lang == Lang::C {
			let temps = sequence
				.temporaries()
				.into_iter()
				.map(|op| self.name(op))
				.collect::<Vec<_>>()
				.join(", ");
			writeln!(out, "  int {temps};")?;
		}
		for step in sequence.steps() {
			self.emit_step(step, out)?;
		}
		self.emit_return(output, out)?;

		if self.harness {
			writeln!(out)?;
			self.emit_harness(MULTIPLIER, out)?;
		}
		tracing::debug!(steps = sequence.len(), "emitted routine");
		Ok(())
	}

	/// Renders the routine for `sequence` into a string.
	pub fn render(&self, sequence: &Sequence) -> Result<String, EmitError> {
		let mut buf = Vec::new();
		self.emit(sequence, &mut buf)?;
		String::from_utf8(buf)
			.map_err(|err| EmitError::Io(io::Error::new(io::ErrorKind::InvalidData, err)))
	}

	fn emit_signature<W: Write>(&self, out: &mut W) -> io::Result<()> {
		let n = &self.input_symbol;
		match self.lang {
			Lang::C => writeln!(out, "int multiply(int {n}) {{"),
			Lang::Python => writeln!(out, "def multiply({n}: int):"),
			Lang::Rust => writeln!(out, "pub fn multiply({n}: i32) -> i32 {{"),
		}
	}

	fn emit_step<W: Write>(&self, step: &Step, out: &mut W) -> io::Result<()> {
		let dst = self.name(step.dst());
		let rhs = match *step {
			Step::Shl { src, amount, .. } => format!("{} << {amount}", self.name(src)),
			Step::Sub { lhs, rhs, .. } => match self.lang {
				Lang::Rust => format!("{}.wrapping_sub({})", self.name(lhs), self.name(rhs)),
				Lang::C | Lang::Python => format!("{} - {}", self.name(lhs), self.name(rhs)),
			},
		};
		match self.lang {
			Lang::C => writeln!(out, "  {dst} = {rhs};"),
			Lang::Python => writeln!(out, "\t{dst} = {rhs}"),
			Lang::Rust => writeln!(out, "    let {dst} = {rhs};"),
		}
	}

	fn emit_return<W: Write>(&self, output: Operand, out: &mut W) -> io::Result<()> {
		let result = self.name(output);
		match self.lang {
			Lang::C => {
				writeln!(out, "  return {result};")?;
				writeln!(out, "}}")
			}
			Lang::Python => writeln!(out, "\treturn {result}"),
			Lang::Rust => {
				writeln!(out, "    {result}")?;
				writeln!(out, "}}")
			}
		}
	}

	fn emit_harness<W: Write>(&self, constant: i64, out: &mut W) -> io::Result<()> {
		match self.lang {
			Lang::C => {
				writeln!(out, "int main() {{")?;
				for n in HARNESS_INPUTS {
					writeln!(out, "  assert(multiply({n}) == {});", n * constant)?;
				}
				writeln!(out, "}}")
			}
			Lang::Python => {
				for n in HARNESS_INPUTS {
					writeln!(out, "assert(multiply({n}) == {})", n * constant)?;
				}
				Ok(())
			}
			Lang::Rust => {
				writeln!(out, "#[test]")?;
				writeln!(out, "fn multiply_small_inputs() {{")?;
				for n in HARNESS_INPUTS {
					writeln!(out, "    assert_eq!(multiply({n}), {});", n * constant)?;
				}
				writeln!(out, "}}")
			}
		}
	}
}
