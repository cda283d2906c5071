// Copyright 2025 Irreducible Inc.

use std::{fs, io, path::PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand, ValueEnum};
use shiftmul::{CostModel, Emitter, Lang, Sequence, SignedWord, multiply_direct, multiply_word};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "shiftmul")]
#[command(about = "Multiply by -82 using shifts and subtractions", long_about = None)]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Width {
	#[value(name = "8")]
	W8,
	#[value(name = "16")]
	W16,
	#[value(name = "32")]
	W32,
	#[value(name = "64")]
	W64,
}

#[derive(Subcommand)]
enum Commands {
	/// Multiply each input by -82 and check the result against a direct multiply
	Eval {
		/// Word width in bits
		#[arg(long, value_enum, default_value = "32")]
		width: Width,
		#[arg(required = true, allow_negative_numbers = true)]
		inputs: Vec<i64>,
	},
	/// Print the step sequence with the factor each temporary holds
	Show,
	/// Print the routine as source code
	Emit {
		#[arg(long, value_enum)]
		lang: Lang,
		/// Append assertions for the inputs 1 through 6
		#[arg(long)]
		harness: bool,
		/// Write to this file instead of stdout
		#[arg(short, long)]
		output: Option<PathBuf>,
	},
}

fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
		)
		.with_writer(io::stderr)
		.init();

	let cli = Cli::parse();
	match cli.command {
		Commands::Eval { width, inputs } => match width {
			Width::W8 => eval::<i8>(&inputs),
			Width::W16 => eval::<i16>(&inputs),
			Width::W32 => eval::<i32>(&inputs),
			Width::W64 => eval::<i64>(&inputs),
		},
		Commands::Show => {
			show();
			Ok(())
		}
		Commands::Emit {
			lang,
			harness,
			output,
		} => emit(lang, harness, output),
	}
}

fn eval<W>(inputs: &[i64]) -> Result<()>
where
	W: SignedWord + TryFrom<i64>,
{
	for &input in inputs {
		let n = W::try_from(input)
			.map_err(|_| anyhow!("{input} does not fit in a {}-bit word", W::BITS))?;
		let result = multiply_word(n);
		let interpreted = Sequence::NEG_82.eval(n)?;
		let direct = multiply_direct(n);
		if result != direct || interpreted != direct {
			bail!("{n} * -82: sequence gave {result}, interpreter {interpreted}, direct {direct}");
		}
		println!("{n} * -82 = {result}");
	}
	Ok(())
}

fn show() {
	let sequence = Sequence::NEG_82;
	let model = CostModel::default();
	for (step, factor) in sequence.steps().iter().zip(sequence.factors()) {
		println!("{:<16} n * {factor}", step.to_string());
	}
	println!("--");
	println!(
		"cost: {} (multiply instruction: {}, profitable: {})",
		model.sequence_cost(&sequence),
		model.mult,
		model.is_profitable(&sequence)
	);
}

fn emit(lang: Lang, harness: bool, output: Option<PathBuf>) -> Result<()> {
	let emitter = Emitter::new(lang).harness(harness);
	match output {
		Some(path) => {
			let mut file = fs::File::create(&path)
				.with_context(|| format!("failed to create {}", path.display()))?;
			emitter
				.emit(&Sequence::NEG_82, &mut file)
				.with_context(|| format!("failed to write {}", path.display()))?;
			tracing::info!(path = %path.display(), "wrote generated routine");
		}
		None => {
			let stdout = io::stdout();
			emitter.emit(&Sequence::NEG_82, &mut stdout.lock())?;
		}
	}
	Ok(())
}
