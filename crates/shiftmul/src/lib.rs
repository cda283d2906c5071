// Copyright 2025 Irreducible Inc.

//! Multiplication by -82 through a fixed sequence of shifts and subtractions.
//!
//! - `multiply` - the straight-line routine, plus its width-generic form
//! - `step` - the same sequence as data: interpreter, factor tracking, validation
//! - `cost` - machine cost model comparing the sequence against a multiply instruction
//! - `emit` - the sequence printed as C, Python or Rust source
//! - `reference` - direct multiplication used to check everything above

pub mod cost;
pub mod emit;
pub mod error;
pub mod multiply;
pub mod reference;
pub mod step;
pub mod word;

pub use cost::CostModel;
pub use emit::{Emitter, Lang};
pub use error::{EmitError, SequenceError};
pub use multiply::{MULTIPLIER, multiply, multiply_word};
pub use reference::multiply_direct;
pub use step::{Operand, Sequence, Step};
pub use word::SignedWord;
