//! # `vocabgen` Corpus Vocabulary Suite
//!
//! Streams text corpora into token frequency tables and reduces them to
//! bounded, ordered, newline-delimited vocabulary files with a reserved
//! unknown-token marker.
//!
//! See:
//! * [`splitter`] to turn lines into tokens.
//! * [`filters`] to exclude candidate tokens from the final vocabulary.
//! * [`counter`] to accumulate token frequencies.
//! * [`generator`] to drive corpora through counting into a vocabulary.
//! * [`corpus`] for callback-driven corpus line reading.
//! * [`fileops`] to merge and split corpus files.
//!
//! ## Generation Example
//!
//! ```rust,no_run
//! use vocabgen::{LengthFilter, SortMode, VocabGeneratorOptions};
//!
//! # fn main() -> vocabgen::VgResult<()> {
//! let mut generator = VocabGeneratorOptions::new(30_000)
//!     .with_min_count(2)
//!     .with_sort_mode(SortMode::FreqDesc)
//!     .with_filter(LengthFilter::new(16))
//!     .init()?;
//!
//! generator.generate(["corpus.part0.txt", "corpus.part1.txt"], "vocab.txt")?;
//! # Ok(())
//! # }
//! ```
//!
//! The library logs through the [`log`] facade only; attaching handlers
//! is the embedding process's concern.
#![warn(missing_docs, unused)]

pub mod corpus;
pub mod counter;
pub mod errors;
pub mod fileops;
pub mod filters;
pub mod generator;
pub mod splitter;

#[doc(inline)]
pub use counter::TokenCounter;
#[doc(inline)]
pub use errors::{VgResult, VocabgenError};
#[doc(inline)]
pub use filters::{EmptyFilter, FilterChain, LengthFilter, SpecialTokensFilter, VocabFilter};
#[doc(inline)]
pub use generator::{SortMode, VocabGenerator, VocabGeneratorOptions};
#[doc(inline)]
pub use splitter::{LineSplitter, SpaceLineSplitter};
