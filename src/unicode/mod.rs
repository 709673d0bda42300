//! Unicode data used to generate the symbol registry.

pub mod alphabets;

pub use alphabets::{ALPHABET_INTERVALS, Alphabet, AlphabetInterval};
