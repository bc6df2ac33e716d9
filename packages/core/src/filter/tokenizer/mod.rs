//! Filter expression tokenizer
//!
//! Lexical analysis converting raw filter text into positioned lexemes.

mod core;
mod strings;
mod words;

pub use self::core::Tokenizer;
