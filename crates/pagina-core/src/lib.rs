//! Shared building blocks for pagination sequences.
//!
//! This crate holds the pieces that carry no parser state: code point
//! classification, exact half-step counter arithmetic, the Roman numeral
//! codec and the enums shared by the engine and its front ends.
//!
//! # Architecture
//!
//! - [`character`] -- Code point classes and the classifier
//! - [`half_integer`] -- Counter values in steps of one half
//! - [`roman`] -- Roman numeral encoding and decoding
//! - [`numeral`] -- Numeral parse errors and Arabic/Roman fallback parsing
//! - [`enums`] -- Page restrictions, numbering kinds and pagination modes

pub mod character;
pub mod enums;
pub mod half_integer;
pub mod numeral;
pub mod roman;

pub use half_integer::HalfInteger;
pub use numeral::NumeralParseError;
