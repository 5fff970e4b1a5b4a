//! Shared public API types for the typospot misspelling detector.
//!
//! - [`misspelling`] -- the correction record and the detected-issue type
//! - [`token`] -- the token capability consumed by the line matcher

pub mod misspelling;
pub mod token;
