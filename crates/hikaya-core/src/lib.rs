//! Hikaya Core — shared abstractions.
//!
//! This crate defines the error type and the text-completion port that the
//! story context and the provider adapters depend on. It contains no
//! infrastructure code.

pub mod completion;
pub mod error;
