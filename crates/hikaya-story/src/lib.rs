//! Hikaya — bilingual story generation context.
//!
//! Responsible for validating story requests, deciding the request language
//! from script detection, selecting the prompt template, and driving the
//! single call to the text-completion service. Also holds the client-side
//! view state and localized interface text.

pub mod application;
pub mod domain;
