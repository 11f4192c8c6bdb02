//! Shared test fakes and utilities for the Hikaya story service.

mod completion;

pub use completion::{FailingCompletion, PanickingCompletion, ScriptedCompletion};
