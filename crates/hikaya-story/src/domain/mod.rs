//! Domain model for the story context.

pub mod commands;
pub mod language;
pub mod locale;
pub mod request;
pub mod result;
pub mod templates;
pub mod view;
