//! Application layer for the story context.

pub mod command_handlers;
