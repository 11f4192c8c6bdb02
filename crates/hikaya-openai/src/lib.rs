//! `TextCompletion` adapter for OpenAI-compatible chat-completions APIs.

pub mod client;
pub mod dto;

pub use client::OpenAiClient;
