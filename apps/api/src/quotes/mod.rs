// Quote generation: store, formatting, dedupe, generators, export, HTTP handlers.
// Original quotes come through llm_client::QuoteWriter only.

pub mod dedupe;
pub mod export;
pub mod formatter;
pub mod generator;
pub mod handlers;
pub mod prompts;
pub mod store;
