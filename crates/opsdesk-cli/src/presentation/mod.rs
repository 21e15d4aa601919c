//! Shared terminal presentation primitives.
//!
//! This module provides the formatting building blocks every responder
//! uses for consistent console output.
//!
//! # Guidelines
//!
//! - Keep this module format-only: no knowledge of commands or records
//! - Responders compose these primitives; they never write escape codes

pub mod json;
pub mod renderer;

// Re-export commonly used items
pub use json::render_json;
pub use renderer::{DEFAULT_WIDTH, KEY_COLUMN_WIDTH, Renderer, Width};
