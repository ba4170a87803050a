//! Outer adapters: raw text sanitization and batch CSV input.

pub mod csv;
pub mod input;
