//! CLI command implementations.

pub mod catalog;
pub mod prepare;
pub mod submit;
