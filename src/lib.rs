pub mod common;
pub mod macros;

pub mod context;
pub mod error;
pub mod evaluation;
pub mod parsing;
pub mod pipeline;
pub mod reprs;
pub mod resolution;
pub mod typing;
