//! Chat-completion ranking call and reply parsing.

pub mod extract;
pub mod rank;
