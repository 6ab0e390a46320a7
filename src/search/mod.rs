//! Deterministic search used when the model reply is unusable.

pub mod fallback;
