//! Side-effecting collaborators of the rewriting engine.

pub mod source;
pub mod streams;
