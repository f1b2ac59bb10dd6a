//! Deterministic, pure logic of the rewriting engine.
//!
//! Core modules must be free of I/O side effects. They operate on in-memory
//! data structures and return deterministic outputs suitable for tests; the
//! only nondeterminism is the injected random generator used by
//! [`selector::SelectionMode::Random`].

pub mod rewrite;
pub mod rules;
pub mod selector;
