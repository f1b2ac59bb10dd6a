//! Interpreter for a Thue-style string-rewriting language.
//!
//! A program is an ordered table of pattern/replacement rules plus an initial
//! state string. Execution repeatedly picks a rule whose pattern occurs in
//! the state, rewrites one occurrence (with special erase/output/input
//! directive forms), and halts when no rule matches. The architecture
//! enforces a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (rule table, selection, rewrite
//!   primitives). No I/O; the only nondeterminism is an injected random
//!   generator.
//! - **[`io`]**: Side-effecting operations (source loading, stream I/O).
//!   Pluggable via traits to enable scripted streams in tests.
//!
//! Orchestration modules ([`step`], [`looping`]) coordinate core logic with
//! streams to implement one rewrite step and the full run loop.

pub mod config;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod looping;
pub mod step;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
