//! Run configuration assembled by the CLI boundary.

use crate::core::selector::SelectionMode;

/// Immutable option bundle for one interpreter run.
///
/// The CLI collapses the mutually exclusive `--left`/`--right` flags into the
/// single [`SelectionMode`] value, so an invalid combination cannot reach the
/// engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Tie-breaking policy among simultaneously matching rules.
    pub selection: SelectionMode,
    /// Bound on successful rewrite steps. `None` runs until natural halt.
    pub max_iterations: Option<u32>,
    /// Emit `Using rule ...` / `old => new` lines on the trace stream.
    pub trace: bool,
    /// Append a line break after each output directive's text.
    pub trailing_newline: bool,
}
