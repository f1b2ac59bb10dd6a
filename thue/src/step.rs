//! Single-step state transition: apply one selected rule.

use anyhow::Result;

use crate::config::RunConfig;
use crate::core::rewrite::{Directive, classify, replace_first, unescape_output};
use crate::core::rules::Rule;
use crate::io::streams::{InputStream, OutputStream, StreamSet};

/// Apply `rule` to `state`, producing the next state.
///
/// Dispatches on the rule's replacement: erase, output directive, input
/// directive, or plain substitution. All rewrite paths replace the first
/// textual occurrence of the pattern only. The caller is responsible for
/// selecting a rule whose pattern occurs in `state`; this layer defines no
/// no-match condition of its own.
///
/// The only observable effects are writes to `streams.output` (output
/// directive), a blocking read from `streams.input` (input directive), and,
/// with tracing enabled, pre/post lines on `streams.trace`.
pub fn apply_rule<O, I, T>(
    rule: &Rule,
    state: &str,
    config: &RunConfig,
    streams: &mut StreamSet<O, I, T>,
) -> Result<String>
where
    O: OutputStream,
    I: InputStream,
    T: OutputStream,
{
    if config.trace {
        streams.trace.write_text(&format!(
            "Using rule {} => {}\n",
            rule.pattern, rule.replacement
        ))?;
    }

    let next = match classify(&rule.replacement) {
        Directive::Erase => replace_first(state, &rule.pattern, ""),
        Directive::Output(text) => {
            let mut rendered = unescape_output(text);
            if config.trailing_newline {
                rendered.push('\n');
            }
            streams.output.write_text(&rendered)?;
            // The pattern is consumed exactly as in the erase case; output
            // text never re-enters the state.
            replace_first(state, &rule.pattern, "")
        }
        Directive::Input => {
            let line = streams.input.read_line()?;
            replace_first(state, &rule.pattern, line.trim())
        }
        Directive::Substitute(text) => replace_first(state, &rule.pattern, text),
    };

    if config.trace {
        streams.trace.write_text(&format!("{state} => {next}\n"))?;
    }
    Ok(next)
}
