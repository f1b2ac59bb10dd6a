//! Test-only helpers: scripted streams and rule table construction.

use std::collections::VecDeque;

use anyhow::{Result, anyhow};

use crate::core::rules::{Rule, RuleTable};
use crate::io::streams::{InputExhaustedError, InputStream, OutputStream, StreamSet};

/// Output sink that records everything written to it.
#[derive(Debug, Default)]
pub struct BufferOutput {
    pub written: String,
}

impl OutputStream for BufferOutput {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.written.push_str(text);
        Ok(())
    }
}

/// Input source that serves predetermined lines, then reports exhaustion.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines.iter().map(|line| (*line).to_string()).collect(),
        }
    }
}

impl InputStream for ScriptedInput {
    fn read_line(&mut self) -> Result<String> {
        self.lines.pop_front().ok_or_else(|| anyhow!(InputExhaustedError))
    }
}

/// Stream set with scripted input and recording output/trace buffers.
pub fn scripted_streams(lines: &[&str]) -> StreamSet<BufferOutput, ScriptedInput, BufferOutput> {
    StreamSet {
        output: BufferOutput::default(),
        input: ScriptedInput::new(lines),
        trace: BufferOutput::default(),
    }
}

/// Build a rule with owned strings.
pub fn rule(pattern: &str, replacement: &str) -> Rule {
    Rule::new(pattern, replacement)
}

/// Build a rule table from pattern/replacement pairs in order.
pub fn table(rules: &[(&str, &str)]) -> RuleTable {
    RuleTable::new(
        rules
            .iter()
            .map(|(pattern, replacement)| Rule::new(*pattern, *replacement))
            .collect(),
    )
}
