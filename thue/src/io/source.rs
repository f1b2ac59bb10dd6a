//! Program loading: source file to rule table plus initial state.
//!
//! A Thue source is rule lines, a separator line that is exactly `::=`, and
//! then the initial state. Each rule line splits on its first `::=` into
//! pattern and replacement; lines after the separator concatenate into the
//! starting state.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::core::rules::{Rule, RuleTable};

/// Token separating a rule's pattern from its replacement, and (alone on a
/// line) the rule section from the initial state.
const RULE_SEPARATOR: &str = "::=";

/// A parsed program: the immutable rule table and the starting state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Program {
    pub rules: RuleTable,
    pub initial_state: String,
}

/// Read and parse a Thue source file.
pub fn load_program(path: &Path) -> Result<Program> {
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_program(&raw).with_context(|| format!("parse {}", path.display()))
}

/// Parse raw source text into a [`Program`].
///
/// Empty lines before the separator are skipped. Errors on a missing
/// separator line, a rule line without `::=`, or an empty pattern.
pub fn parse_program(raw: &str) -> Result<Program> {
    let lines: Vec<&str> = raw.lines().collect();
    let separator = lines
        .iter()
        .position(|line| *line == RULE_SEPARATOR)
        .with_context(|| format!("missing separator line `{RULE_SEPARATOR}`"))?;

    let mut rules = Vec::new();
    for line in &lines[..separator] {
        if line.is_empty() {
            continue;
        }
        let (pattern, replacement) = line
            .split_once(RULE_SEPARATOR)
            .with_context(|| format!("rule line without `{RULE_SEPARATOR}`: {line}"))?;
        if pattern.is_empty() {
            bail!("rule with empty pattern: {line}");
        }
        rules.push(Rule::new(pattern, replacement));
    }

    let initial_state: String = lines[separator + 1..].concat();
    debug!(rules = rules.len(), state_len = initial_state.len(), "program parsed");
    Ok(Program {
        rules: RuleTable::new(rules),
        initial_state,
    })
}
