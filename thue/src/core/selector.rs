//! Rule selection over the table for the current state.

use rand::Rng;

use crate::core::rules::{Rule, RuleTable};

/// Policy for picking among multiple simultaneously matching rules.
///
/// `Leftmost`/`Rightmost` refer to position in the rule table, not to where
/// the pattern occurs in the state string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionMode {
    #[default]
    Random,
    Leftmost,
    Rightmost,
}

/// Indices of all rules whose pattern occurs in `state`.
///
/// Every matching rule is a candidate; selection happens afterwards.
pub fn matching_rules(table: &RuleTable, state: &str) -> Vec<usize> {
    table
        .iter()
        .filter(|(_, rule)| state.contains(&rule.pattern))
        .map(|(index, _)| index)
        .collect()
}

/// Pick the rule to apply next, or `None` when no pattern occurs in `state`.
///
/// `None` is the normal end-of-program signal, not an error. Pure apart from
/// the random draw, which goes through the injected `rng` so runs are
/// reproducible under a seeded generator.
pub fn select_rule<'a, R: Rng>(
    table: &'a RuleTable,
    state: &str,
    mode: SelectionMode,
    rng: &mut R,
) -> Option<&'a Rule> {
    let candidates = matching_rules(table, state);
    if candidates.is_empty() {
        return None;
    }
    let index = match mode {
        SelectionMode::Random => candidates[rng.gen_range(0..candidates.len())],
        SelectionMode::Leftmost => candidates[0],
        SelectionMode::Rightmost => candidates[candidates.len() - 1],
    };
    table.get(index)
}
