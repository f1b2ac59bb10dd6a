//! Run loop: drive single steps until natural halt or the iteration bound.

use anyhow::Result;
use rand::Rng;
use tracing::debug;

use crate::config::RunConfig;
use crate::core::rules::RuleTable;
use crate::core::selector::select_rule;
use crate::io::streams::{InputStream, OutputStream, StreamSet};
use crate::step::apply_rule;

/// How a run ended, with the last state reached.
///
/// Both variants are normal outcomes; callers that need to distinguish them
/// match on the variant, and either way the final state is available.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunResult {
    /// No rule's pattern occurred in the state (natural halt).
    Completed(String),
    /// The configured `max_iterations` bound was exceeded.
    IterationBoundExceeded(String),
}

impl RunResult {
    pub fn final_state(&self) -> &str {
        match self {
            RunResult::Completed(state) | RunResult::IterationBoundExceeded(state) => state,
        }
    }
}

/// Run the program to termination.
///
/// Each iteration first checks the bound (`counter > max_iterations`, so up
/// to `max_iterations + 1` successful steps run before the bound trips),
/// then selects a rule and applies it. No rule matching is the normal end of
/// the program, not an error; the only `Err` paths are stream failures
/// during a directive.
pub fn run_program<O, I, T, R>(
    table: &RuleTable,
    initial_state: &str,
    config: &RunConfig,
    streams: &mut StreamSet<O, I, T>,
    rng: &mut R,
) -> Result<RunResult>
where
    O: OutputStream,
    I: InputStream,
    T: OutputStream,
    R: Rng,
{
    let mut state = initial_state.to_string();
    let mut steps = 0u32;
    loop {
        if let Some(max) = config.max_iterations {
            if steps > max {
                debug!(steps, max, "iteration bound exceeded");
                return Ok(RunResult::IterationBoundExceeded(state));
            }
        }
        let Some(rule) = select_rule(table, &state, config.selection, rng) else {
            debug!(steps, "natural halt");
            return Ok(RunResult::Completed(state));
        };
        state = apply_rule(rule, &state, config, streams)?;
        steps += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::core::selector::SelectionMode;
    use crate::test_support::{scripted_streams, table};

    fn run(
        rules: &[(&str, &str)],
        initial: &str,
        config: &RunConfig,
        lines: &[&str],
    ) -> (RunResult, String) {
        let table = table(rules);
        let mut streams = scripted_streams(lines);
        let mut rng = StdRng::seed_from_u64(7);
        let result =
            run_program(&table, initial, config, &mut streams, &mut rng).expect("run");
        (result, streams.output.written)
    }

    #[test]
    fn no_matching_rule_completes_with_initial_state() {
        let (result, _) = run(&[("z", "y")], "abc", &RunConfig::default(), &[]);
        assert_eq!(result, RunResult::Completed("abc".to_string()));
    }

    #[test]
    fn empty_table_completes_immediately() {
        let (result, _) = run(&[], "abc", &RunConfig::default(), &[]);
        assert_eq!(result, RunResult::Completed("abc".to_string()));
    }

    #[test]
    fn rewrites_until_natural_halt() {
        // aaa -> bba -> bbb via leftmost selection, then "a" no longer occurs
        // and "b" has no rule.
        let config = RunConfig {
            selection: SelectionMode::Leftmost,
            ..RunConfig::default()
        };
        let (result, _) = run(&[("aa", "bb"), ("a", "b")], "aaa", &config, &[]);
        assert_eq!(result, RunResult::Completed("bbb".to_string()));
    }

    #[test]
    fn bound_allows_max_plus_one_steps() {
        // "a" => "aa" always matches; with max_iterations = 2 the loop runs
        // steps at counter 0, 1, 2 and trips the bound before a 4th.
        let config = RunConfig {
            selection: SelectionMode::Leftmost,
            max_iterations: Some(2),
            ..RunConfig::default()
        };
        let (result, _) = run(&[("a", "aa")], "a", &config, &[]);
        assert_eq!(result, RunResult::IterationBoundExceeded("aaaa".to_string()));
    }

    #[test]
    fn bound_zero_still_performs_one_step() {
        let config = RunConfig {
            selection: SelectionMode::Leftmost,
            max_iterations: Some(0),
            ..RunConfig::default()
        };
        let (result, _) = run(&[("a", "aa")], "a", &config, &[]);
        assert_eq!(result, RunResult::IterationBoundExceeded("aa".to_string()));
    }

    #[test]
    fn bound_does_not_trip_when_program_halts_first() {
        let config = RunConfig {
            selection: SelectionMode::Leftmost,
            max_iterations: Some(10),
            ..RunConfig::default()
        };
        let (result, _) = run(&[("a", "b")], "a", &config, &[]);
        assert_eq!(result, RunResult::Completed("b".to_string()));
    }

    #[test]
    fn output_directives_write_in_execution_order() {
        let config = RunConfig {
            selection: SelectionMode::Leftmost,
            ..RunConfig::default()
        };
        let (result, written) =
            run(&[("a", "~first"), ("b", "~second")], "ab", &config, &[]);
        assert_eq!(result, RunResult::Completed("".to_string()));
        assert_eq!(written, "firstsecond");
    }

    #[test]
    fn input_directive_feeds_read_line_back_into_state() {
        let config = RunConfig {
            selection: SelectionMode::Leftmost,
            ..RunConfig::default()
        };
        let (result, _) = run(&[("Q", ":::")], "aQb", &config, &[" 42 "]);
        assert_eq!(result, RunResult::Completed("a42b".to_string()));
    }

    #[test]
    fn final_state_is_reachable_from_both_outcomes() {
        assert_eq!(RunResult::Completed("x".to_string()).final_state(), "x");
        assert_eq!(
            RunResult::IterationBoundExceeded("y".to_string()).final_state(),
            "y"
        );
    }
}
