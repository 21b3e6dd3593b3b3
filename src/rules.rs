//! Packaging rules an archive must satisfy before it can be published to
//! SDKMAN!.
//!
//! Every rule is evaluated on its own; [`check`] reports all failing rules
//! at once rather than the first.

use crate::layout::{DirectoryGroup, last_segment};
use crate::validation::Validation;

/// Outcome of a single rule: a fixed success or failure message.
pub type RuleResult = Validation<&'static str, &'static str>;

/// Outcome of all rules: every failure, or every success message.
pub type Report = Validation<&'static str, Vec<&'static str>>;

/// Directory expected directly beneath the root directory.
pub const BIN_DIRECTORY: &str = "bin";

/// A named predicate over a [`DirectoryGroup`].
pub struct Rule {
    pub name: &'static str,
    pub success: &'static str,
    pub failure: &'static str,
    predicate: fn(&DirectoryGroup) -> bool,
}

impl Rule {
    pub fn evaluate(&self, group: &DirectoryGroup) -> RuleResult {
        Validation::check((self.predicate)(group), self.success, self.failure)
    }
}

/// The archive unpacks into exactly one directory.
pub const SINGLE_TOP_LEVEL_DIRECTORY: Rule = Rule {
    name: "single-top-level-directory",
    success: "The archive contains a top-level directory.",
    failure: "SDKMAN! requires a single, top-level directory.",
    predicate: has_single_top_level_directory,
};

/// That directory holds a `bin/` directory.
pub const SECOND_LEVEL_BIN_DIRECTORY: Rule = Rule {
    name: "second-level-bin-directory",
    success: "The archive contains a bin/ directory.",
    failure: "SDKMAN! requires a bin/ directory directly beneath the root directory.",
    predicate: has_second_level_bin_directory,
};

/// All rules, in reporting order.
pub const RULES: [&Rule; 2] = [&SINGLE_TOP_LEVEL_DIRECTORY, &SECOND_LEVEL_BIN_DIRECTORY];

fn has_single_top_level_directory(group: &DirectoryGroup) -> bool {
    group.len() == 1
}

fn has_second_level_bin_directory(group: &DirectoryGroup) -> bool {
    group.single_root().is_some_and(|(_, children)| {
        children
            .iter()
            .any(|child| last_segment(child) == BIN_DIRECTORY)
    })
}

/// Evaluate every rule against the group.
pub fn check(group: &DirectoryGroup) -> Report {
    RULES
        .iter()
        .map(|rule| {
            let result = rule.evaluate(group);
            tracing::debug!(rule = rule.name, passed = result.is_valid(), "evaluated rule");
            result
        })
        .fold(Validation::valid(Vec::new()), |report, result| {
            report.combine(result, |mut successes, success| {
                successes.push(success);
                successes
            })
        })
}
