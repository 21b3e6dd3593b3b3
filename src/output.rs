//! Human-readable report with colors and emoji.

use console::{Emoji, Term, style};

use crate::layout::{DirectoryGroup, render_tree};
use crate::rules::Report;

static PASSED: Emoji<'_, '_> = Emoji("✅ ", "[ok] ");
static FAILED: Emoji<'_, '_> = Emoji("❌ ", "[x] ");
static READY: Emoji<'_, '_> = Emoji("🥳 ", "");
static NOT_READY: Emoji<'_, '_> = Emoji("🥺 ", "");

pub const READY_MESSAGE: &str = "Your archive is ready to be published to SDKMAN!";
pub const NOT_READY_MESSAGE: &str =
    "Some issues need to be resolved before publishing to SDKMAN!";

/// Writes the tree, checks and verdict for one archive to stdout.
pub struct Reporter {
    term: Term,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }

    pub fn tree(&self, caption: &str, group: &DirectoryGroup) {
        let caption = style(caption).bold().underlined().to_string();
        let _ = self.term.write_str(&render_tree(&caption, group));
    }

    /// Print every check followed by the verdict. Returns whether the
    /// archive passed.
    pub fn checks(&self, report: Report) -> bool {
        self.header("Checks");

        let passed = report.is_valid();
        let lines = report.fold(
            |failures| {
                failures
                    .iter()
                    .map(|message| format!("{FAILED}{message}"))
                    .collect::<Vec<_>>()
            },
            |successes| {
                successes
                    .iter()
                    .map(|message| format!("{PASSED}{message}"))
                    .collect()
            },
        );
        for line in lines {
            let _ = self.term.write_line(&line);
        }

        self.header("Summary");

        if passed {
            let _ = self.term.write_line(&format!("{READY}{READY_MESSAGE}"));
        } else {
            let _ = self
                .term
                .write_line(&format!("{NOT_READY}{NOT_READY_MESSAGE}"));
        }

        passed
    }

    pub fn error(&self, error: &anyhow::Error) {
        let _ = Term::stderr()
            .write_line(&format!("{} {error:#}", style("ERROR:").red().bold()));
    }

    fn header(&self, text: &str) {
        let _ = self.term.write_line("");
        let _ = self.term.write_line(&style(text).bold().to_string());
        let _ = self.term.write_line("");
    }
}
