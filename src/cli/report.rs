//! Progress and summary output.
//!
//! Every printer has a `_to` variant taking a writer so output can be tested.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::{
    Progress, RunReport, SetFailure, SetOutcome, SetReport, TranslationSet,
    parsers::json::LoadSkip,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Prints each set as it is compiled.
pub struct ConsoleProgress {
    verbose: bool,
}

impl ConsoleProgress {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Progress for ConsoleProgress {
    fn started(&mut self, set: &TranslationSet) {
        print_started_to(set, &mut io::stdout().lock());
    }

    fn finished(&mut self, outcome: &SetOutcome) {
        match outcome {
            SetOutcome::Done(report) => {
                print_done_to(report, self.verbose, &mut io::stdout().lock())
            }
            SetOutcome::Failed(failure) => print_failed_to(failure, &mut io::stderr().lock()),
        }
    }
}

pub fn print_started_to<W: Write>(set: &TranslationSet, writer: &mut W) {
    let _ = writeln!(writer, "Converting {}...", set.name);
}

pub fn print_done_to<W: Write>(report: &SetReport, verbose: bool, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Wrote {} ({} {}, {} {})",
            report.dest.display(),
            report.languages,
            plural(report.languages, "language", "languages"),
            report.messages,
            plural(report.messages, "message", "messages"),
        )
        .green()
    );

    if verbose {
        for skip in &report.skipped {
            print_skip_to(skip, writer);
        }
    }
}

fn print_skip_to<W: Write>(skip: &LoadSkip, writer: &mut W) {
    let _ = writeln!(
        writer,
        "  {} skipped {}: {}",
        "note:".bold().cyan(),
        skip.language,
        skip.reason.dimmed()
    );
}

pub fn print_failed_to<W: Write>(failure: &SetFailure, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} {}",
        FAILURE_MARK.red(),
        "error:".bold().red(),
        failure
    );
}

/// Warn about a command-line flag that is ignored.
pub fn print_unsupported_flag(flag: &str) {
    print_unsupported_flag_to(flag, &mut io::stderr().lock());
}

pub fn print_unsupported_flag_to<W: Write>(flag: &str, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {} is not supported",
        "warning:".bold().yellow(),
        flag
    );
}

/// Final line of the run.
pub fn print_summary(report: &RunReport) {
    print_summary_to(report, &mut io::stdout().lock());
}

pub fn print_summary_to<W: Write>(report: &RunReport, writer: &mut W) {
    if report.aborted {
        let _ = writeln!(writer, "Quitting...");
        return;
    }

    let done = report.done_count();
    let failed = report.failed_count();
    if report.outcomes.len() == 1 && failed == 0 {
        return;
    }

    let msg = format!(
        "Compiled {} of {} translation {}",
        done,
        report.outcomes.len(),
        plural(report.outcomes.len(), "set", "sets")
    );
    if failed == 0 {
        let _ = writeln!(writer, "{} {}", SUCCESS_MARK.green(), msg.green());
    } else {
        let _ = writeln!(
            writer,
            "{} {} ({} failed)",
            FAILURE_MARK.red(),
            msg,
            failed.to_string().bold().red()
        );
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
