// Copyright (c) 2026  rdfcheck contributors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! [JUnit XML report][1] [`ReportWriter`] implementation.
//!
//! [1]: https://llg.cubic.org/docs/junit

use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::{
    duration::format_elapsed,
    error::FormatError,
    model::{TestCaseResult, TestExecution, TestStatus},
    writer::ReportWriter,
};

/// [JUnit XML report][1] [`ReportWriter`] implementation.
///
/// Renders a [`TestExecution`] as a single `<testsuite>` element: the
/// aggregate statistics become its attributes and every individual outcome
/// becomes a `<testcase>` child. The dialect matches what common CI test
/// runners consume, including its quirk of folding timeouts into the
/// `errors` count.
///
/// [1]: https://llg.cubic.org/docs/junit
#[derive(Clone, Copy, Debug, Default)]
pub struct JUnitXml;

impl JUnitXml {
    /// Creates a new [`JUnitXml`] [`ReportWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ReportWriter for JUnitXml {
    fn header(&self) -> String {
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n".into()
    }

    /// Produces the opening `<testsuite>` tag.
    ///
    /// Attribute order is fixed: `name`, `timestamp`, `time`, `tests`,
    /// `failures`, `errors`, `package`. The `timestamp` and `time`
    /// attributes are omitted entirely when the overview lacks the
    /// timestamps to compute them; an empty `time=""` is never emitted.
    fn stats(&self, execution: &TestExecution) -> Result<String, FormatError> {
        let overview = &execution.overview;

        let mut stats = String::from("<testsuite");
        push_attribute(&mut stats, "name", &execution.execution_uri)?;
        if let Some(end) = overview.end_time {
            push_attribute(&mut stats, "timestamp", &format_timestamp(end)?)?;
        }
        if let Some(elapsed) = format_elapsed(overview.start_time, overview.end_time) {
            push_attribute(&mut stats, "time", &elapsed)?;
        }
        push_attribute(&mut stats, "tests", &overview.total_tests.to_string())?;
        push_attribute(&mut stats, "failures", &overview.failed_tests.to_string())?;
        // The dialect doesn't distinguish timeouts from errors; consumers
        // expect exactly this sum.
        let errors = overview.timeout_tests + overview.error_tests;
        push_attribute(&mut stats, "errors", &errors.to_string())?;
        push_attribute(&mut stats, "package", &execution.tested_dataset_uri)?;
        stats.push_str(">\n");
        Ok(stats)
    }

    fn results(&self, execution: &TestExecution) -> Result<String, FormatError> {
        let mut results = String::new();
        for outcome in &execution.results {
            push_test_case(&mut results, outcome)?;
        }
        Ok(results)
    }

    fn footer(&self) -> String {
        "</testsuite>".into()
    }
}

/// Renders one outcome as a `<testcase>` child element.
fn push_test_case(out: &mut String, outcome: &TestCaseResult) -> Result<(), FormatError> {
    out.push_str("  <testcase");
    push_attribute(out, "name", &outcome.test_uri)?;

    let child = match outcome.status {
        TestStatus::Success => {
            out.push_str("/>\n");
            return Ok(());
        }
        TestStatus::Fail => "failure",
        TestStatus::Timeout | TestStatus::Error => "error",
    };

    out.push_str(">\n    <");
    out.push_str(child);
    if let Some(message) = &outcome.message {
        push_attribute(out, "message", message)?;
    }
    if outcome.status == TestStatus::Timeout {
        push_attribute(out, "type", "timeout")?;
    }
    out.push_str("/>\n  </testcase>\n");
    Ok(())
}

/// Appends ` name="value"` with the value escaped for XML attribute context.
fn push_attribute(out: &mut String, name: &'static str, value: &str) -> Result<(), FormatError> {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    push_escaped(out, value, name)?;
    out.push('"');
    Ok(())
}

/// Appends `value` escaped for XML attribute context.
///
/// # Errors
///
/// [`FormatError::Unrepresentable`] on control characters XML 1.0 cannot
/// carry in any form (C0 other than tab, newline and carriage return).
fn push_escaped(out: &mut String, value: &str, what: &'static str) -> Result<(), FormatError> {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(ch),
            ch if (ch as u32) < 0x20 => {
                return Err(FormatError::Unrepresentable { ch, what });
            }
            ch => out.push(ch),
        }
    }
    Ok(())
}

/// Renders a timestamp in the report's RFC 3339 convention.
fn format_timestamp(at: OffsetDateTime) -> Result<String, FormatError> {
    Ok(at.format(&Rfc3339)?)
}
