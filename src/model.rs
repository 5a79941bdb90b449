// Copyright (c) 2026  rdfcheck contributors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! In-memory model of a completed test execution.
//!
//! The validation engine constructs these values once, at the end of a run,
//! and never mutates them afterwards. Report writers only ever borrow a
//! [`TestExecution`], so concurrent writers on different sinks need no
//! coordination.

use time::OffsetDateTime;

/// One completed run of the validation engine against a dataset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestExecution {
    /// Identifier of this run.
    pub execution_uri: String,

    /// Identifier of the dataset under test.
    pub tested_dataset_uri: String,

    /// Aggregate statistics of the run.
    pub overview: DatasetOverviewResults,

    /// Individual test outcomes, in execution order.
    ///
    /// The [`ReportWriter`] contract treats this sequence opaquely; only a
    /// concrete format's results renderer looks inside.
    ///
    /// [`ReportWriter`]: crate::writer::ReportWriter
    pub results: Vec<TestCaseResult>,
}

/// Aggregate statistics of one [`TestExecution`].
///
/// Invariants upheld by the validation engine: `end_time >= start_time`
/// whenever both are present, and
/// `failed_tests + timeout_tests + error_tests <= total_tests`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DatasetOverviewResults {
    /// When the run started. Absent if the engine never recorded it.
    pub start_time: Option<OffsetDateTime>,

    /// When the run finished. Absent if the engine never recorded it.
    pub end_time: Option<OffsetDateTime>,

    /// Number of test cases executed.
    pub total_tests: u64,

    /// Number of test cases that failed.
    pub failed_tests: u64,

    /// Number of test cases that hit the engine's query timeout.
    pub timeout_tests: u64,

    /// Number of test cases that aborted with an execution error.
    pub error_tests: u64,
}

/// Outcome of a single test case within a [`TestExecution`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestCaseResult {
    /// Identifier of the executed test case.
    pub test_uri: String,

    /// How the test case concluded.
    pub status: TestStatus,

    /// Engine-provided detail for non-successful outcomes.
    pub message: Option<String>,
}

/// Conclusion of a single test case.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TestStatus {
    /// The dataset satisfied the test case.
    Success,

    /// The dataset violated the test case.
    Fail,

    /// The engine gave up on the test case's query.
    Timeout,

    /// The test case could not be evaluated.
    Error,
}
