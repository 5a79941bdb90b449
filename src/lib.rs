// Copyright (c) 2026  rdfcheck contributors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Result reporting for the `rdfcheck` RDF data-quality test runner.
//!
//! The validation engine produces an immutable [`TestExecution`] once a run
//! completes: aggregate statistics ([`DatasetOverviewResults`]) plus the
//! ordered individual outcomes. This crate turns that record into a report
//! document. [`ReportWriter`] is the contract every concrete format
//! implements; [`JUnitXml`] is the JUnit-style XML format understood by
//! common CI test runners.
//!
//! ```rust
//! use rdfcheck_report::{
//!     DatasetOverviewResults, JUnitXml, ReportWriter as _, TestExecution,
//! };
//!
//! let execution = TestExecution {
//!     execution_uri: "run-42".into(),
//!     tested_dataset_uri: "urn:ds:example".into(),
//!     overview: DatasetOverviewResults {
//!         total_tests: 10,
//!         failed_tests: 2,
//!         ..DatasetOverviewResults::default()
//!     },
//!     results: vec![],
//! };
//!
//! let mut sink = Vec::new();
//! JUnitXml::new().write(&execution, &mut sink).unwrap();
//! assert!(sink.starts_with(b"<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
//! ```

#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod duration;
pub mod error;
pub mod model;
pub mod writer;

#[doc(inline)]
pub use self::{
    error::{FormatError, WriterError, WriterResult},
    model::{DatasetOverviewResults, TestCaseResult, TestExecution, TestStatus},
    writer::{JUnitXml, ReportWriter},
};
