// Copyright (c) 2026  rdfcheck contributors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::{cell::Cell, fs, io, rc::Rc};

use rdfcheck_report::{
    DatasetOverviewResults, JUnitXml, ReportWriter as _, TestCaseResult,
    TestExecution, TestStatus, WriterError,
};
use regex::Regex;
use time::macros::datetime;

fn example_execution() -> TestExecution {
    TestExecution {
        execution_uri: "run-42".into(),
        tested_dataset_uri: "urn:ds:example".into(),
        overview: DatasetOverviewResults {
            start_time: Some(datetime!(2023-01-01 00:00:00 UTC)),
            end_time: Some(datetime!(2023-01-01 00:01:05 UTC)),
            total_tests: 10,
            failed_tests: 2,
            timeout_tests: 1,
            error_tests: 0,
        },
        results: vec![
            TestCaseResult {
                test_uri: "urn:test:ok".into(),
                status: TestStatus::Success,
                message: None,
            },
            TestCaseResult {
                test_uri: "urn:test:bad".into(),
                status: TestStatus::Fail,
                message: Some("missing label".into()),
            },
        ],
    }
}

const CORRECT: &str = "\
<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<testsuite name=\"run-42\" timestamp=\"2023-01-01T00:01:05Z\" \
time=\"00:01:05\" tests=\"10\" failures=\"2\" errors=\"1\" \
package=\"urn:ds:example\">\n\
  <testcase name=\"urn:test:ok\"/>\n\
  <testcase name=\"urn:test:bad\">\n\
    <failure message=\"missing label\"/>\n\
  </testcase>\n\
</testsuite>";

#[test]
fn writes_complete_document() {
    let mut sink = Vec::new();

    JUnitXml::new()
        .write(&example_execution(), &mut sink)
        .unwrap();

    assert_eq!(String::from_utf8(sink).unwrap(), CORRECT);
}

#[test]
fn document_shape_holds() {
    let mut sink = Vec::new();
    JUnitXml::new()
        .write(&example_execution(), &mut sink)
        .unwrap();
    let document = String::from_utf8(sink).unwrap();

    assert!(document.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
    assert!(document.ends_with("</testsuite>"));
    assert_eq!(document.matches("<testsuite ").count(), 1);
    assert!(
        document.find("<testsuite ").unwrap() < document.find("<testcase").unwrap(),
    );

    let time = Regex::new("time=\"(\\d{2,}):(\\d{2}):(\\d{2})\"").unwrap();
    let captured = time.captures(&document).unwrap();
    assert_eq!(&captured[1], "00");
    assert_eq!(&captured[2], "01");
    assert_eq!(&captured[3], "05");
}

#[test]
fn repeated_writes_are_byte_identical() {
    let execution = example_execution();
    let writer = JUnitXml::new();

    let mut first = Vec::new();
    let mut second = Vec::new();
    writer.write(&execution, &mut first).unwrap();
    writer.write(&execution, &mut second).unwrap();

    assert_eq!(first, second);
}

#[test]
fn writes_through_file_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.xml");

    JUnitXml::new()
        .write_to_path(&example_execution(), &path)
        .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), CORRECT);
}

#[test]
fn unopenable_destination_reports_sink_open_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("report.xml");

    let err = JUnitXml::new()
        .write_to_path(&example_execution(), &path)
        .unwrap_err();

    assert!(matches!(err, WriterError::SinkOpen { .. }));
}

/// Sink failing every write after the first `capacity` bytes, tracking how
/// many times it is dropped.
struct FaultySink {
    written: usize,
    capacity: usize,
    drops: Rc<Cell<usize>>,
}

impl io::Write for FaultySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written + buf.len() > self.capacity {
            return Err(io::Error::new(io::ErrorKind::Other, "sink is full"));
        }
        self.written += buf.len();
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for FaultySink {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

#[test]
fn mid_write_failure_surfaces_and_still_closes_the_sink() {
    let drops = Rc::new(Cell::new(0));
    let sink = FaultySink {
        written: 0,
        capacity: 60,
        drops: Rc::clone(&drops),
    };

    let err = JUnitXml::new()
        .write(&example_execution(), sink)
        .unwrap_err();

    assert!(matches!(err, WriterError::Io(_)));
    assert_eq!(drops.get(), 1);
}

#[test]
fn unrepresentable_content_surfaces_as_format_error() {
    let mut execution = example_execution();
    execution.results[1].message = Some("bad \u{1} byte".into());
    let mut sink = Vec::new();

    let err = JUnitXml::new().write(&execution, &mut sink).unwrap_err();

    assert!(matches!(err, WriterError::Format(_)));
    // Header and stats were already streamed; the truncated document is
    // left as-is for the caller to discard.
    let partial = String::from_utf8(sink).unwrap();
    assert!(partial.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
    assert!(!partial.contains("</testsuite>"));
}
