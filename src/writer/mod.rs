// Copyright (c) 2026  rdfcheck contributors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Tools for serializing a [`TestExecution`] into report documents.

pub mod junit;
pub mod out;

use std::{io, path::Path};

use tracing::debug;

use crate::{
    error::{FormatError, WriterError, WriterResult},
    model::TestExecution,
};

use self::out::WriteStrExt as _;

#[doc(inline)]
pub use self::junit::JUnitXml;

/// Serializer of a [`TestExecution`] into one concrete report format.
///
/// A report document is four text fragments — header, stats block, results
/// block, footer — emitted in that exact order. Implementors produce the
/// fragments as pure functions of the execution; the provided [`write()`]
/// composes and streams them, so a format never touches the sink itself.
///
/// [`write()`]: ReportWriter::write
pub trait ReportWriter {
    /// Produces the document header.
    fn header(&self) -> String;

    /// Produces the stats block summarizing the whole execution.
    fn stats(&self, execution: &TestExecution) -> Result<String, FormatError>;

    /// Produces the results block rendering the individual outcomes, in
    /// input order.
    ///
    /// # Errors
    ///
    /// If an outcome contains content the format cannot represent.
    fn results(&self, execution: &TestExecution) -> Result<String, FormatError>;

    /// Produces the document footer, terminating the document.
    fn footer(&self) -> String;

    /// Streams the complete report document into `sink`.
    ///
    /// The four fragments are written in order as UTF-8 bytes, each as soon
    /// as it is produced. The `sink` is consumed, flushed and dropped on
    /// every exit path, so it is closed exactly once whether the write
    /// succeeds or fails. No retry is attempted; that is the caller's call.
    ///
    /// # Errors
    ///
    /// [`WriterError::Io`] on any sink failure, [`WriterError::Format`] on
    /// unrepresentable report content. Bytes already streamed stay in the
    /// sink; a failed write may leave a truncated document, which callers
    /// must not consume. A flush failure after an earlier error never masks
    /// that error.
    fn write(&self, execution: &TestExecution, sink: impl io::Write) -> WriterResult<()> {
        let mut sink = sink;
        debug!(execution = %execution.execution_uri, "writing report");

        let written = write_fragments(self, execution, &mut sink);
        // Close is unconditional, even after a failed fragment.
        let flushed = sink.flush();
        drop(sink);

        written?;
        flushed?;
        Ok(())
    }

    /// Streams the complete report document into a file at `path`, creating
    /// or truncating it.
    ///
    /// # Errors
    ///
    /// [`WriterError::SinkOpen`] if the file cannot be opened, otherwise as
    /// [`write()`](ReportWriter::write).
    fn write_to_path(
        &self,
        execution: &TestExecution,
        path: impl AsRef<Path>,
    ) -> WriterResult<()> {
        let file = out::open_file(path)?;
        self.write(execution, file)
    }
}

/// Emits the four document fragments in their fixed order.
fn write_fragments<W: ReportWriter + ?Sized>(
    writer: &W,
    execution: &TestExecution,
    sink: &mut impl io::Write,
) -> WriterResult<()> {
    sink.write_str(writer.header()).map_err(WriterError::Io)?;
    sink.write_str(writer.stats(execution)?).map_err(WriterError::Io)?;
    sink.write_str(writer.results(execution)?).map_err(WriterError::Io)?;
    sink.write_str(writer.footer()).map_err(WriterError::Io)?;
    Ok(())
}
