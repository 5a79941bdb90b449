// Copyright (c) 2026  rdfcheck contributors
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Error types for report writing.

use std::{io, path::PathBuf};

use derive_more::{Display, Error};

/// Failure of a [`ReportWriter::write()`] (or [`write_to_path()`]) call.
///
/// Whatever bytes were already written before the failure are left in the
/// sink as-is: a failed write may leave a truncated document behind, and
/// callers must treat the report as unusable rather than consume it. The
/// sink itself is always closed before the error surfaces.
///
/// [`ReportWriter::write()`]: crate::writer::ReportWriter::write
/// [`write_to_path()`]: crate::writer::ReportWriter::write_to_path
#[derive(Debug, Display, Error)]
pub enum WriterError {
    /// The report destination could not be opened for writing.
    ///
    /// Reported before any document content is produced.
    #[display("cannot open report destination `{}`: {source}", path.display())]
    SinkOpen {
        /// The destination that could not be opened.
        path: PathBuf,

        /// The underlying I/O failure.
        source: io::Error,
    },

    /// Writing report bytes to an already-open sink failed.
    #[display("cannot write report: {_0}")]
    Io(io::Error),

    /// Report content could not be rendered.
    #[display("cannot render report: {_0}")]
    Format(FormatError),
}

/// Report content that cannot be represented in the output format.
#[derive(Debug, Display, Error)]
pub enum FormatError {
    /// A character with no legal representation in XML 1.0.
    #[display(
        "character U+{:04X} in {what} is not representable in XML",
        *ch as u32
    )]
    Unrepresentable {
        /// The offending character.
        #[error(not(source))]
        ch: char,

        /// Which piece of report content contained it.
        what: &'static str,
    },

    /// A timestamp that cannot be rendered in the report's convention.
    #[display("cannot format timestamp: {_0}")]
    Timestamp(time::error::Format),
}

/// Result type alias for report-writing operations.
pub type WriterResult<T> = Result<T, WriterError>;

impl From<io::Error> for WriterError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<FormatError> for WriterError {
    fn from(err: FormatError) -> Self {
        Self::Format(err)
    }
}

impl From<time::error::Format> for FormatError {
    fn from(err: time::error::Format) -> Self {
        Self::Timestamp(err)
    }
}
